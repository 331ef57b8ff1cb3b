mod fake_diagram_service;

pub use fake_diagram_service::FakeDiagramService;
