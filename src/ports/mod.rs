mod diagram_service;

pub use diagram_service::DiagramService;
