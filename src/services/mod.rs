mod http_diagram_service;
pub mod source_loader;

pub use http_diagram_service::HttpDiagramService;
pub use source_loader::{discover_sources, read_source};
