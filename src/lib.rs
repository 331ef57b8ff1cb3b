//! wsdgen: render sequence-diagram sources to PNG images through the
//! websequencediagrams.com service, one image per source file.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BatchReport, JobFailure, RenderPlanEntry, generate, plan};
pub use app::commands::generate::render_one;
pub use domain::{AppError, RenderConfig, RenderError, RenderJob, TextEncoding};
