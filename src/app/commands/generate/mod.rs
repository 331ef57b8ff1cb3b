//! Generate command: render every diagram source into an image.

mod batch;
mod pipeline;

pub use batch::{BatchReport, JobFailure, RenderPlanEntry, execute, plan};
pub use pipeline::render_one;
