//! Batch driver: one independent render job per source file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{RenderConfig, RenderError, RenderJob, destination_for};
use crate::ports::DiagramService;
use crate::services::{discover_sources, read_source};

use super::pipeline::render_one;

/// A source whose job failed, with the reason.
#[derive(Debug)]
pub struct JobFailure {
    pub source: PathBuf,
    pub error: RenderError,
}

/// Outcome of a generate run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Destination images written, in processing order.
    pub rendered: Vec<PathBuf>,
    pub failures: Vec<JobFailure>,
    /// Sources removed after a successful render.
    pub deleted_sources: Vec<PathBuf>,
    /// Files left alone because they are their own destination image.
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.rendered.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// True when there was work and none of it succeeded.
    pub fn all_failed(&self) -> bool {
        !self.is_empty() && self.rendered.is_empty()
    }
}

/// A source and the image it would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlanEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Render every source file in the configured source directory.
///
/// Per-file failures are logged and recorded; they never stop the batch.
pub fn execute(config: &RenderConfig, service: &impl DiagramService) -> BatchReport {
    tracing::debug!("Source directory: {}", config.source_directory.display());
    tracing::debug!("Output directory: {}", config.output_directory.display());

    let mut report = BatchReport::default();
    let entries = pending_entries(config, &mut report.skipped);
    if entries.is_empty() {
        tracing::info!("No source files found");
        return report;
    }
    tracing::debug!("Found {} source files", entries.len());

    if let Err(err) = fs::create_dir_all(&config.output_directory) {
        tracing::warn!(
            directory = %config.output_directory.display(),
            error = %err,
            "Could not create output directory"
        );
    }

    for RenderPlanEntry { source, destination } in entries {
        tracing::debug!("Processing {}", source.display());

        match process_source(&source, destination, config, service) {
            Ok(destination) => {
                if !config.keep_sources && delete_source(&source) {
                    report.deleted_sources.push(source);
                }
                report.rendered.push(destination);
            }
            Err(error) => {
                tracing::error!(source = %source.display(), "{error}");
                report.failures.push(JobFailure { source, error });
            }
        }
    }

    tracing::info!(
        rendered = report.rendered.len(),
        failed = report.failures.len(),
        "Diagram generation finished"
    );
    report
}

/// List what `execute` would do, without network or file changes.
pub fn plan(config: &RenderConfig) -> Vec<RenderPlanEntry> {
    pending_entries(config, &mut Vec::new())
}

/// Pair each discovered source with its destination.
///
/// A source that would be overwritten by its own image (an earlier output
/// lying in a shared source and output directory) is moved to `skipped`.
fn pending_entries(config: &RenderConfig, skipped: &mut Vec<PathBuf>) -> Vec<RenderPlanEntry> {
    let mut entries = Vec::new();
    for source in discover_sources(&config.source_directory) {
        let destination = destination_for(&source, &config.output_directory);
        if is_same_file(&source, &destination) {
            tracing::debug!(source = %source.display(), "Skipping file that is its own output");
            skipped.push(source);
        } else {
            entries.push(RenderPlanEntry { source, destination });
        }
    }
    entries
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
    if source == destination {
        return true;
    }
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}

fn process_source(
    source: &Path,
    destination: PathBuf,
    config: &RenderConfig,
    service: &impl DiagramService,
) -> Result<PathBuf, RenderError> {
    let text = read_source(source, config.encoding)?;
    let job = RenderJob {
        source_path: source.to_path_buf(),
        source_text: text,
        destination_path: destination,
    };
    render_one(&job, config, service)?;
    Ok(job.destination_path)
}

fn delete_source(source: &Path) -> bool {
    match fs::remove_file(source) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(source = %source.display(), error = %err, "Could not delete source");
            false
        }
    }
}
