//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;
use url::Url;

use crate::app::config::{ConfigOverrides, load_config};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Config file (defaults to ./wsdgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory holding diagram sources
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
    /// Directory receiving rendered images
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Diagram style, e.g. default, modern-blue, napkin
    #[arg(long)]
    style: Option<String>,
    /// Character encoding of the sources
    #[arg(short, long)]
    encoding: Option<String>,
    /// Service API version
    #[arg(long)]
    api_version: Option<u32>,
    /// HTTP proxy host for the render request
    #[arg(long)]
    proxy_address: Option<String>,
    /// HTTP proxy port for the render request
    #[arg(long)]
    proxy_port: Option<u16>,
    /// Keep sources after rendering them
    #[arg(short, long)]
    keep_sources: bool,
    /// Rendering service endpoint
    #[arg(long)]
    service_url: Option<Url>,
    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// List sources and destinations without rendering
    #[arg(long)]
    dry_run: bool,
}

impl GenerateArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_directory: self.source_dir.clone(),
            output_directory: self.output_dir.clone(),
            style: self.style.clone(),
            encoding: self.encoding.clone(),
            api_version: self.api_version,
            proxy_address: self.proxy_address.clone(),
            proxy_port: self.proxy_port,
            keep_sources: self.keep_sources,
            service_url: self.service_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

pub fn run_generate(args: GenerateArgs) -> Result<i32, AppError> {
    let working_dir = std::env::current_dir()?;
    let loaded = load_config(args.config.as_deref(), &working_dir)?;
    let config = args.overrides().apply(loaded)?;

    if args.dry_run {
        let entries = crate::app::api::plan(&config)?;
        if entries.is_empty() {
            println!("No source files found in {}", config.source_directory.display());
        }
        for entry in &entries {
            println!("{} -> {}", entry.source.display(), entry.destination.display());
        }
        return Ok(0);
    }

    let report = crate::app::api::generate(&config)?;

    if report.is_empty() {
        println!("No source files found in {}", config.source_directory.display());
        if !report.skipped.is_empty() {
            println!("Skipped {} existing image(s)", report.skipped.len());
        }
        return Ok(0);
    }

    println!(
        "✅ Rendered {} diagram(s) into {}",
        report.rendered.len(),
        config.output_directory.display()
    );
    if !report.failures.is_empty() {
        println!("⚠️  {} source(s) failed:", report.failures.len());
        for failure in &report.failures {
            println!("  • {}: {}", failure.source.display(), failure.error);
        }
    }

    Ok(if report.all_failed() { 1 } else { 0 })
}
