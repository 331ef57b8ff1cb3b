//! Rendering service client implementation using reqwest.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::Proxy;
use url::Url;

use crate::domain::{AppError, ArtifactReference, RenderConfig, RenderError, join_response_lines};
use crate::ports::DiagramService;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// HTTP client for the sequence-diagram rendering service.
///
/// The render request goes through the configured proxy, the artifact
/// download never does. Neither client keeps idle connections, so nothing
/// outlives the job that opened it.
///
/// A proxy that cannot be set up is held as an error and reported by every
/// render call, so it fails each job instead of the whole run.
#[derive(Debug, Clone)]
pub struct HttpDiagramService {
    service_url: Url,
    render_client: Result<Client, String>,
    fetch_client: Client,
}

impl HttpDiagramService {
    pub fn new(config: &RenderConfig) -> Result<Self, AppError> {
        let render_client = match config.proxy() {
            Some(proxy) => Proxy::all(proxy.url())
                .map_err(|e| format!("invalid proxy {}: {}", proxy.url(), e))
                .and_then(|proxy| {
                    base_builder(config.timeout_secs)
                        .proxy(proxy)
                        .build()
                        .map_err(|e| format!("failed to create proxied HTTP client: {}", e))
                }),
            None => base_builder(config.timeout_secs)
                .build()
                .map_err(|e| format!("failed to create HTTP client: {}", e)),
        };
        if let Err(details) = &render_client {
            tracing::warn!(details = %details, "Render requests will fail");
        }

        let fetch_client = base_builder(config.timeout_secs)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { service_url: config.service_url.clone(), render_client, fetch_client })
    }
}

fn base_builder(timeout_secs: Option<u64>) -> ClientBuilder {
    Client::builder()
        .no_proxy()
        .pool_max_idle_per_host(0)
        .timeout(timeout_secs.map(Duration::from_secs))
}

fn check_status(response: Response, url: &Url) -> Result<Response, RenderError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RenderError::UnexpectedStatus { url: url.to_string(), status: status.as_u16() })
    }
}

impl DiagramService for HttpDiagramService {
    fn render(&self, form_body: &str) -> Result<String, RenderError> {
        let url = &self.service_url;
        let client = self
            .render_client
            .as_ref()
            .map_err(|details| RenderError::connection(url.as_str(), details))?;
        let response = client
            .post(url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form_body.to_string())
            .send()
            .map_err(|e| RenderError::connection(url.as_str(), e))?;

        let body = check_status(response, url)?
            .text()
            .map_err(|e| RenderError::connection(url.as_str(), e))?;

        Ok(join_response_lines(&body))
    }

    fn fetch_artifact(
        &self,
        reference: &ArtifactReference,
        destination: &Path,
    ) -> Result<u64, RenderError> {
        let url = reference.resolve(&self.service_url)?;
        let response = self
            .fetch_client
            .get(url.clone())
            .send()
            .map_err(|e| RenderError::connection(url.as_str(), e))?;
        let mut response = check_status(response, &url)?;

        let file = File::create(destination)
            .map_err(|e| RenderError::destination_write(destination, e))?;
        let mut writer = BufWriter::new(file);

        let copied = copy_body(&mut response, &mut writer, &url, destination)
            .and_then(|written| {
                writer
                    .flush()
                    .map_err(|e| RenderError::destination_write(destination, e))?;
                Ok(written)
            });
        drop(writer);

        if copied.is_err() {
            // Best effort: do not leave a truncated image behind.
            let _ = fs::remove_file(destination);
        }
        copied
    }
}

/// Stream the body in chunks, keeping read and write failures apart.
fn copy_body(
    response: &mut Response,
    writer: &mut impl Write,
    url: &Url,
    destination: &Path,
) -> Result<u64, RenderError> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut written = 0u64;
    loop {
        let read =
            response.read(&mut buffer).map_err(|e| RenderError::connection(url.as_str(), e))?;
        if read == 0 {
            return Ok(written);
        }
        writer
            .write_all(&buffer[..read])
            .map_err(|e| RenderError::destination_write(destination, e))?;
        written += read as u64;
    }
}
