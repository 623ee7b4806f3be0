//! UDPipe REST client.
//!
//! Posts text to a UDPipe `process` endpoint and returns the CoNLL-U it
//! produces. Transport failures and timeouts are retried with a fixed delay;
//! an answer that arrives but is unusable fails immediately.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::UdpipeSettings;
use crate::error::{AnnotationError, AnnotationResult};

/// Anything that can turn raw text into a CoNLL-U annotation.
pub trait AnnotationSource: Send + Sync {
    /// Produce the annotation for `text`.
    ///
    /// # Errors
    ///
    /// [`AnnotationError::Network`] when the source is unreachable,
    /// [`AnnotationError::Protocol`] when it answers with something unusable.
    fn fetch(&self, text: &str) -> AnnotationResult<String>;
}

/// Outcome of a single request attempt that did not produce an annotation.
#[derive(Debug)]
pub(crate) enum AttemptError {
    /// Worth trying again.
    Transient(String),
    /// Retrying cannot help.
    Fatal(AnnotationError),
}

/// Run `attempt` up to `max_attempts` times, sleeping `delay` between
/// transient failures.
pub(crate) fn with_retries<T, F>(
    max_attempts: u32,
    delay: Duration,
    mut attempt: F,
) -> AnnotationResult<T>
where
    F: FnMut(u32) -> Result<T, AttemptError>,
{
    let max_attempts = max_attempts.max(1);
    let mut last_error = String::new();

    for n in 1..=max_attempts {
        match attempt(n) {
            Ok(value) => return Ok(value),
            Err(AttemptError::Fatal(err)) => return Err(err),
            Err(AttemptError::Transient(message)) => {
                warn!(attempt = n, max_attempts, error = %message, "parsing service request failed");
                last_error = message;
                if n < max_attempts && !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }
    }

    Err(AnnotationError::Network {
        attempts: max_attempts,
        message: last_error,
    })
}

/// Interpret a UDPipe HTTP response.
pub(crate) fn decode_response(status: u16, body: &str) -> AnnotationResult<String> {
    if status != 200 {
        return Err(AnnotationError::Protocol(format!(
            "HTTP {status}: {}",
            preview(body)
        )));
    }
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| AnnotationError::Protocol(format!("response is not JSON: {e}")))?;
    value
        .get("result")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            AnnotationError::Protocol(format!("no result in response: {}", preview(body)))
        })
}

fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Blocking client for a UDPipe 2 REST endpoint.
#[derive(Debug, Clone)]
pub struct UdpipeClient {
    http: reqwest::blocking::Client,
    url: String,
    model: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl UdpipeClient {
    /// Build a client from settings.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::Network`] if the HTTP client cannot be
    /// constructed (for example, no TLS backend is available).
    pub fn new(settings: &UdpipeSettings) -> AnnotationResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AnnotationError::Network {
                attempts: 0,
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            url: settings.url.clone(),
            model: settings.model.clone(),
            max_retries: settings.max_retries,
            retry_delay: Duration::from_secs(settings.retry_delay_secs),
        })
    }

    /// The UDPipe model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn send_once(&self, text: &str) -> Result<String, AttemptError> {
        let form = [
            ("tokenizer", ""),
            ("tagger", ""),
            ("parser", ""),
            ("model", self.model.as_str()),
            ("data", text),
        ];
        let response = self
            .http
            .post(&self.url)
            .form(&form)
            .send()
            .map_err(|e| AttemptError::Transient(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| AttemptError::Transient(e.to_string()))?;
        decode_response(status, &body).map_err(AttemptError::Fatal)
    }
}

impl AnnotationSource for UdpipeClient {
    #[tracing::instrument(skip(self, text), fields(text_len = text.len(), model = %self.model))]
    fn fetch(&self, text: &str) -> AnnotationResult<String> {
        let annotation = with_retries(self.max_retries, self.retry_delay, |_| self.send_once(text))?;
        debug!(annotation_len = annotation.len(), "annotation received");
        Ok(annotation)
    }
}
