//! Remote detection over HTTP.
//!
//! One multipart `POST {base_url}/detect` per call, with a single `file`
//! field. Non-2xx replies become [`Error::Api`] with the body kept verbatim;
//! transport failures become [`Error::Network`]; a 2xx body that is not
//! valid JSON becomes [`Error::MalformedResponse`].

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use url::Url;

use veritas_core::prelude::*;
use veritas_core::{AnalysisResult, ImageUpload};

use crate::detector::Detector;

/// Hosted detection service used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://imagedetection-tw7n.onrender.com";

/// Name of the multipart field carrying the image
const FILE_FIELD: &str = "file";

/// Build `{base_url}/detect`, tolerating a trailing slash on the base.
pub fn detect_endpoint(base_url: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url).map_err(|e| Error::invalid_endpoint(base_url, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_endpoint(
            base_url,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    url.path_segments_mut()
        .map_err(|_| Error::invalid_endpoint(base_url, "URL cannot be a base"))?
        .pop_if_empty()
        .push("detect");

    Ok(url)
}

/// Detector backed by the remote classification service
pub struct RemoteDetector {
    client: reqwest::Client,
    endpoint: Url,
}

impl RemoteDetector {
    /// Create a detector for `base_url`.
    ///
    /// `timeout` of `None` means requests may wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = detect_endpoint(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        info!("Remote detector endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn form_for(upload: &ImageUpload) -> Result<Form> {
        let mut part = Part::bytes(upload.bytes.to_vec()).file_name(upload.file_name.clone());
        if let Some(mime) = &upload.mime {
            part = part
                .mime_str(mime)
                .map_err(|e| Error::network(format!("invalid MIME type '{mime}': {e}")))?;
        }
        Ok(Form::new().part(FILE_FIELD, part))
    }
}

impl Detector for RemoteDetector {
    async fn detect(&self, upload: &ImageUpload) -> Result<AnalysisResult> {
        let form = Self::form_for(upload)?;

        debug!("POST {} ({})", self.endpoint, upload.file_name);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!("Detection endpoint returned {}: {}", status.as_u16(), body);
            return Err(Error::api(status.as_u16(), body));
        }

        debug!("Detection response: {}", body);

        serde_json::from_str(&body).map_err(|e| Error::malformed_response(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_detect() {
        let url = detect_endpoint("https://imagedetection-tw7n.onrender.com").unwrap();
        assert_eq!(url.as_str(), "https://imagedetection-tw7n.onrender.com/detect");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let url = detect_endpoint("http://localhost:8000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/detect");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = detect_endpoint("http://example.com/api/v1/").unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/v1/detect");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let err = detect_endpoint("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_endpoint_rejects_non_http_scheme() {
        assert!(detect_endpoint("ftp://example.com").is_err());
        assert!(detect_endpoint("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_new_with_timeout() {
        let detector =
            RemoteDetector::new("http://127.0.0.1:9", Some(Duration::from_secs(5))).unwrap();
        assert_eq!(detector.endpoint().path(), "/detect");
    }
}
