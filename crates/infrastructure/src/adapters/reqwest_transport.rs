//! HTTP transport implementation using reqwest.
//!
//! Resolves request paths against the configured API base URL and
//! converts between the domain request/response types and reqwest's.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use gradely_application::ports::{HttpTransport, TransportError};
use gradely_domain::request::{CONTENT_TYPE, FormPart, HttpMethod, MultipartForm, RequestBody};
use gradely_domain::{ApiRequest, ApiResponse};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use tracing::trace;

use crate::config::ClientConfig;

const MAX_REDIRECTS: usize = 10;

/// [`HttpTransport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Creates a transport from client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot
    /// be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        let mut transport = Self::with_client(client, &config.api_url)?;
        transport.timeout = config.timeout();
        Ok(transport)
    }

    /// Creates a transport around an existing reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {base_url}")))?;
        Ok(Self {
            client,
            base_url,
            timeout: None,
        })
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins the base URL and a request path.
    ///
    /// The path is appended verbatim so that a base URL carrying a path
    /// prefix (`https://host/backend`) keeps it.
    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let joined = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{e}: {joined}")))
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn build_body(
        builder: reqwest::RequestBuilder,
        request: &ApiRequest,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        match &request.body {
            RequestBody::None => Ok(builder),
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| TransportError::InvalidBody(format!("Invalid JSON: {e}")))?;
                let builder = match request.body.content_type() {
                    Some(content_type) if !request.headers.contains(CONTENT_TYPE) => {
                        builder.header(CONTENT_TYPE, content_type)
                    }
                    _ => builder,
                };
                Ok(builder.body(bytes))
            }
            // reqwest writes the Content-Type with the generated boundary.
            RequestBody::Multipart(form) => Ok(builder.multipart(Self::build_form(form)?)),
        }
    }

    fn build_form(form: &MultipartForm) -> Result<Form, TransportError> {
        let mut out = Form::new();
        for part in &form.parts {
            out = match part {
                FormPart::Text { name, value } => out.text(name.clone(), value.clone()),
                FormPart::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let mime = content_type.clone().unwrap_or_else(|| {
                        mime_guess::from_path(file_name)
                            .first_or_octet_stream()
                            .to_string()
                    });
                    let part = Part::bytes(bytes.clone())
                        .file_name(file_name.clone())
                        .mime_str(&mime)
                        .map_err(|e| {
                            TransportError::InvalidBody(format!("invalid MIME type {mime}: {e}"))
                        })?;
                    out.part(name.clone(), part)
                }
            };
        }
        Ok(out)
    }

    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        let host = || {
            error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = error.to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return TransportError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        TransportError::Other(error.to_string())
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.path)?;
        let timeout_ms = self
            .timeout
            .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX));

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        for header in request.headers.iter() {
            builder = builder.header(&header.name, &header.value);
        }
        builder = Self::build_body(builder, request)?;

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?
            .to_vec();
        let duration = start.elapsed();

        trace!(
            method = %request.method,
            %url,
            status,
            elapsed = ?duration,
            "response received"
        );

        Ok(ApiResponse::new(status, headers, body, duration))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transport(base: &str) -> ReqwestTransport {
        ReqwestTransport::with_client(Client::new(), base).unwrap()
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_url_for_keeps_base_prefix() {
        let t = transport("https://gradely.example.edu/backend/");
        assert_eq!(
            t.url_for("/api/projects/").unwrap().as_str(),
            "https://gradely.example.edu/backend/api/projects/"
        );
        assert_eq!(
            t.url_for("api/me/").unwrap().as_str(),
            "https://gradely.example.edu/backend/api/me/"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ReqwestTransport::with_client(Client::new(), "not a url");
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_config_applies_timeout() {
        let config = ClientConfig {
            timeout_secs: Some(5),
            ..ClientConfig::default()
        };
        let t = ReqwestTransport::from_config(&config).unwrap();
        assert_eq!(t.timeout, Some(Duration::from_secs(5)));
        assert_eq!(t.base_url().as_str(), "http://127.0.0.1:8000/");
    }

    #[tokio::test]
    async fn test_timeout_is_reported_with_its_limit() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::any())
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let t = transport(&server.uri()).with_timeout(Duration::from_millis(50));
        let err = t.execute(&ApiRequest::get("/api/me/")).await.unwrap_err();

        assert_eq!(err, TransportError::Timeout { timeout_ms: 50 });
    }

    #[test]
    fn test_form_with_bad_mime_is_rejected() {
        let form = MultipartForm::new().file(
            "document",
            "report.pdf",
            Some("not a mime".to_string()),
            Vec::new(),
        );
        assert!(matches!(
            ReqwestTransport::build_form(&form),
            Err(TransportError::InvalidBody(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_error() {
        // Port 9 (discard) is essentially never listening locally.
        let t = transport("http://127.0.0.1:9");
        let err = t.execute(&ApiRequest::get("/api/me/")).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::ConnectionRefused { .. } | TransportError::ConnectionFailed(_)
        ));
    }
}
