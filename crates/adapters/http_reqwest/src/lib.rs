//! # btpair-adapter-http-reqwest
//!
//! HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`PairingBackend`] port against the pairing backend:
//!   `GET /devices`, `GET /pincode`, `GET /status`, `POST /connect`
//! - Treat non-2xx responses as failures
//! - Decode the `/devices` body into a [`DeviceDirectory`]
//! - Post the connect form as `application/x-www-form-urlencoded`
//!
//! No retries and no timeouts: every request is issued once and its outcome
//! handed back as-is.
//!
//! ## Dependency rule
//! Depends on `btpair-app` (for the port trait) and `btpair-domain` (for
//! domain types). Never leaks reqwest types into the domain.

mod config;
mod error;

pub use config::HttpBackendConfig;
pub use error::HttpBackendError;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use btpair_app::ports::PairingBackend;
use btpair_domain::device::DeviceDirectory;
use btpair_domain::error::PairingError;
use btpair_domain::form::ConnectForm;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// [`PairingBackend`] speaking HTTP to the pairing portal.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpBackendError::InvalidUrl`] if the URL cannot be parsed,
    /// or [`HttpBackendError::Request`] if the HTTP client cannot be built.
    pub fn new(config: &HttpBackendConfig) -> Result<Self, HttpBackendError> {
        let mut base_url = Url::parse(&config.url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL endpoints are resolved against (always ends with `/`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url, HttpBackendError> {
        Ok(self.base_url.join(name)?)
    }

    async fn get_text(&self, name: &str) -> Result<String, HttpBackendError> {
        let url = self.endpoint(name)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        read_body(response).await
    }
}

/// Check the HTTP status and read the body as text.
async fn read_body(response: reqwest::Response) -> Result<String, HttpBackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(HttpBackendError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

impl PairingBackend for HttpBackend {
    async fn fetch_devices(&self) -> Result<DeviceDirectory, PairingError> {
        let body = self.get_text("devices").await?;
        Ok(DeviceDirectory::parse(&body)?)
    }

    async fn fetch_pincode(&self) -> Result<String, PairingError> {
        Ok(self.get_text("pincode").await?)
    }

    async fn fetch_status(&self) -> Result<String, PairingError> {
        Ok(self.get_text("status").await?)
    }

    async fn connect(&self, form: ConnectForm) -> Result<String, PairingError> {
        let url = self.endpoint("connect")?;
        tracing::debug!(%url, device = %form.bt_addr, "POST");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.encode())
            .send()
            .await
            .map_err(HttpBackendError::from)?;
        Ok(read_body(response).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use btpair_domain::device::{DeviceKey, Security};
    use btpair_domain::form::FormField;

    async fn echo_form(headers: HeaderMap, body: String) -> String {
        let content_type = headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        format!("{content_type}|{body}")
    }

    fn portal() -> Router {
        Router::new()
            .route(
                "/devices",
                get(|| async { r#"[["aa:bb","Printer"],["cc:dd","Reader","enterprise"]]"# }),
            )
            .route("/pincode", get(|| async { "0000" }))
            .route("/status", get(|| async { "" }))
            .route("/connect", post(echo_form))
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn backend(url: String) -> HttpBackend {
        HttpBackend::new(&HttpBackendConfig { url }).unwrap()
    }

    #[test]
    fn should_normalise_base_url_with_trailing_slash() {
        let backend = backend("http://10.0.0.1/portal".into());
        assert_eq!(backend.base_url().as_str(), "http://10.0.0.1/portal/");
        assert_eq!(
            backend.endpoint("devices").unwrap().as_str(),
            "http://10.0.0.1/portal/devices"
        );
    }

    #[test]
    fn should_reject_invalid_base_url() {
        let result = HttpBackend::new(&HttpBackendConfig {
            url: "not a url".into(),
        });
        assert!(matches!(result, Err(HttpBackendError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn should_fetch_and_decode_devices() {
        let backend = backend(serve(portal()).await);
        let directory = backend.fetch_devices().await.unwrap();

        assert_eq!(directory.len(), 2);
        let reader = directory.get(&DeviceKey::from("cc:dd")).unwrap();
        assert_eq!(reader.name, "Reader");
        assert_eq!(reader.security, Some(Security::Enterprise));
    }

    #[tokio::test]
    async fn should_fetch_plain_text_values() {
        let backend = backend(serve(portal()).await);
        assert_eq!(backend.fetch_pincode().await.unwrap(), "0000");
        assert_eq!(backend.fetch_status().await.unwrap(), "");
    }

    #[tokio::test]
    async fn should_post_urlencoded_form() {
        let backend = backend(serve(portal()).await);
        let mut form = ConnectForm::for_device(&DeviceKey::from("cc:dd"));
        form.set(FormField::Service, "Audio Sink");

        let body = backend.connect(form).await.unwrap();
        assert_eq!(
            body,
            "application/x-www-form-urlencoded|bt_addr=cc%3Add&service=Audio+Sink&protoport="
        );
    }

    #[tokio::test]
    async fn should_resolve_endpoints_under_path_prefix() {
        let url = serve(Router::new().nest("/portal", portal())).await;
        let backend = backend(format!("{url}/portal"));
        assert_eq!(backend.fetch_pincode().await.unwrap(), "0000");
    }

    #[tokio::test]
    async fn should_report_non_success_status() {
        let router = Router::new().route(
            "/status",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let backend = backend(serve(router).await);

        let err = backend.fetch_status().await.unwrap_err();
        assert!(matches!(err, PairingError::Status(500)));
    }

    #[tokio::test]
    async fn should_report_missing_endpoint_as_status() {
        let backend = backend(serve(Router::new()).await);
        let err = backend.fetch_pincode().await.unwrap_err();
        assert!(matches!(err, PairingError::Status(404)));
    }

    #[tokio::test]
    async fn should_report_malformed_directory() {
        let router = Router::new().route("/devices", get(|| async { "<html>" }));
        let backend = backend(serve(router).await);

        let err = backend.fetch_devices().await.unwrap_err();
        assert!(matches!(err, PairingError::Directory(_)));
    }

    #[tokio::test]
    async fn should_report_unreachable_backend_as_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = backend(format!("http://{addr}"));
        let err = backend.fetch_devices().await.unwrap_err();
        assert!(matches!(err, PairingError::Transport(_)));
    }
}
