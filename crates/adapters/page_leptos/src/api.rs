//! [`PairingBackend`] over the browser's fetch API, via `gloo-net`.
//!
//! The page is served by the pairing backend itself, so endpoints are
//! resolved against the page's own origin.

use gloo_net::http::{Request, Response};

use btpair_app::ports::PairingBackend;
use btpair_domain::device::DeviceDirectory;
use btpair_domain::error::PairingError;
use btpair_domain::form::ConnectForm;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Backend client issuing same-origin requests.
#[derive(Debug, Clone, Default)]
pub struct GlooBackend {
    base: String,
}

impl GlooBackend {
    /// Client for the origin the page was loaded from.
    pub fn same_origin() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self { base }
    }

    fn url(&self, name: &str) -> String {
        format!("{}/{name}", self.base)
    }

    async fn get_text(&self, name: &str) -> Result<String, PairingError> {
        let resp = Request::get(&self.url(name)).send().await.map_err(transport)?;
        read_body(resp).await
    }
}

fn transport(err: gloo_net::Error) -> PairingError {
    PairingError::Transport(err.to_string().into())
}

/// Check the HTTP status and read the body as text.
async fn read_body(resp: Response) -> Result<String, PairingError> {
    if !resp.ok() {
        return Err(PairingError::Status(resp.status()));
    }
    resp.text().await.map_err(transport)
}

impl PairingBackend for GlooBackend {
    async fn fetch_devices(&self) -> Result<DeviceDirectory, PairingError> {
        let body = self.get_text("devices").await?;
        Ok(DeviceDirectory::parse(&body)?)
    }

    async fn fetch_pincode(&self) -> Result<String, PairingError> {
        self.get_text("pincode").await
    }

    async fn fetch_status(&self) -> Result<String, PairingError> {
        self.get_text("status").await
    }

    async fn connect(&self, form: ConnectForm) -> Result<String, PairingError> {
        let resp = Request::post(&self.url("connect"))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(form.encode())
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_body(resp).await
    }
}
