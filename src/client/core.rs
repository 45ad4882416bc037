// File: src/client/core.rs
use crate::client::redirect::{MAX_REDIRECTS, resolve_location};
use anyhow::{Context, Result, anyhow};
use http::{Request, Uri, header};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

type HttpsClient = Client<hyper_rustls::HttpsConnector<HttpConnector>, String>;

/// Downloads the raw feed document.
#[derive(Clone, Debug)]
pub struct FeedClient {
    pub url: Uri,
    client: HttpsClient,
}

impl FeedClient {
    pub fn new(url: &str) -> Result<Self> {
        let uri: Uri = url
            .parse()
            .with_context(|| format!("Invalid feed URL '{}'", url))?;

        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain http feeds still work; https will fail at handshake.
            log::warn!("No valid system certificates found.");
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(https_connector);

        Ok(Self { url: uri, client })
    }

    /// GETs the feed and returns its body as text.
    ///
    /// Redirects are followed up to [`MAX_REDIRECTS`]; any other non-2xx
    /// status is an error.
    pub async fn fetch(&self) -> Result<String> {
        let mut uri = self.url.clone();
        let mut redirects = 0;

        loop {
            log::debug!("making GET request to \"{}\"", uri);

            let req = Request::get(uri.clone())
                .header(header::USER_AGENT, concat!("sciopero/", env!("CARGO_PKG_VERSION")))
                .body(String::new())
                .context("Failed to build feed request")?;

            let response = self
                .client
                .request(req)
                .await
                .with_context(|| format!("GET {} failed", uri))?;

            let status = response.status();

            if status.is_redirection() && redirects < MAX_REDIRECTS {
                let next = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|l| l.to_str().ok())
                    .and_then(|l| resolve_location(&uri, l));
                if let Some(next) = next {
                    log::debug!("following redirect ({}) to \"{}\"", status, next);
                    uri = next;
                    redirects += 1;
                    continue;
                }
            }

            if !status.is_success() {
                return Err(anyhow!("GET {} returned {}", uri, status));
            }

            let body = response
                .into_body()
                .collect()
                .await
                .with_context(|| format!("Failed to read body of {}", uri))?
                .to_bytes();
            let data = String::from_utf8_lossy(&body).into_owned();

            log::debug!(
                "got response \"{}...\"",
                data.chars().take(30).collect::<String>()
            );

            return Ok(data);
        }
    }
}
