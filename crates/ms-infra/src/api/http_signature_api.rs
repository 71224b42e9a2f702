//! HTTP client for the remote signature service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, warn};

use ms_core::ports::{SignatureApiError, SignatureApiPort};
use ms_core::{DomainToken, HostDiagnostics, RawSignature};

/// Response body: `{ "signatures": { "signatures": [...] } }`.
#[derive(Debug, Deserialize)]
struct SignaturesResponse {
    signatures: SignatureList,
}

#[derive(Debug, Deserialize)]
struct SignatureList {
    signatures: Vec<RawSignature>,
}

pub struct HttpSignatureApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSignatureApi {
    /// `timeout` of `None` lets a request run as long as the server keeps it open.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SignatureApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SignatureApiError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SignatureApiPort for HttpSignatureApi {
    #[tracing::instrument(
        name = "infra.signature_api.fetch",
        skip_all,
        fields(email_address = %diagnostics.email_address)
    )]
    async fn fetch_signatures(
        &self,
        token: &DomainToken,
        diagnostics: &HostDiagnostics,
    ) -> Result<Vec<RawSignature>, SignatureApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("domaintoken", token.as_str()),
                ("emailaddress", diagnostics.email_address.as_str()),
                ("hostName", diagnostics.host_name.as_str()),
                ("hostVersion", diagnostics.host_version.as_str()),
                ("manifestVersion", diagnostics.manifest_version.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Signature request failed");
                SignatureApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Signature service returned an error status");
            return Err(SignatureApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SignatureApiError::Transport(e.to_string()))?;
        let parsed: SignaturesResponse = serde_json::from_slice(&body)
            .map_err(|e| SignatureApiError::Decode(e.to_string()))?;

        debug!(
            count = parsed.signatures.signatures.len(),
            "Received signatures from service"
        );
        Ok(parsed.signatures.signatures)
    }
}
