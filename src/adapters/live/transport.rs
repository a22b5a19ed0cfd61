//! Live transport that POSTs snapshots to the collector over HTTP.

use reqwest::Client;

use crate::ports::transport::{SnapshotTransport, TransportFuture, UploadReceipt};
use crate::snapshot::TaskSnapshot;

/// HTTP transport backed by a shared reqwest client.
pub struct HttpTransport {
    client: Client,
    upload_url: String,
}

impl HttpTransport {
    /// Creates a transport that posts to `upload_url`.
    #[must_use]
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self { client: Client::new(), upload_url: upload_url.into() }
    }
}

impl SnapshotTransport for HttpTransport {
    fn post(&self, snapshot: &TaskSnapshot) -> TransportFuture<'_> {
        // .json() serializes the body and sets Content-Type: application/json.
        let request = self.client.post(&self.upload_url).json(snapshot);

        Box::pin(async move {
            let response =
                request.send().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("upload request failed: {e}").into()
                })?;

            let status = response.status().as_u16();
            let body =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read collector response: {e}").into()
                })?;

            // A non-2xx answer is still a delivered attempt; the caller only
            // logs the receipt.
            Ok(UploadReceipt { status, body })
        })
    }
}
