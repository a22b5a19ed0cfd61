//! Transport port for delivering snapshots to the collector.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use crate::snapshot::TaskSnapshot;

/// Boxed future type alias used by [`SnapshotTransport`] to keep the trait
/// dyn-compatible.
pub type TransportFuture<'a> = Pin<
    Box<dyn Future<Output = Result<UploadReceipt, Box<dyn Error + Send + Sync>>> + Send + 'a>,
>;

/// What the collector answered, logged verbatim and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// HTTP status code of the response.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// Delivers serialized snapshots to the collector endpoint.
pub trait SnapshotTransport: Send + Sync {
    /// Posts one snapshot.
    ///
    /// Any response from the collector is a delivered attempt, non-2xx
    /// included; the receipt carries whatever came back.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response body
    /// cannot be read.
    fn post(&self, snapshot: &TaskSnapshot) -> TransportFuture<'_>;
}
