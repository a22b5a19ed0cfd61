//! Service context bundling the port trait objects.

use std::sync::Arc;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::transport::HttpTransport;
use crate::config::Config;
use crate::ports::clock::Clock;
use crate::ports::transport::SnapshotTransport;
use crate::uploader::Uploader;

/// Bundles the port trait objects behind the relay.
///
/// Ports are shared handles because passes run as spawned tasks.
/// Constructors wire live adapters; tests build the struct directly with
/// doubles. The page port is wired per command, since each command decides
/// where its document comes from.
pub struct ServiceContext {
    /// Clock for snapshot timestamps.
    pub clock: Arc<dyn Clock>,
    /// Transport for snapshot delivery.
    pub transport: Arc<dyn SnapshotTransport>,
}

impl ServiceContext {
    /// Creates a live context wired from the config.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            clock: Arc::new(LiveClock),
            transport: Arc::new(HttpTransport::new(config.upload_url.clone())),
        }
    }

    /// Builds an uploader over this context's transport, gated by the
    /// config's effective enablement.
    #[must_use]
    pub fn uploader(&self, config: &Config) -> Uploader {
        Uploader::new(config.upload_enabled(), Arc::clone(&self.transport))
    }
}
