//! Where the page document comes from: an HTTP URL or a local file.

use std::path::PathBuf;

use reqwest::Client;

/// Origin of the page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Fetch the document over HTTP(S).
    Url(String),
    /// Read the document from disk.
    File(PathBuf),
}

impl PageSource {
    /// Builds a source from a CLI argument: anything starting with
    /// `http://` or `https://` is fetched, everything else is treated as a
    /// file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Human-readable location, used as the snapshot's `location` field.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Loads page documents from a [`PageSource`].
pub struct PageLoader {
    client: Client,
}

impl PageLoader {
    /// Creates a loader with a fresh HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Reads the current document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the file cannot be read.
    pub async fn load(&self, source: &PageSource) -> Result<String, String> {
        match source {
            PageSource::Url(url) => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| format!("Failed to fetch page {url}: {e}"))?;
                response.text().await.map_err(|e| format!("Failed to read page {url}: {e}"))
            }
            PageSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read page {}: {e}", path.display())),
        }
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}
