//! Content sources: where installed file bytes come from.
//!
//! Two realizations exist. [`BundledSource`] reads resources compiled into
//! the binary; [`HttpSource`] downloads them from a fixed base URL. Both
//! resolve the same identifiers (`commands/all.md`, ...), so one manifest
//! serves either.

use crate::error::{AgenticError, FetchError, Result};
use crate::paths;
use rust_embed::Embed;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/ItamarZand88/claude-code-agentic-engineering/main/src/claude_agentic/resources";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Origin of file bytes for manifest entries.
pub trait ContentSource {
    fn fetch(&self, id: &str) -> std::result::Result<Vec<u8>, FetchError>;

    /// Short human-readable description, e.g. `bundled resources`.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// Bundled resources
// ---------------------------------------------------------------------------

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/resources/"]
struct Resources;

/// Raw bytes of the bundled `manifest.yaml`.
pub fn bundled_manifest() -> Result<Vec<u8>> {
    <Resources as Embed>::get(paths::MANIFEST_FILE)
        .map(|f| f.data.into_owned())
        .ok_or_else(|| AgenticError::BundledResourceMissing(paths::MANIFEST_FILE.to_string()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

impl ContentSource for BundledSource {
    fn fetch(&self, id: &str) -> std::result::Result<Vec<u8>, FetchError> {
        <Resources as Embed>::get(id)
            .map(|f| f.data.into_owned())
            .ok_or_else(|| FetchError::NotFound(format!("bundled resource {id}")))
    }

    fn describe(&self) -> String {
        "bundled resources".to_string()
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("agentic/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AgenticError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id.trim_start_matches('/'))
    }
}

fn classify(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Network(format!("{url}: {err}"))
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, id: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let url = self.url_for(id);
        tracing::debug!(url = %url, "fetching");
        let resp = self.client.get(&url).send().map_err(|e| classify(&url, e))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url));
        }
        if !status.is_success() {
            return Err(FetchError::Network(format!("{url}: HTTP {status}")));
        }
        resp.bytes()
            .map(|b| b.to_vec())
            .map_err(|e| classify(&url, e))
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    #[test]
    fn bundled_source_serves_manifest_entries() {
        let manifest = Manifest::bundled().unwrap();
        for entry in manifest.entries() {
            let bytes = BundledSource
                .fetch(&entry.source_id)
                .unwrap_or_else(|e| panic!("{} missing from bundle: {e}", entry.source_id));
            assert!(!bytes.is_empty(), "{} is empty", entry.source_id);
        }
    }

    #[test]
    fn every_bundled_file_is_listed_in_manifest() {
        let manifest = Manifest::bundled().unwrap();
        for id in <Resources as Embed>::iter() {
            if id == paths::MANIFEST_FILE {
                continue;
            }
            assert!(
                manifest.entries().iter().any(|e| e.source_id == id),
                "bundled file {id} is not in manifest.yaml"
            );
        }
    }

    #[test]
    fn bundled_source_unknown_id_is_not_found() {
        let err = BundledSource.fetch("commands/nope.md").unwrap_err();
        assert!(matches!(err, FetchError::NotFound(_)));
    }

    #[test]
    fn url_for_joins_without_double_slash() {
        let src = HttpSource::new("https://example.com/res/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            src.url_for("commands/all.md"),
            "https://example.com/res/commands/all.md"
        );
    }

    #[test]
    fn http_source_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/commands/a.md")
            .with_status(200)
            .with_body("A")
            .create();
        let src = HttpSource::new(&server.url(), Duration::from_secs(5)).unwrap();
        assert_eq!(src.fetch("commands/a.md").unwrap(), b"A".to_vec());
        mock.assert();
    }

    #[test]
    fn http_source_maps_404_to_not_found() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/agents/x.md").with_status(404).create();
        let src = HttpSource::new(&server.url(), Duration::from_secs(5)).unwrap();
        assert!(matches!(
            src.fetch("agents/x.md").unwrap_err(),
            FetchError::NotFound(_)
        ));
    }

    #[test]
    fn http_source_maps_server_error_to_network() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/agents/x.md").with_status(500).create();
        let src = HttpSource::new(&server.url(), Duration::from_secs(5)).unwrap();
        assert!(matches!(
            src.fetch("agents/x.md").unwrap_err(),
            FetchError::Network(_)
        ));
    }

    #[test]
    fn http_source_maps_stalled_server_to_timeout() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection and never answer.
        let stalled = std::thread::spawn(move || {
            let (_stream, _) = listener.accept().unwrap();
            std::thread::sleep(Duration::from_secs(3));
        });

        let src = HttpSource::new(&format!("http://{addr}"), Duration::from_secs(1)).unwrap();
        let err = src.fetch("commands/a.md").unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)), "got {err:?}");
        stalled.join().unwrap();
    }

    #[test]
    fn http_source_unreachable_host_is_network_error() {
        // Port 9 (discard) on localhost is not served in test environments.
        let src = HttpSource::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = src.fetch("commands/a.md").unwrap_err();
        assert!(matches!(err, FetchError::Network(_) | FetchError::Timeout(_)));
    }
}
