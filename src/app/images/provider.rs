use async_trait::async_trait;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use url::Url;

use super::image_data::{decode_bytes, ImageData};
use super::ImageError;
use crate::profile::ImageSource;

/// Directory bundled asset paths are resolved against.
const ASSETS_ROOT: &str = "assets";

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap();
}

/// Resolves one opaque image source to raw RGBA data.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn fetch(&self, source: &ImageSource) -> Result<ImageData, ImageError>;
}

/// Default provider: HTTP(S) for remote sources, the assets directory for
/// bundled ones. Callers never branch on the source kind themselves.
pub struct SourceProvider {
    assets_root: PathBuf,
}

impl SourceProvider {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
        }
    }

    async fn fetch_remote(&self, url: &Url) -> Result<ImageData, ImageError> {
        let resp = CLIENT
            .get(url.as_str())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ImageError::Network(e.to_string()))?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;
        decode_in_background(bytes.to_vec()).await
    }

    async fn fetch_bundled(&self, path: &Path) -> Result<ImageData, ImageError> {
        let full = self.assets_root.join(path);
        let bytes = tokio::fs::read(&full).await?;
        decode_in_background(bytes).await
    }
}

async fn decode_in_background(bytes: Vec<u8>) -> Result<ImageData, ImageError> {
    tokio::task::spawn_blocking(move || decode_bytes(&bytes))
        .await
        .map_err(|e| ImageError::Task(e.to_string()))?
}

#[async_trait]
impl ImageProvider for SourceProvider {
    async fn fetch(&self, source: &ImageSource) -> Result<ImageData, ImageError> {
        match source {
            ImageSource::Remote(url) => self.fetch_remote(url).await,
            ImageSource::Bundled(path) => self.fetch_bundled(path).await,
        }
    }
}

/// Process-wide provider used by the loading tasks.
pub fn provider() -> &'static dyn ImageProvider {
    static PROVIDER: OnceLock<SourceProvider> = OnceLock::new();
    PROVIDER.get_or_init(|| SourceProvider::new(ASSETS_ROOT))
}
