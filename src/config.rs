//! Build configuration.
//!
//! The CLI arguments collapse into one [`BuildConfig`] constructed in `main`
//! and passed by reference into the builder. There is no config file and no
//! environment lookup: the tool's entire behavior is determined by its
//! command line.

use crate::urlpath;

/// URL base path used when `--base-path` is not given.
pub const DEFAULT_BASE_PATH: &str = "/";

/// Final path segment of every generated metadata URL.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Options controlling one index build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// URL base path under which per-location data directories are served,
    /// as seen by the browser.
    pub base_path: String,
    /// Pretty-print the emitted index instead of compact JSON.
    pub pretty: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            pretty: false,
        }
    }
}

impl BuildConfig {
    /// URL path of a location's metadata document under the base path.
    pub fn metadata_file_path(&self, slug: &str) -> String {
        urlpath::join(&self.base_path, &[slug, METADATA_FILE_NAME])
    }
}
