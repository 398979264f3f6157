//! Directory-backed asset resolver.

use std::path::{Path, PathBuf};

use unke_core::AssetResolver;

/// Resolves codes to `{code}.png` files in a fixed directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    dir: PathBuf,
}

impl DirAssets {
    /// Resolver over the given icon directory.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }
}

impl AssetResolver for DirAssets {
    fn resolve(&self, code: &str) -> Option<PathBuf> {
        let path = self.dir.join(format!("{code}.png"));
        path.is_file().then_some(path)
    }
}
