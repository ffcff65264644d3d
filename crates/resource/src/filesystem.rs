use folio_traits::{ResourceBytes, ResourceError, ResourceProvider};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads resources relative to a base directory, usually the template's own directory.
///
/// Paths that are absolute or that would leave the base directory are refused
/// and reported as not found.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical_base = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.base_path.join(relative);
        match (full_path.canonicalize(), &self.canonical_base) {
            // Symlinks may still point outside the base.
            (Ok(canonical), Some(base)) if !canonical.starts_with(base) => None,
            (Ok(canonical), _) => Some(canonical),
            (Err(_), _) => Some(full_path),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<ResourceBytes, ResourceError> {
        let full_path = self.resolve(path).ok_or_else(|| {
            log::warn!("Refusing resource path outside '{}': {}", self.base_path.display(), path);
            ResourceError::NotFound(format!("{} (outside the resource directory)", path))
        })?;

        log::debug!("Loading resource '{}' from {}", path, full_path.display());
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
