// src/media.rs

use std::path::{Path, PathBuf};

/// Boundary collaborator: the renderer consults this only to decide
/// between a real profile image and the generated placeholder. Whatever
/// actually loads pixels lives outside the core.
pub trait ImageProbe {
    fn is_available(&self, reference: &str) -> bool;

    /// Resolved location for an available reference, if the probe has one.
    fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let _ = reference;
        None
    }
}

/// Filesystem probe rooted at the assets directory. Relative references
/// resolve under the root; absolute references are taken as-is. A
/// reference is available when it names a readable, non-empty file.
#[derive(Clone, Debug)]
pub struct FsImageProbe {
    root: PathBuf,
}

impl FsImageProbe {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn candidate(&self, reference: &str) -> Option<PathBuf> {
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return None;
        }

        let p = Path::new(trimmed);
        Some(if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        })
    }
}

impl ImageProbe for FsImageProbe {
    fn is_available(&self, reference: &str) -> bool {
        self.resolve(reference).is_some()
    }

    fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let path = self.candidate(reference)?;
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => Some(path),
            _ => None,
        }
    }
}

/// Probe that never finds anything; render tests use it to pin the
/// placeholder path.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoImages;

impl ImageProbe for NoImages {
    fn is_available(&self, _reference: &str) -> bool {
        false
    }
}

// ======================================================
// Unit Tests
// ======================================================
