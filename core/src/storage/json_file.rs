// core/src/storage/json_file.rs

//! File-backed `CartStorage`: the snapshot is a JSON array at a configured
//! path, replaced atomically on every save.
//!
//! Saves write to a named temp file in the target directory and then rename
//! it over the snapshot path, so a crash mid-write never leaves a torn
//! snapshot — the previous one survives intact. The rename stays atomic
//! because the temp file lives on the same filesystem as the target.

use crate::cart::line_item::CartLineItem;
use crate::error::{CartError, CartResult};
use crate::storage::CartStorage;

use anyhow::Context as AnyhowContext;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{event, Level};

/// A `CartStorage` that snapshots the cart as compact JSON on disk.
pub struct JsonFileStorage {
  path: PathBuf,
}

impl JsonFileStorage {
  /// Creates a storage targeting `path`. The file does not need to exist
  /// yet; its parent directory does.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl CartStorage for JsonFileStorage {
  fn load(&self) -> CartResult<Option<Vec<CartLineItem>>> {
    let raw = match std::fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
      Err(e) => {
        return Err(CartError::Storage {
          source: anyhow::Error::new(e).context(format!("reading cart snapshot at {}", self.path.display())),
        });
      }
    };

    let lines = serde_json::from_str(&raw).map_err(|e| CartError::MalformedSnapshot {
      source: anyhow::Error::new(e).context(format!("decoding cart snapshot at {}", self.path.display())),
    })?;
    Ok(Some(lines))
  }

  fn save(&self, lines: &[CartLineItem]) -> CartResult<()> {
    let raw = serde_json::to_vec(lines).map_err(|e| CartError::Storage {
      source: anyhow::Error::new(e),
    })?;

    let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));

    let write_atomically = || -> anyhow::Result<()> {
      let mut tmp = NamedTempFile::new_in(dir).context("creating temp snapshot file")?;
      tmp.write_all(&raw).context("writing temp snapshot")?;
      tmp.persist(&self.path).context("replacing cart snapshot")?;
      Ok(())
    };

    write_atomically().map_err(|source| {
      event!(Level::DEBUG, path = %self.path.display(), "Atomic snapshot replace failed.");
      CartError::Storage { source }
    })
  }
}
