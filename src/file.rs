// src/file.rs

use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{MajorsError, Result};

/// Write `items` as a JSON array, replacing `path`.
/// Goes through a temp file in the same directory, so `path` is either the
/// old file or the complete new one. The directory must already exist.
pub fn write_json_list(path: &Path, items: &[String]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let write_err = |source: io::Error| MajorsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer(&mut out, items)?;
        out.flush().map_err(write_err)?;
    }

    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    info!(path = %path.display(), entries = items.len(), "wrote");
    Ok(())
}
