use crate::error::{Result, ScrapeError};
use crate::results::ListingPayload;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `payload` as JSON to `path`, replacing any existing file.
///
/// The document is written to a sibling temporary file and renamed into
/// place, so `path` either holds the complete payload or is left untouched.
pub fn persist(payload: &ListingPayload, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = serde_json::to_vec(payload).map_err(|e| io_err(io::Error::from(e)))?;
    let tmp_path = temp_path_for(path).map_err(io_err)?;

    if let Err(e) = write_file(&tmp_path, &bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(e));
    }

    ::log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Read a previously persisted payload back
pub fn load(path: impl AsRef<Path>) -> Result<ListingPayload> {
    let path = path.as_ref();
    let io_err = |source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let contents = fs::read_to_string(path).map_err(io_err)?;
    serde_json::from_str(&contents).map_err(|source| ScrapeError::Parse {
        context: path.display().to_string(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Sibling of `path` named `.<file name>.<pid>.tmp`
fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}
