use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Compression formats recognized by file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zstd,
}

impl Compression {
    /// Detects the format from the final suffix (`.gz`, `.zst`), ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "gz" => Some(Self::Gzip),
            "zst" => Some(Self::Zstd),
            _ => None,
        }
    }

    fn decoder<'a>(self, reader: impl Read + 'a) -> io::Result<Box<dyn Read + 'a>> {
        Ok(match self {
            Self::Gzip => Box::new(GzDecoder::new(reader)),
            Self::Zstd => Box::new(zstd::stream::read::Decoder::new(reader)?),
        })
    }
}

pub fn is_compressed(path: &Path) -> bool {
    Compression::from_path(path).is_some()
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("'{}' does not have a recognized compressed-file suffix", path.display())]
    NotCompressed { path: PathBuf },

    #[error("Refusing to overwrite existing file '{}'", path.display())]
    TargetExists { path: PathBuf },

    #[error("Failed to decompress '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Replaces a compressed file with its decompressed sibling, like `gunzip <path>`.
///
/// Data is written to a temporary file in the same directory and renamed into
/// place once complete; the compressed file is removed afterwards. On error
/// the compressed file is left untouched.
pub fn decompress_in_place(path: &Path) -> Result<PathBuf, ArchiveError> {
    let compression = Compression::from_path(path).ok_or_else(|| ArchiveError::NotCompressed {
        path: path.to_path_buf(),
    })?;
    let target = path.with_extension("");
    if target.exists() {
        return Err(ArchiveError::TargetExists { path: target });
    }

    let io_err = |source: io::Error| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = File::open(path).map_err(io_err)?;
    let mut decoder = compression.decoder(BufReader::new(file)).map_err(io_err)?;
    let mut staged = NamedTempFile::new_in(parent).map_err(io_err)?;
    let bytes = io::copy(&mut decoder, staged.as_file_mut()).map_err(io_err)?;

    staged
        .persist_noclobber(&target)
        .map_err(|e| io_err(e.error))?;
    std::fs::remove_file(path).map_err(io_err)?;

    debug!(
        "Decompressed {:?} ({} bytes) to {:?}",
        path, bytes, &target
    );
    Ok(target)
}
