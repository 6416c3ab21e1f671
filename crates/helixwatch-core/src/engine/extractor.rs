use crate::core::io::dssp::{DsspError, DsspFile};
use crate::core::io::traits::SecondaryStructureFile;
use crate::core::structure::StructureMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, instrument};
use wait_timeout::ChildExt;

use super::config::DsspConfig;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to launch '{}' for '{}': {source}", binary.display(), path.display())]
    Spawn {
        binary: PathBuf,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("DSSP timed out after {timeout:?} on '{}'", path.display())]
    Timeout { path: PathBuf, timeout: Duration },

    #[error("DSSP failed on '{}' ({status}): {stderr}", path.display())]
    NonZeroExit {
        path: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("I/O error while running DSSP on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unreadable DSSP output for '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: DsspError,
    },
}

impl ExtractionError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Spawn { path, .. }
            | Self::Timeout { path, .. }
            | Self::NonZeroExit { path, .. }
            | Self::Io { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }
}

/// Produces the secondary-structure assignment of a structure file.
pub trait StructureExtractor {
    fn extract(&self, path: &Path) -> Result<StructureMap, ExtractionError>;
}

/// Runs `<binary> -i <path>` and parses its standard output.
#[derive(Debug, Clone)]
pub struct DsspExtractor {
    binary: PathBuf,
    timeout: Duration,
}

impl DsspExtractor {
    pub fn new(binary: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    pub fn from_config(config: &DsspConfig) -> Self {
        Self::new(config.binary.clone(), config.timeout)
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn run(&self, path: &Path) -> Result<Vec<u8>, ExtractionError> {
        let io_err = |source: io::Error| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut child = Command::new(&self.binary)
            .arg("-i")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExtractionError::Spawn {
                binary: self.binary.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        // Pipes are drained on their own threads so a large output cannot block the child.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match child.wait_timeout(self.timeout).map_err(io_err)? {
            Some(status) => status,
            None => {
                kill_quietly(&mut child);
                return Err(ExtractionError::Timeout {
                    path: path.to_path_buf(),
                    timeout: self.timeout,
                });
            }
        };

        let stdout = join_drain(stdout).map_err(io_err)?;
        let stderr = join_drain(stderr).map_err(io_err)?;

        if !status.success() {
            return Err(ExtractionError::NonZeroExit {
                path: path.to_path_buf(),
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }
        Ok(stdout)
    }
}

impl StructureExtractor for DsspExtractor {
    #[instrument(skip(self), name = "dssp")]
    fn extract(&self, path: &Path) -> Result<StructureMap, ExtractionError> {
        let started = Instant::now();
        let output = self.run(path)?;
        let map = DsspFile::read_from(&mut output.as_slice()).map_err(|source| {
            ExtractionError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(
            "DSSP assigned {} residue(s) in {:.2}s.",
            map.total_residues(),
            started.elapsed().as_secs_f64()
        );
        Ok(map)
    }
}

fn drain(pipe: Option<impl Read + Send + 'static>) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join_drain(handle: JoinHandle<io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle
        .join()
        .map_err(|_| io::Error::other("pipe reader thread panicked"))?
}

fn kill_quietly(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!("Failed to kill timed-out DSSP process: {}", e);
    }
    let _ = child.wait();
}
