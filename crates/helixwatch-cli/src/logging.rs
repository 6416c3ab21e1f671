use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{
        self,
        format::{DefaultFields, Format},
    },
    prelude::*,
};

type FileLayer<S> = fmt::Layer<S, DefaultFields, Format, File>;

/// Maps `-v` repetitions to a level; `--quiet` silences diagnostics entirely.
fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbosity) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Plain-text layer for `--log-file`, carrying thread ids so DSSP worker output can be told apart.
fn file_layer<S>(path: &Path) -> Result<FileLayer<S>> {
    let file = File::create(path)?;
    Ok(fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true))
}

/// Installs the global subscriber: compact diagnostics on stderr, mirrored to a file if requested.
///
/// Contest results go to stdout, so nothing here writes there.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    let mirror = log_file.map(file_layer).transpose()?;

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(console)
        .with(mirror)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Logger already installed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::{info, warn};

    #[test]
    fn quiet_wins_over_any_verbosity() {
        assert_eq!(level_filter(0, true), LevelFilter::OFF);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    fn each_verbose_flag_lowers_the_threshold() {
        let levels: Vec<_> = (0..=4).map(|v| level_filter(v, false)).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn file_layer_records_plain_text_with_thread_ids() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("contest.log");
        let subscriber = tracing_subscriber::registry().with(file_layer(&log_path).unwrap());

        tracing::subscriber::with_default(subscriber, || {
            warn!("DSSP failed on {:?}", "/uploads/team3.pdb");
        });

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("DSSP failed on \"/uploads/team3.pdb\""));
        assert!(content.contains("WARN"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    fn unwritable_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = file_layer::<tracing_subscriber::Registry>(dir.path());
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    #[serial]
    fn installing_twice_is_an_error_not_a_panic() {
        setup_logging(1, false, None).unwrap();
        info!("logger installed");
        assert!(matches!(setup_logging(0, false, None), Err(CliError::Other(_))));
    }
}
