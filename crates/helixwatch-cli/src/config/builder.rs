use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::parser;
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Resolves settings from defaults, the optional config file, `--set` overrides and `--dssp`,
/// in increasing order of precedence.
pub fn build_config(
    config_path: Option<&Path>,
    dssp_override: Option<&Path>,
    set_values: &[String],
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, set_values)?;

    let dssp_file = file_config.dssp.unwrap_or_default();
    let polling_file = file_config.polling.unwrap_or_default();
    let contest_file = file_config.contest.unwrap_or_default();

    let dssp_binary = match dssp_override {
        Some(path) => expand_home(&path.to_string_lossy()),
        None => expand_home(dssp_file.binary.as_deref().unwrap_or(&defaults.dssp_binary)),
    };

    let dssp_timeout_secs = dssp_file
        .timeout_secs
        .unwrap_or(defaults.dssp_timeout_secs);
    let poll_interval_ms = polling_file
        .interval_ms
        .unwrap_or(defaults.poll_interval_ms);
    let default_duration_secs = contest_file
        .default_duration_secs
        .unwrap_or(defaults.default_duration_secs);
    if poll_interval_ms == 0 {
        return Err(CliError::Config(
            "`polling.interval-ms` must be greater than zero".to_string(),
        ));
    }
    if default_duration_secs == 0 {
        return Err(CliError::Config(
            "`contest.default-duration-secs` must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        dssp_binary,
        dssp_timeout: Duration::from_secs(dssp_timeout_secs),
        poll_interval: Duration::from_millis(poll_interval_ms),
        suspense: Duration::from_secs(
            contest_file.suspense_secs.unwrap_or(defaults.suspense_secs),
        ),
        default_duration: Duration::from_secs(default_duration_secs),
        podium_size: contest_file.podium_size.unwrap_or(defaults.podium_size),
    })
}

/// Expands a leading `~/` to the current user's home directory.
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match BaseDirs::new() {
            Some(dirs) => dirs.home_dir().join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Argument(e.to_string()))?;

        match key {
            "dssp.binary" => {
                config.dssp.get_or_insert_with(Default::default).binary = Some(value.to_string());
            }
            "dssp.timeout-secs" => {
                config.dssp.get_or_insert_with(Default::default).timeout_secs =
                    Some(parse_value(key, value, "integer")?);
            }
            "polling.interval-ms" => {
                config.polling.get_or_insert_with(Default::default).interval_ms =
                    Some(parse_value(key, value, "integer")?);
            }
            "contest.suspense-secs" => {
                config.contest.get_or_insert_with(Default::default).suspense_secs =
                    Some(parse_value(key, value, "integer")?);
            }
            "contest.default-duration-secs" => {
                config
                    .contest
                    .get_or_insert_with(Default::default)
                    .default_duration_secs = Some(parse_value(key, value, "integer")?);
            }
            "contest.podium-size" => {
                config.contest.get_or_insert_with(Default::default).podium_size =
                    Some(parse_value(key, value, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
