//! Server configuration.
//!
//! Settings come from three layers: command-line flags (each with an env
//! var fallback), an optional YAML or JSON file, and built-in defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use receipt_points_core::PointsConfig;

use crate::logging::LogFormat;
use crate::service::ServiceConfig;

const DEFAULT_HTTP_BIND: &str = "127.0.0.1:8080";

/// `--log-format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Fully resolved settings for one server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_bind_address: SocketAddr,
    pub blank_descriptions_qualify: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Resolve settings: CLI over file over defaults.
    ///
    /// Fails if the named config file is missing, unreadable, has an
    /// unsupported extension, or contains unknown keys.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            bind: cli_bind,
            blank_descriptions_qualify: cli_blank_descriptions,
            log_format: cli_log_format,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            bind: file_bind,
            blank_descriptions_qualify: file_blank_descriptions,
            log_format: file_log_format,
        } = file_config;

        let http_bind_address = match cli_bind.or(file_bind) {
            Some(addr) => addr,
            None => DEFAULT_HTTP_BIND
                .parse()
                .context("default bind address is invalid")?,
        };

        // A bare flag cannot express "false", so the CLI only ever turns the
        // literal rule on.
        let blank_descriptions_qualify =
            cli_blank_descriptions || file_blank_descriptions.unwrap_or(false);

        let log_format = cli_log_format
            .or(file_log_format)
            .map(LogFormat::from)
            .unwrap_or(LogFormat::Pretty);

        Ok(Self {
            http_bind_address,
            blank_descriptions_qualify,
            log_format,
        })
    }

    /// The part of the configuration the service layer consumes.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            points: PointsConfig {
                blank_descriptions_qualify: self.blank_descriptions_qualify,
            },
        }
    }
}

/// Command-line arguments.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "receipt-points", about = "Receipt points HTTP service", version)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "RECEIPT_POINTS_BIND",
        value_name = "ADDR",
        help = "HTTP bind address"
    )]
    pub bind: Option<SocketAddr>,

    #[arg(
        long,
        env = "RECEIPT_POINTS_BLANK_DESCRIPTIONS_QUALIFY",
        help = "Let items whose description trims to empty earn the description bonus"
    )]
    pub blank_descriptions_qualify: bool,

    #[arg(
        long,
        env = "RECEIPT_POINTS_LOG_FORMAT",
        value_enum,
        value_name = "FORMAT",
        help = "Log output format (pretty or json)"
    )]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    bind: Option<SocketAddr>,
    blank_descriptions_qualify: Option<bool>,
    log_format: Option<LogFormatArg>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_args(CliArgs::default()).unwrap();
        assert_eq!(config.http_bind_address.to_string(), DEFAULT_HTTP_BIND);
        assert!(!config.blank_descriptions_qualify);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.service_config().points.blank_descriptions_qualify);
    }

    #[test]
    fn test_yaml_file() {
        let file = write_config(
            ".yaml",
            "bind: \"0.0.0.0:9000\"\nblank_descriptions_qualify: true\nlog_format: json\n",
        );
        let config = ServerConfig::from_args(CliArgs {
            config: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        })
        .unwrap();
        assert_eq!(config.http_bind_address.port(), 9000);
        assert!(config.blank_descriptions_qualify);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config(".json", r#"{"bind": "0.0.0.0:9000", "log_format": "json"}"#);
        let config = ServerConfig::from_args(CliArgs {
            config: Some(file.path().to_path_buf()),
            bind: Some("127.0.0.1:7000".parse().unwrap()),
            log_format: Some(LogFormatArg::Pretty),
            ..CliArgs::default()
        })
        .unwrap();
        assert_eq!(config.http_bind_address.port(), 7000);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".toml", "bind = \"0.0.0.0:9000\"");
        let err = ServerConfig::from_args(CliArgs {
            config: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("unsupported config extension"));
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_args(CliArgs {
            config: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..CliArgs::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config(".json", r#"{"port": 9000}"#);
        let result = ServerConfig::from_args(CliArgs {
            config: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "receipt-points",
            "--bind",
            "127.0.0.1:8181",
            "--blank-descriptions-qualify",
            "--log-format",
            "json",
        ])
        .unwrap();
        let config = ServerConfig::from_args(args).unwrap();
        assert_eq!(config.http_bind_address.port(), 8181);
        assert!(config.blank_descriptions_qualify);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
