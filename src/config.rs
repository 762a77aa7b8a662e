use crate::ui::components::BadgeSize;
use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Badge size used when a request does not ask for one (small, medium)
    #[arg(long, env = "DEFAULT_BADGE_SIZE")]
    pub default_size: Option<BadgeSize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub badge: BadgeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BadgeConfig {
    pub default_size: BadgeSize,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(["order-status-badge"])
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("badge.default_size", BadgeSize::Small.as_str())?;

        // Explicit file must exist; the cwd fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::new(CWD_CONFIG_FILE, FileFormat::Yaml));
        }

        // E.g. BADGE_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("BADGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Priority: CLI flag > CLI env var > BADGE_ env > config file > defaults.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(size) = cli.default_size {
            builder = builder.set_override("badge.default_size", size.as_str())?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_default_size() {
        let cli = Cli::try_parse_from(["order-status-badge", "--default-size", "md"]).unwrap();
        assert_eq!(cli.default_size, Some(BadgeSize::Medium));
    }

    #[test]
    fn cli_rejects_unknown_size() {
        let err = Cli::try_parse_from(["order-status-badge", "--default-size", "huge"]).unwrap_err();
        assert!(err.to_string().contains("invalid badge size"));
    }
}
