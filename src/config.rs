use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub logging: Logging,
    pub output: Output,
    pub http: Http,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: Logging::default(),
            output: Output::default(),
            http: Http::default(),
        }
    }
}

impl Config {
    pub fn load(path_opt: Option<&Path>) -> Result<Self> {
        let default_path = Path::new("config.toml");
        let path = if let Some(p) = path_opt {
            Some(p)
        } else if default_path.exists() {
            Some(default_path)
        } else {
            None
        };

        let mut cfg = Config::default();

        if let Some(path) = path {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed reading config file: {}", path.display()))?;
            let parsed: Config = toml::from_str(&raw)
                .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
            cfg = parsed;
        }

        Ok(cfg)
    }

    pub fn to_toml_pretty(&self) -> Result<String> {
        let s = toml::to_string_pretty(self).context("failed serializing config as TOML")?;
        Ok(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub level: String,
    pub format: String,
    pub debug_entry_samples: usize,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            debug_entry_samples: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub folder: String,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            folder: "output".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Http {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Http {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("ytscript/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub fn init_tracing(logging: &Logging, cli_override_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = cli_override_level.unwrap_or(logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let is_json = logging.format.to_lowercase() == "json";

    // Diagnostics go to stderr; stdout is reserved for prompts and menus.
    if is_json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .event_format(fmt::format().json())
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .pretty()
            .init();
    }

    tracing::info!(
        level = level,
        format = logging.format.as_str(),
        "logging initialized"
    );

    Ok(())
}
