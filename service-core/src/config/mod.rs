use crate::error::AppError;
use config::{Config as Cfg, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;

const CONFIG_FILE: &str = "configuration";

/// Runtime settings shared by every binary in the workspace.
///
/// Values are layered: defaults, then an optional `configuration.*` file in
/// the working directory, then `APP_`-prefixed environment variables (which
/// `.env` entries feed into)
/// (`APP_PORT`, `APP_LOG_LEVEL`, ...).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on. `0` asks the OS for an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector endpoint. Trace export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

// Matches the port the container health check probes.
fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "hello-service".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            otlp_endpoint: None,
            service_name: default_service_name(),
        }
    }
}

impl Config {
    /// Load from `.env`, the optional configuration file and the process environment.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::build(Some(Path::new(CONFIG_FILE)), Self::environment())
    }

    /// Load using only an explicit set of environment variables. No
    /// configuration file is read.
    pub fn load_from(vars: Map<String, String>) -> Result<Self, AppError> {
        Self::load_from_sources(None, None, vars)
    }

    /// Load from an optional configuration file and an optional `.env` file,
    /// with `vars` taking precedence over entries from the `.env` file.
    pub fn load_from_sources(
        file: Option<&Path>,
        env_file: Option<&Path>,
        mut vars: Map<String, String>,
    ) -> Result<Self, AppError> {
        if let Some(env_file) = env_file {
            for item in dotenvy::from_path_iter(env_file)? {
                let (key, value) = item?;
                vars.entry(key).or_insert(value);
            }
        }

        Self::build(file, Self::environment().source(Some(vars)))
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn build(file: Option<&Path>, env: Environment) -> Result<Self, AppError> {
        let mut builder = Cfg::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::from(file).required(false));
        }

        let config = builder.add_source(env).build()?;

        Ok(config.try_deserialize()?)
    }
}
