use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

const DEFAULT_STATS_INTERVAL_SECS: u64 = 60;

/// Parameters exposed to the service through its JSON config file.
///
/// ```json
/// { "listenAddress": "127.0.0.1:50051", "statsIntervalSecs": 30 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// `host:port` the HTTP server binds to.
    pub listen_address: String,
    /// Period of the stats log line. `0` turns the reporter off.
    #[serde(default = "default_stats_interval_secs")]
    pub stats_interval_secs: u64,
}

fn default_stats_interval_secs() -> u64 {
    DEFAULT_STATS_INTERVAL_SECS
}

impl Config {
    /// Resolves `listen_address` to the first socket address it names.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen_address
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen address '{}'", self.listen_address))?
            .next()
            .ok_or_else(|| {
                anyhow::anyhow!("Listen address '{}' resolved to nothing", self.listen_address)
            })
    }
}

/// Config with the listen address already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub stats_interval_secs: u64,
}

impl TryFrom<Config> for ServiceConfig {
    type Error = anyhow::Error;

    fn try_from(config: Config) -> Result<Self> {
        Ok(Self {
            listen_addr: config.listen_addr()?,
            stats_interval_secs: config.stats_interval_secs,
        })
    }
}

/// Reads the JSON config at `path` and resolves its listen address.
pub fn load_config(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;

    let config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    ServiceConfig::try_from(config)
}

/// Command line options of the server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config_path: PathBuf,
}

/// Parses `args` as produced by `std::env::args()`, program name first.
///
/// Only `--config <path>` is understood; anything else is ignored.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config_path = PathBuf::from(value);
                i += 2;
            }
            other => {
                tracing::debug!("Ignoring unknown argument {}", other);
                i += 1;
            }
        }
    }

    Ok(CliArgs { config_path })
}
