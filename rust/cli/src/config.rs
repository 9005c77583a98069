use serde::{Deserialize, Serialize};
use sixmax_engine::game::{BIG_BLIND, SMALL_BLIND, STARTING_STACK, TableConfig};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "SIXMAX_CONFIG";
pub const SEED_ENV: &str = "SIXMAX_SEED";
pub const STACK_ENV: &str = "SIXMAX_STACK";
pub const HISTORY_ENV: &str = "SIXMAX_HISTORY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    /// JSONL file completed hands are appended to; no history when unset.
    pub history: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            seed: None,
            history: None,
        }
    }
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            starting_stack: self.starting_stack,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            dealer: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub history: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            history: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves configuration: defaults, then the TOML file named by
/// `SIXMAX_CONFIG`, then `SIXMAX_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.history {
            cfg.history = Some(v);
            sources.history = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting stack: {}", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(path) = std::env::var(HISTORY_ENV)
        && !path.is_empty()
    {
        cfg.history = Some(PathBuf::from(path));
        sources.history = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    history: Option<PathBuf>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
