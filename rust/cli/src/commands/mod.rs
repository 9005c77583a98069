//! Command handler modules for the sixmax CLI.
//!
//! Each handler takes the resolved [`Config`] and its output streams as
//! parameters and returns `Result<(), CliError>`; the dispatcher in
//! [`crate::run`] prints errors and picks the exit code.

pub mod cfg;
pub mod deal;
pub mod history;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use history::handle_history_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use chrono::Utc;
use sixmax_engine::history::{HandStore, JsonlStore};
use sixmax_engine::logger::{HandRecord, HandResult};

use crate::config::Config;
use crate::error::CliError;

/// Explicit seed, else the configured one, else a random one.
fn resolve_seed(seed: Option<u64>, config: &Config) -> u64 {
    seed.or(config.seed).unwrap_or_else(rand::random)
}

fn open_store(config: &Config) -> Result<Option<JsonlStore>, CliError> {
    match &config.history {
        Some(path) => Ok(Some(JsonlStore::open(path)?)),
        None => Ok(None),
    }
}

/// Stamps the result and appends it to the store, when one is configured.
fn save_record(
    store: Option<&mut JsonlStore>,
    result: &HandResult,
) -> Result<HandRecord, CliError> {
    let record = result.to_record(Utc::now());
    match store {
        Some(store) => Ok(store.create(record)?),
        None => Ok(record),
    }
}
