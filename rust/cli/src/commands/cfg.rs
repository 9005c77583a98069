//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value next to where it
//! came from (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "starting_stack": {
//!     "value": 10000,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "history": {
            "value": config.history,
            "source": sources.history,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
