//! History command: lists stored hands, newest first.

use crate::config::{Config, HISTORY_ENV};
use crate::error::CliError;
use sixmax_engine::history::HandStore;
use std::io::Write;

pub fn handle_history_command(
    limit: Option<usize>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let Some(store) = super::open_store(config)? else {
        return Err(CliError::Config(format!(
            "no history file configured (set {} or `history` in the config file)",
            HISTORY_ENV
        )));
    };

    let records = store.list()?;
    if records.is_empty() {
        writeln!(out, "No hands recorded.")?;
        return Ok(());
    }
    for rec in records.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "{} {} dealer=Seat {} {}",
            rec.created_at,
            rec.id,
            rec.dealer_position + 1,
            rec.action_sequence
        )?;
        writeln!(out, "  {}", rec.player_hands)?;
        writeln!(out, "  {}", rec.winnings)?;
    }
    Ok(())
}
