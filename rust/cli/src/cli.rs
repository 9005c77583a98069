//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sixmax", version, about = "Six-max No-Limit Hold'em table")]
pub struct SixmaxCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal a hand and show every seat's cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play one hand, reading actions from --actions or stdin
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Dot-separated script, e.g. "c.c.f.r160.x"; bet and raise amounts are street totals
        #[arg(long)]
        actions: Option<String>,
    },
    /// Auto-play hands with stacks carried over
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List stored hands, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the resolved configuration
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcommand_parses() {
        let commands = vec![
            vec!["sixmax", "deal", "--seed", "1"],
            vec!["sixmax", "play", "--actions", "f.f.f.f.f"],
            vec!["sixmax", "sim", "--hands", "3"],
            vec!["sixmax", "history", "--limit", "2"],
            vec!["sixmax", "cfg"],
        ];
        for args in commands {
            assert!(SixmaxCli::try_parse_from(&args).is_ok(), "failed: {:?}", args);
        }
    }

    #[test]
    fn sim_requires_at_least_one_hand() {
        assert!(SixmaxCli::try_parse_from(["sixmax", "sim", "--hands", "0"]).is_err());
        assert!(SixmaxCli::try_parse_from(["sixmax", "sim"]).is_err());
    }
}
