//! # sixmax-engine: Six-Max Hold'em Hand Engine
//!
//! A deterministic No-Limit Texas Hold'em engine for one table of six seats.
//! It deals from a seedable shuffle, posts blinds, validates and applies
//! betting actions, walks the hand through its streets and settles main and
//! side pots.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation and two-character card codes
//! - [`deck`] - Seedable 52-card deck
//! - [`player`] - Seat state and player actions
//! - [`rules`] - Action validation and the valid-actions query
//! - [`betting`] - Turn rotation and betting-round completion
//! - [`state`] - The immutable hand snapshot
//! - [`engine`] - Hand lifecycle: deal, act, reveal, settle
//! - [`game`] - Table configuration and button positions
//! - [`pot`] - Main and side pot construction and awards
//! - [`hand`] - Showdown evaluation
//! - [`logger`] - Structured hand log, results and stored records
//! - [`history`] - Hand record storage
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! Every action borrows the current snapshot and returns the next one:
//!
//! ```rust
//! use sixmax_engine::engine::Engine;
//! use sixmax_engine::game::TableConfig;
//!
//! let mut engine = Engine::new(TableConfig::default(), Some(42)).unwrap();
//! let hand = engine.start_hand().unwrap();
//! assert_eq!(hand.current_actor(), Some(3));
//!
//! let step = engine.raise(&hand, 120).unwrap();
//! assert_eq!(step.narrative, "Seat 4 raises to 160");
//! // the original snapshot is untouched
//! assert_eq!(hand.pot(), 60);
//! assert_eq!(step.state.pot(), 220);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Engines built with the same seed deal the same cards; hand ids are
//! always fresh:
//!
//! ```rust
//! use sixmax_engine::engine::Engine;
//! use sixmax_engine::game::TableConfig;
//!
//! let mut a = Engine::new(TableConfig::default(), Some(9)).unwrap();
//! let mut b = Engine::new(TableConfig::default(), Some(9)).unwrap();
//! let (ha, hb) = (a.start_hand().unwrap(), b.start_hand().unwrap());
//! assert_eq!(ha.seats(), hb.seats());
//! assert_ne!(ha.hand_id(), hb.hand_id());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod state;
