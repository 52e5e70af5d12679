//! # flip7-engine: Flip 7 Rules Engine
//!
//! Game-state engine for the push-your-luck card game Flip 7. Players draw
//! from a shared 94-card deck, bust on a repeated number, and bank points
//! across turns until someone reaches the target score.
//!
//! The engine is a plain state machine with no I/O; a host (terminal,
//! GUI, server) calls its transitions and renders the state and events it
//! returns.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card kinds, the fixed deck composition and shuffling
//! - [`deck`] - Draw pile (seeded ChaCha20 shuffles) and discard pile
//! - [`rules`] - Pure bust, Second Chance and scoring functions
//! - [`turn`] - Single-turn state machine with the Flip Three worklist
//! - [`game`] - Match coordinator: roster, rotation, winner detection
//! - [`player`] - Player names and running totals
//! - [`logger`] - Turn history records in JSONL
//! - [`errors`] - Rejected-operation errors
//!
//! ## Quick Start
//!
//! ```rust
//! use flip7_engine::game::Match;
//!
//! let mut game = Match::new(Some(42));
//! game.start_match().unwrap();
//!
//! let events = game.request_draw().unwrap();
//! assert!(!events.is_empty());
//! assert_eq!(game.cards_in_play(), flip7_engine::cards::DECK_SIZE);
//! ```
//!
//! ## Scoring
//!
//! ```rust
//! use flip7_engine::cards::Card;
//! use flip7_engine::rules::compute_round_score;
//!
//! let hand: Vec<Card> = (1..=7).map(|v| Card::number(v as u16, v)).collect();
//! assert_eq!(compute_round_score(&hand), 28 + 15);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
pub mod turn;
