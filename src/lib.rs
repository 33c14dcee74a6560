//! # Connect Four Engine
//!
//! A terminal Connect Four game whose automated opponent runs a
//! depth-limited minimax search with alpha-beta pruning and a hand-tuned
//! positional heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Board, player identity, and the authoritative game model
//! - [`engine`] — Win rules, move generation/transition, heuristic, search
//! - [`players`] — Human, random, and minimax players behind one `Agent` trait
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod players;
