//! # Minimax Connect Four
//!
//! A Connect Four engine built around a depth-limited minimax game-tree
//! search with pluggable heuristic evaluation. Agents run a full search
//! from the current position each turn and pick uniformly at random among
//! the moves tied for the best value.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Agent trait, minimax search, heuristic library, baseline policies
//! - [`arena`] — Turn-taking orchestrator and series running
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
