//! Dino runner: a single-screen side-scroller where the player jumps over
//! alternating ground and air obstacles while the world speeds up.
//!
//! The library is the deterministic core. The terminal host in `main.rs`
//! only feeds it commands, ticks it at a fixed rate and draws the result.

pub mod compute;
pub mod config;
pub mod entities;
pub mod mask;
pub mod settings;
pub mod sprites;
