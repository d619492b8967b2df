//! Terminal top-down arena shooter.
//!
//! Core modules:
//! - `entities`: pure data for every game object
//! - `compute`: the per-tick simulation, pure functions over `GameState`
//!
//! Rendering and input polling live in the binary; the library never
//! touches the terminal.

pub mod compute;
pub mod entities;
