//! Sokoban on a single built-in level. [`core::GridState`] holds the whole game;
//! the binary wraps it in a terminal interface.

pub mod core;
pub mod error;
pub mod replay;

#[cfg(test)]
mod test;
