pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod ml;
pub mod player;
pub mod research;

#[cfg(test)]
mod logic_tests;
