pub mod adversarial;
pub mod agent;
pub mod common;
pub mod config;
pub mod eval;
pub mod game;
pub mod maze;
pub mod problem;
pub mod search;
pub mod stat;

#[cfg(test)]
pub(crate) mod fixtures;
