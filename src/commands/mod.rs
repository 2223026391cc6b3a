//! Command implementations for ESPN Fantasy Basketball CLI

pub mod common;
pub mod player_data;

#[cfg(test)]
mod tests;
