//! ESPN Fantasy Basketball data: lookup tables, raw API shapes and the
//! `Player` record built from them.

pub mod constants;
pub mod json;
pub mod player;
pub mod schedule;
pub mod types;
