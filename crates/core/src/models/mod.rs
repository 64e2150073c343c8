//! Data models for gamification entities

mod game;
mod play_game;

pub use game::*;
pub use play_game::*;
