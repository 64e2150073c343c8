//! Game-related models for the `game/participant/{id}/games` endpoint

use crate::dates::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `GET game/participant/{participantId}/games`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModel {
    #[serde(default)]
    pub message: Option<String>,
    /// Server-reported success, independent of the HTTP status
    pub status: bool,
    /// May be empty, but must be present
    pub game_definitions: Vec<GameDefinition>,
}

/// Kind of game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    SpinaWheel,
    ScratchCard,
    /// Any type this SDK version does not know about
    #[serde(other)]
    Other,
}

/// A game available to the participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub game_definition_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub game_type: GameType,
    #[serde(with = "wire")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "wire::option")]
    pub end_date: Option<DateTime<Utc>>,
    /// Seconds the participant has to play once the game is opened
    pub timeout_duration: i64,
    pub game_rewards: Vec<GameReward>,
    pub participant_game_rewards: Vec<ParticipantGameReward>,
}

impl GameDefinition {
    /// `true` unless an end date is present and precedes the start date.
    ///
    /// Decoding does not enforce this; callers decide what to do with
    /// games the server sent with an inverted window.
    pub fn has_valid_window(&self) -> bool {
        self.end_date.map_or(true, |end| end >= self.start_date)
    }
}

/// A reward a game can yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReward {
    #[serde(default)]
    pub game_reward_id: Option<String>,
    pub name: String,
    pub reward_type: String,
    #[serde(default)]
    pub reward_definition_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reward_value: Option<String>,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default, with = "wire::option")]
    pub expiration_date: Option<DateTime<Utc>>,
}

/// A game reward issued to the participant and waiting to be played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantGameReward {
    #[serde(default)]
    pub game_participant_reward_id: Option<String>,
    #[serde(default)]
    pub game_reward_id: Option<String>,
    #[serde(default)]
    pub issued_reward_reference: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default, with = "wire::option")]
    pub expiration_date: Option<DateTime<Utc>>,
}
