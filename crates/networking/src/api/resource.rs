//! Endpoint identification and path formatting

/// An endpoint with the identifiers its path needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    GetGames {
        participant_id: &'a str,
        version: &'a str,
    },
    PlayGame {
        game_participant_reward_id: &'a str,
        version: &'a str,
    },
}

impl Resource<'_> {
    /// URL path of this resource, version prefix included
    pub fn path(&self) -> String {
        match self {
            Resource::GetGames {
                participant_id,
                version,
            } => versioned_path(version, &format!("game/participant/{}/games", participant_id)),
            Resource::PlayGame {
                game_participant_reward_id,
                version,
            } => versioned_path(
                version,
                &format!(
                    "game/gameParticipantReward/{}/game-reward",
                    game_participant_reward_id
                ),
            ),
        }
    }
}

/// `/services/data/{version}/{path}`
pub fn versioned_path(version: &str, path: &str) -> String {
    format!("/services/data/{}/{}", version, path.trim_start_matches('/'))
}
