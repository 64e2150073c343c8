//! Models for the play-game endpoint

use crate::dates::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `GET game/gameParticipantReward/{id}/game-reward`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayGameModel {
    #[serde(default)]
    pub message: Option<String>,
    pub status: bool,
    /// Rewards granted by playing
    pub game_reward: Vec<PlayGameReward>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayGameReward {
    pub name: String,
    pub reward_type: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reward_definition_id: Option<String>,
    #[serde(default)]
    pub game_reward_id: Option<String>,
    #[serde(default, with = "wire::option")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reward_value: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub issued_reward_reference: Option<String>,
}

impl PlayGameModel {
    /// First granted reward, if the play produced any
    pub fn first_reward(&self) -> Option<&PlayGameReward> {
        self.game_reward.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_minimal_reward_decodes() {
        let json = r#"{"status": true, "gameReward": [{"name": "Better luck next time", "rewardType": "NoReward"}]}"#;
        let model: PlayGameModel = serde_json::from_str(json).unwrap();
        assert!(model.status);
        assert!(model.message.is_none());
        let reward = model.first_reward().unwrap();
        assert_eq!(reward.reward_type, "NoReward");
        assert!(reward.expiration_date.is_none());
        assert!(reward.issued_reward_reference.is_none());
    }

    #[test]
    fn test_missing_required_name_is_a_decoding_error() {
        let json = r#"{"status": true, "gameReward": [{"rewardType": "Voucher"}]}"#;
        let err = serde_json::from_str::<PlayGameModel>(json).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_missing_reward_list_fails_decoding() {
        let json = r#"{"status": true, "gameDefinitions": []}"#;
        let err = serde_json::from_str::<PlayGameModel>(json).unwrap_err();
        assert!(err.to_string().contains("gameReward"));
    }

    #[test]
    fn test_roundtrip_with_empty_and_absent_optionals() {
        let model = PlayGameModel {
            message: Some(String::new()),
            status: false,
            game_reward: vec![PlayGameReward {
                name: "20% off".to_string(),
                reward_type: "Voucher".to_string(),
                color: None,
                description: Some(String::new()),
                reward_definition_id: Some("0lcxx01".to_string()),
                game_reward_id: None,
                expiration_date: Some(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()),
                reward_value: Some("20".to_string()),
                image_url: None,
                issued_reward_reference: Some("VOUCHER-123".to_string()),
            }],
        };

        let encoded = serde_json::to_vec(&model).unwrap();
        let decoded: PlayGameModel = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, model);
    }
}
