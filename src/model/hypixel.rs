use serde::{Deserialize, Serialize};

use super::bedwars::StatBlock;

/// Body of `GET /player`. Only the fields the bot reads are modelled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerResponse {
    pub success: bool,
    /// Failure reason when `success` is false.
    #[serde(default)]
    pub cause: Option<String>,
    /// `null` when the account never joined the server.
    #[serde(default)]
    pub player: Option<PlayerDTO>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlayerDTO {
    pub stats: StatsDTO,
    pub achievements: AchievementsDTO,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StatsDTO {
    #[serde(rename = "Bedwars")]
    pub bedwars: StatBlock,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AchievementsDTO {
    pub bedwars_level: i64,
}

impl PlayerDTO {
    /// Star level, clamped into the unsigned range.
    pub fn bedwars_level(&self) -> u32 {
        self.achievements.bedwars_level.clamp(0, u32::MAX as i64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_player() {
        let resp: PlayerResponse = serde_json::from_value(json!({
            "success": true,
            "player": {
                "displayname": "Technoblade",
                "stats": {
                    "Bedwars": {
                        "wins_bedwars": 10,
                        "losses_bedwars": 5,
                        "final_kills_bedwars": 20,
                        "final_deaths_bedwars": 4,
                        "beds_broken_bedwars": 15,
                        "beds_lost_bedwars": 3
                    },
                    "SkyWars": { "wins": 1 }
                },
                "achievements": { "bedwars_level": 250, "general_wins": 9 }
            }
        }))
        .unwrap();

        let player = resp.player.unwrap();
        assert_eq!(player.bedwars_level(), 250);
        assert_eq!(player.stats.bedwars.final_kills, 20);
        assert_eq!(player.stats.bedwars.beds_lost, 3);
    }

    #[test]
    fn test_decode_player_without_bedwars() {
        let resp: PlayerResponse = serde_json::from_value(json!({
            "success": true,
            "player": { "displayname": "Fresh" }
        }))
        .unwrap();

        let player = resp.player.unwrap();
        assert_eq!(player.stats.bedwars, StatBlock::default());
        assert_eq!(player.bedwars_level(), 0);
    }

    #[test]
    fn test_decode_unsuccessful() {
        let resp: PlayerResponse = serde_json::from_value(json!({
            "success": false,
            "cause": "Invalid API key"
        }))
        .unwrap();

        assert!(!resp.success);
        assert_eq!(resp.cause.as_deref(), Some("Invalid API key"));
        assert!(resp.player.is_none());
    }

    #[test]
    fn test_null_player() {
        let resp: PlayerResponse =
            serde_json::from_value(json!({ "success": true, "player": null })).unwrap();
        assert!(resp.player.is_none());
    }

    #[test]
    fn test_negative_level_clamped() {
        let player: PlayerDTO =
            serde_json::from_value(json!({ "achievements": { "bedwars_level": -4 } })).unwrap();
        assert_eq!(player.bedwars_level(), 0);
    }
}
