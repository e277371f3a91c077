use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub position: u64,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub total_xp: i64,
    pub level: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub entries: Vec<LeaderboardEntryDto>,
}

/// Rank of a member; `position` and `total_users` are `None` when unranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RankDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub guild_id: u64,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub ranked: bool,
    pub position: Option<u64>,
    pub total_users: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProgressDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub guild_id: u64,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub total_xp: u64,
    pub level: u64,
    pub xp_into_level: u64,
    pub xp_for_next_level: u64,
    pub percent: f64,
    pub rank: RankDto,
    pub messages_sent: i64,
    pub commands_used: i64,
    pub roles_earned: i64,
    pub voice_minutes: i64,
}

fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflakes_serialize_as_strings() {
        let dto = LeaderboardDto {
            guild_id: 1_234_567_890_123_456_789,
            entries: vec![LeaderboardEntryDto {
                position: 1,
                user_id: 42,
                total_xp: 1500,
                level: 5,
            }],
        };

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["guild_id"], "1234567890123456789");
        assert_eq!(json["entries"][0]["user_id"], "42");
        assert_eq!(json["entries"][0]["total_xp"], 1500);
    }

    #[test]
    fn rejects_non_numeric_snowflake() {
        let result = serde_json::from_str::<RankDto>(
            r#"{"guild_id":"abc","user_id":"1","ranked":false,"position":null,"total_users":null}"#,
        );

        assert!(result.is_err());
    }
}
