use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateInteractionResponseMessage, ResolvedValue,
};

use crate::server::{
    error::AppError,
    model::experience::LeaderboardEntry,
    service::experience::{formula, ExperienceService},
};

pub const NAME: &str = "leaderboard";

const EMBED_COLOR: u32 = 0x5865F2;
const DEFAULT_LIMIT: u64 = 10;
/// Largest page that fits in one embed description.
const MAX_LIMIT: u64 = 25;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the members with the most XP")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "limit", "Number of members")
                .min_int_value(1)
                .max_int_value(MAX_LIMIT)
                .required(false),
        )
}

/// Shows the top of the guild's leaderboard.
pub async fn run(
    experience: &ExperienceService,
    guild_id: u64,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let limit = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match (option.name, option.value) {
            ("limit", ResolvedValue::Integer(limit)) => Some(limit),
            _ => None,
        })
        .map(|limit| limit.clamp(1, MAX_LIMIT as i64) as u64)
        .unwrap_or(DEFAULT_LIMIT);

    let entries = experience.get_leaderboard(guild_id, limit).await?;

    let embed = CreateEmbed::new()
        .title("Leaderboard")
        .color(EMBED_COLOR)
        .description(format_rows(&entries));

    Ok(CreateInteractionResponseMessage::new().embed(embed))
}

/// One line per entry, or a placeholder for an empty guild.
pub fn format_rows(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No one has earned XP yet.".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "**#{}** <@{}> - level {} ({} XP)",
                entry.position,
                entry.user_id,
                formula::level_for_xp(formula::xp_from_stored(entry.total_xp)),
                entry.total_xp
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
