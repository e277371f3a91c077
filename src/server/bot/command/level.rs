use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateInteractionResponseMessage,
};

use crate::server::{
    error::AppError,
    model::experience::{MemberStanding, Rank},
    service::experience::ExperienceService,
};

pub const NAME: &str = "level";

const EMBED_COLOR: u32 = 0x5865F2;
const PROGRESS_BAR_WIDTH: usize = 20;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the level and rank of a member")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Member to look up")
                .required(false),
        )
}

/// Shows the standing of the given member, or the invoker.
pub async fn run(
    experience: &ExperienceService,
    guild_id: u64,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let user = super::user_option(command).unwrap_or_else(|| command.user.clone());

    let standing = experience.get_standing(guild_id, user.id.get()).await?;

    Ok(CreateInteractionResponseMessage::new()
        .embed(build_level_embed(&user.name, user.id.get(), &standing)))
}

pub fn build_level_embed(name: &str, user_id: u64, standing: &MemberStanding) -> CreateEmbed {
    let progress = &standing.progress;

    let rank = match standing.rank {
        Rank::Ranked {
            position,
            total_users,
        } => format!("#{} of {}", position, total_users),
        Rank::Unranked => "Unranked".to_string(),
    };

    CreateEmbed::new()
        .title(format!("{}'s level", name))
        .description(format!("<@{}>", user_id))
        .color(EMBED_COLOR)
        .field("Level", progress.level.to_string(), true)
        .field("Rank", rank, true)
        .field("Total XP", standing.total_xp.to_string(), true)
        .field(
            format!(
                "Progress to level {}",
                progress.level.saturating_add(1)
            ),
            format!(
                "{} {}/{} ({:.1}%)",
                progress_bar(progress.percent, PROGRESS_BAR_WIDTH),
                progress.xp_into_level,
                progress.xp_for_next_level,
                progress.percent
            ),
            false,
        )
}

/// Text progress bar of `width` cells for a percentage in `[0, 100]`.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).floor() as usize;

    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(width.saturating_sub(filled))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::experience::formula;

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(100.0, 4), "████");
        assert_eq!(progress_bar(250.0, 4), "████");
    }

    #[test]
    fn embed_shows_rank_and_progress() {
        let standing = MemberStanding {
            record: None,
            total_xp: 300,
            progress: formula::progress(300),
            rank: Rank::Ranked {
                position: 2,
                total_users: 9,
            },
        };

        let json = serde_json::to_value(build_level_embed("alice", 42, &standing)).unwrap();

        assert_eq!(json["title"], "alice's level");
        assert_eq!(json["fields"][0]["value"], "2");
        assert_eq!(json["fields"][1]["value"], "#2 of 9");
        assert_eq!(json["fields"][3]["name"], "Progress to level 3");
    }

    #[test]
    fn embed_marks_unranked_member() {
        let standing = MemberStanding {
            record: None,
            total_xp: 0,
            progress: formula::progress(0),
            rank: Rank::Unranked,
        };

        let json = serde_json::to_value(build_level_embed("bob", 7, &standing)).unwrap();

        assert_eq!(json["fields"][1]["value"], "Unranked");
    }
}
