//! Slash commands.
//!
//! Each command module exposes `register` for the command definition and
//! `run` producing the interaction response.

pub mod leaderboard;
pub mod level;
pub mod reset;

use serenity::all::{CommandInteraction, CreateCommand, CreateInteractionResponseMessage, User};

use crate::server::{error::AppError, service::experience::ExperienceService};

/// Definitions of every command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![level::register(), leaderboard::register(), reset::register()]
}

/// Runs the command named in the interaction.
///
/// # Returns
/// - `Ok(Some(message))` - Response to send
/// - `Ok(None)` - The command is not one of ours
/// - `Err(AppError)` - The command failed
pub async fn run(
    experience: &ExperienceService,
    guild_id: u64,
    command: &CommandInteraction,
) -> Result<Option<CreateInteractionResponseMessage>, AppError> {
    let response = match command.data.name.as_str() {
        level::NAME => level::run(experience, guild_id, command).await?,
        leaderboard::NAME => leaderboard::run(experience, guild_id, command).await?,
        reset::NAME => reset::run(experience, guild_id, command).await?,
        _ => return Ok(None),
    };

    Ok(Some(response))
}

/// User passed in the `user` option, if any.
fn user_option(command: &CommandInteraction) -> Option<User> {
    use serenity::all::ResolvedValue;

    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match (option.name, option.value) {
            ("user", ResolvedValue::User(user, _)) => Some(user.clone()),
            _ => None,
        })
}
