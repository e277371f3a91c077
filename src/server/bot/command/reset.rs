use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    CreateInteractionResponseMessage, Permissions,
};

use crate::server::{error::AppError, service::experience::ExperienceService};

pub const NAME: &str = "xp-reset";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Reset the XP of a member")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Member to reset")
                .required(true),
        )
}

/// Resets a member to zero XP.
///
/// Discord hides the command from members without Manage Server; the
/// permission is checked again here in case a guild overrides that.
pub async fn run(
    experience: &ExperienceService,
    guild_id: u64,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let allowed = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.manage_guild());

    if !allowed {
        return Ok(CreateInteractionResponseMessage::new()
            .content("You need the Manage Server permission to reset XP.")
            .ephemeral(true));
    }

    let Some(user) = super::user_option(command) else {
        return Err(AppError::BadRequest("Missing user option".to_string()));
    };

    let content = if experience.reset_user(guild_id, user.id.get()).await? {
        format!("Reset the XP of <@{}>.", user.id)
    } else {
        format!("<@{}> has no XP to reset.", user.id)
    };

    Ok(CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true))
}
