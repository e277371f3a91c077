//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. The handler
//! logs the connection and registers the global slash commands; registering
//! overwrites the previous set, so restarts pick up changed definitions.

use dioxus_logger::tracing;
use serenity::all::{Command, Context, Ready};

use crate::server::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => {
            tracing::info!("Registered {} slash commands", commands.len());
        }
        Err(e) => {
            tracing::error!("Failed to register slash commands: {:?}", e);
        }
    }
}
