mod experience;
mod guild_config;
