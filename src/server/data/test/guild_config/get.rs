use super::*;

/// Tests reading settings of a guild that never saved any.
///
/// Expected: Ok(None) from `get` and defaults from `get_or_default`
#[tokio::test]
async fn falls_back_to_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildExperienceConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildExperienceConfigRepository::new(db);

    assert!(repo.get(100).await?.is_none());
    assert_eq!(
        repo.get_or_default(100).await?,
        GuildExperienceConfig::defaults(100)
    );

    Ok(())
}

/// Tests reading stored settings.
///
/// Verifies that cooldowns are converted from seconds and the announcement
/// channel is parsed.
///
/// Expected: Ok with the stored settings
#[tokio::test]
async fn returns_stored_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildExperienceConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildExperienceConfigFactory::new(db, "100")
        .configure(|c| {
            c.message_cooldown(5)
                .role_enabled(false)
                .level_up_channel_id(Some("555".to_string()))
        })
        .build()
        .await?;

    let config = GuildExperienceConfigRepository::new(db)
        .get_or_default(100)
        .await?;

    assert_eq!(config.message_cooldown, TimeDelta::seconds(5));
    assert!(!config.role_enabled);
    assert_eq!(config.level_up_channel_id, Some(555));

    Ok(())
}
