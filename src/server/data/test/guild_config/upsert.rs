use super::*;

/// Tests creating settings for a new guild.
///
/// Expected: Ok with the settings stored
#[tokio::test]
async fn creates_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildExperienceConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildExperienceConfigRepository::new(db);
    let config = GuildExperienceConfig {
        message_xp_min: 1,
        message_xp_max: 2,
        ..GuildExperienceConfig::defaults(100)
    };

    let stored = repo.upsert(config.clone()).await?;

    assert_eq!(stored, config);
    assert_eq!(repo.get(100).await?, Some(config));

    Ok(())
}

/// Tests replacing existing settings.
///
/// Expected: Ok with a single row holding the new values
#[tokio::test]
async fn replaces_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildExperienceConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildExperienceConfigRepository::new(db);
    repo.upsert(GuildExperienceConfig::defaults(100)).await?;

    let updated = repo
        .upsert(GuildExperienceConfig {
            enabled: false,
            ..GuildExperienceConfig::defaults(100)
        })
        .await?;

    assert!(!updated.enabled);

    let count = entity::prelude::GuildExperienceConfig::find()
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting settings.
///
/// Expected: Ok with defaults served afterwards
#[tokio::test]
async fn delete_restores_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildExperienceConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildExperienceConfigRepository::new(db);
    repo.upsert(GuildExperienceConfig {
        enabled: false,
        ..GuildExperienceConfig::defaults(100)
    })
    .await?;

    repo.delete(100).await?;

    assert!(repo.get_or_default(100).await?.enabled);

    Ok(())
}
