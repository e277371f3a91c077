use super::*;

/// Tests the standing of a ranked member.
///
/// Expected: progress through level 2 and rank 1 of 2
#[tokio::test]
async fn reports_progress_and_rank() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_experience(db, "100", "1", 300).await?;
    factory::create_user_experience(db, "100", "2", 50).await?;
    let (service, _level_ups) = service(db);

    let standing = service.get_standing(GUILD, 1).await?;

    assert_eq!(standing.total_xp, 300);
    assert_eq!(standing.progress.level, 2);
    assert_eq!(standing.progress.xp_into_level, 18);
    assert_eq!(
        standing.rank,
        Rank::Ranked {
            position: 1,
            total_users: 2
        }
    );
    assert!(standing.record.is_some());

    Ok(())
}

/// Tests the standing of a member without a record.
///
/// Expected: zero XP, level 0, unranked
#[tokio::test]
async fn unknown_member_is_unranked_at_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (service, _level_ups) = service(db);

    let standing = service.get_standing(GUILD, 1).await?;

    assert!(standing.record.is_none());
    assert_eq!(standing.total_xp, 0);
    assert_eq!(standing.progress.level, 0);
    assert_eq!(standing.rank, Rank::Unranked);

    Ok(())
}

/// Tests an administrative reset.
///
/// Expected: the member is back at zero and unranked, a second reset is a no-op
#[tokio::test]
async fn reset_returns_member_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_experience(db, "100", "1", 5_000).await?;
    let (service, _level_ups) = service(db);

    assert!(service.reset_user(GUILD, 1).await?);
    assert!(!service.reset_user(GUILD, 1).await?);

    let standing = service.get_standing(GUILD, 1).await?;
    assert_eq!(standing.total_xp, 0);
    assert_eq!(standing.rank, Rank::Unranked);

    Ok(())
}

/// Tests cleanup after the bot leaves a guild.
///
/// Expected: every record of the guild removed, other guilds untouched
#[tokio::test]
async fn remove_guild_clears_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_experience(db, "100", "1", 10).await?;
    factory::create_user_experience(db, "100", "2", 20).await?;
    factory::create_user_experience(db, "200", "1", 30).await?;
    let (service, _level_ups) = service(db);

    assert_eq!(service.remove_guild(GUILD).await?, 2);

    assert!(service.get_leaderboard(GUILD, 10).await?.is_empty());
    assert_eq!(service.get_leaderboard(200, 10).await?.len(), 1);

    Ok(())
}

/// Tests the read-only eligibility check.
///
/// Expected: not eligible inside the window, eligible after it
#[tokio::test]
async fn eligibility_follows_last_award() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    configure(db, |c| c.message_cooldown(60)).await?;
    let (service, _level_ups) = service(db);

    service
        .award(GUILD, 42, XpSource::Message, AwardContext::at(t(0)))
        .await?;

    assert!(!service.is_eligible(GUILD, 42, XpSource::Message, t(30)).await?);
    assert!(service.is_eligible(GUILD, 42, XpSource::Message, t(60)).await?);
    assert!(service.is_eligible(GUILD, 42, XpSource::Voice, t(30)).await?);

    Ok(())
}
