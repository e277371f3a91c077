use super::*;

/// Tests the first award for a member.
///
/// Verifies that the record is created lazily with the delta, a counter of one
/// and the source cooldown timestamp set.
///
/// Expected: Ok with a new record
#[tokio::test]
async fn creates_record_on_first_award() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    let record = repo
        .apply_award(award(100, 42, XpSource::Message, 20))
        .await?
        .unwrap();

    assert_eq!(record.guild_id, 100);
    assert_eq!(record.user_id, 42);
    assert_eq!(record.total_xp, 20);
    assert_eq!(record.messages_sent, 1);
    assert_eq!(record.commands_used, 0);
    assert_eq!(record.last_message_at, Some(at_second(0)));
    assert!(record.last_command_at.is_none());
    assert_eq!(record.updated_at, at_second(0));

    Ok(())
}

/// Tests awards accumulating on an existing record.
///
/// Verifies that XP is incremented in place and each source only touches its
/// own counter and cooldown timestamp.
///
/// Expected: Ok with summed totals
#[tokio::test]
async fn increments_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    repo.apply_award(award(100, 42, XpSource::Message, 20)).await?;
    repo.apply_award(ApplyAwardParam {
        count: 3,
        at: at_second(30),
        ..award(100, 42, XpSource::Voice, 15)
    })
    .await?;
    let record = repo
        .apply_award(award(100, 42, XpSource::Role, 50))
        .await?
        .unwrap();

    assert_eq!(record.total_xp, 85);
    assert_eq!(record.messages_sent, 1);
    assert_eq!(record.voice_minutes, 3);
    assert_eq!(record.roles_earned, 1);
    assert_eq!(record.last_voice_at, Some(at_second(30)));
    assert_eq!(record.last_message_at, Some(at_second(0)));

    let count = entity::prelude::UserExperience::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that records are isolated per guild.
///
/// Expected: Ok with two separate records for the same user
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    repo.apply_award(award(100, 42, XpSource::Message, 20)).await?;
    repo.apply_award(award(200, 42, XpSource::Message, 5)).await?;

    assert_eq!(repo.find(100, 42).await?.unwrap().total_xp, 20);
    assert_eq!(repo.find(200, 42).await?.unwrap().total_xp, 5);

    Ok(())
}

/// Tests that an award inside a rolled back transaction leaves no trace.
///
/// Expected: Ok with no record after rollback
#[tokio::test]
async fn rolled_back_award_is_not_visible() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    ExperienceRepository::new(&txn)
        .apply_award(award(100, 42, XpSource::Message, 20))
        .await?;
    txn.rollback().await?;

    assert!(ExperienceRepository::new(db).find(100, 42).await?.is_none());

    Ok(())
}

/// Tests an award inside the source cooldown window.
///
/// A message award at second 0, then another at second 30 with a 60 second
/// cooldown.
///
/// Expected: Ok(None) and the record keeps only the first award
#[tokio::test]
async fn skips_award_inside_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    repo.apply_award(award(100, 42, XpSource::Message, 20))
        .await?
        .unwrap();
    let blocked = repo
        .apply_award(ApplyAwardParam {
            at: at_second(30),
            cooldown: TimeDelta::seconds(60),
            ..award(100, 42, XpSource::Message, 20)
        })
        .await?;

    assert!(blocked.is_none());
    let record = repo.find(100, 42).await?.unwrap();
    assert_eq!(record.total_xp, 20);
    assert_eq!(record.messages_sent, 1);
    assert_eq!(record.last_message_at, Some(at_second(0)));
    assert_eq!(record.updated_at, at_second(0));

    Ok(())
}

/// Tests the edge of the cooldown window.
///
/// With a 30 second cooldown, an award exactly 30 seconds after the last one
/// from the same source.
///
/// Expected: Ok(Some) with both awards counted
#[tokio::test]
async fn grants_award_once_cooldown_elapsed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    repo.apply_award(award(100, 42, XpSource::Command, 10))
        .await?
        .unwrap();
    let record = repo
        .apply_award(ApplyAwardParam {
            at: at_second(30),
            cooldown: TimeDelta::seconds(30),
            ..award(100, 42, XpSource::Command, 10)
        })
        .await?
        .unwrap();

    assert_eq!(record.total_xp, 20);
    assert_eq!(record.commands_used, 2);
    assert_eq!(record.last_command_at, Some(at_second(30)));

    Ok(())
}

/// Tests that a cooldown on one source leaves the others open.
///
/// Expected: the role award is applied while messages are on cooldown
#[tokio::test]
async fn cooldown_only_checks_own_source() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    repo.apply_award(award(100, 42, XpSource::Message, 20))
        .await?
        .unwrap();
    let record = repo
        .apply_award(ApplyAwardParam {
            at: at_second(1),
            cooldown: TimeDelta::seconds(60),
            ..award(100, 42, XpSource::Role, 50)
        })
        .await?;

    assert_eq!(record.map(|r| r.total_xp), Some(70));

    Ok(())
}

/// Tests a cooldown too long to subtract from the award time.
///
/// Expected: the first award is applied, the second is skipped
#[tokio::test]
async fn unbounded_cooldown_admits_only_first_award() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ExperienceRepository::new(db);
    let first = repo
        .apply_award(ApplyAwardParam {
            cooldown: TimeDelta::MAX,
            ..award(100, 42, XpSource::Voice, 5)
        })
        .await?;
    let second = repo
        .apply_award(ApplyAwardParam {
            at: at_second(59),
            cooldown: TimeDelta::MAX,
            ..award(100, 42, XpSource::Voice, 5)
        })
        .await?;

    assert!(first.is_some());
    assert!(second.is_none());

    Ok(())
}

/// Tests awards for different members committed from parallel transactions.
///
/// Forty members receive five awards each from tasks running on a pool of
/// eight connections to one database file.
///
/// Expected: every award commits and every member ends with five awards
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_transactions_for_different_members_all_commit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .with_file_database(8)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let handles: Vec<_> = (0..200u64)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                let txn = db.begin().await?;
                let record = ExperienceRepository::new(&txn)
                    .apply_award(award(100, i % 40, XpSource::Role, 50))
                    .await?;
                txn.commit().await?;
                Ok::<_, sea_orm::DbErr>(record)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap()?.is_some());
    }

    let repo = ExperienceRepository::new(db);
    for user_id in 0..40 {
        let record = repo.find(100, user_id).await?.unwrap();
        assert_eq!(record.roles_earned, 5);
        assert_eq!(record.total_xp, 250);
    }

    Ok(())
}
