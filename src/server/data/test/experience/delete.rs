use super::*;

/// Tests deleting a single member's record.
///
/// Expected: Ok(true) and the other member's record untouched
#[tokio::test]
async fn deletes_single_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_experience(db, "100", "1", 1500).await?;
    factory::create_user_experience(db, "100", "2", 500).await?;

    let repo = ExperienceRepository::new(db);
    assert!(repo.delete(100, 1).await?);

    assert!(repo.find(100, 1).await?.is_none());
    assert!(repo.find(100, 2).await?.is_some());

    Ok(())
}

/// Tests deleting a record that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ExperienceRepository::new(db).delete(100, 1).await?);

    Ok(())
}

/// Tests deleting all records of a guild.
///
/// Expected: Ok with the guild's record count, other guilds untouched
#[tokio::test]
async fn deletes_all_records_of_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_experience(db, "100", "1", 1500).await?;
    factory::create_user_experience(db, "100", "2", 500).await?;
    factory::create_user_experience(db, "200", "1", 300).await?;

    let repo = ExperienceRepository::new(db);
    assert_eq!(repo.delete_by_guild(100).await?, 2);

    assert!(repo.get_totals_by_guild(100).await?.is_empty());
    assert_eq!(repo.get_totals_by_guild(200).await?, vec![(1, 300)]);

    Ok(())
}
