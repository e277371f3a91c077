use super::*;

/// Tests fetching totals for a guild.
///
/// Verifies that only records of the requested guild are returned.
///
/// Expected: Ok with the guild's totals
#[tokio::test]
async fn returns_totals_for_guild_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_experience(db, "100", "1", 1500).await?;
    factory::create_user_experience(db, "100", "2", 500).await?;
    factory::create_user_experience(db, "200", "3", 300).await?;

    let mut totals = ExperienceRepository::new(db).get_totals_by_guild(100).await?;
    totals.sort();

    assert_eq!(totals, vec![(1, 1500), (2, 500)]);

    Ok(())
}

/// Tests fetching totals for a guild without records.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let totals = ExperienceRepository::new(db).get_totals_by_guild(999).await?;

    assert!(totals.is_empty());

    Ok(())
}
