use super::*;

/// Tests the leaderboard of a guild with three members.
///
/// Expected: totals 1500, 500, 300 in that order
#[tokio::test]
async fn orders_members_by_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_experience(db, "100", "3", 300).await?;
    factory::create_user_experience(db, "100", "1", 1500).await?;
    factory::create_user_experience(db, "100", "2", 500).await?;
    let (service, _level_ups) = service(db);

    let board = service.get_leaderboard(GUILD, 10).await?;

    let totals: Vec<i64> = board.iter().map(|e| e.total_xp).collect();
    assert_eq!(totals, vec![1500, 500, 300]);
    assert_eq!(board[0].position, 1);
    assert_eq!(board[0].user_id, 1);

    Ok(())
}

/// Tests tie-breaking on equal totals.
///
/// User IDs of different lengths make sure the order is numeric, not lexical.
///
/// Expected: ascending user ID among equal totals, on every call
#[tokio::test]
async fn breaks_ties_by_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_user_experience(db, "100", "900", 200).await?;
    factory::create_user_experience(db, "100", "1000", 200).await?;
    factory::create_user_experience(db, "100", "95", 200).await?;
    let (service, _level_ups) = service(db);

    let first = service.get_leaderboard(GUILD, 10).await?;
    let second = service.get_leaderboard(GUILD, 10).await?;

    let users: Vec<u64> = first.iter().map(|e| e.user_id).collect();
    assert_eq!(users, vec![95, 900, 1000]);
    assert_eq!(first, second);

    Ok(())
}

/// Tests the leaderboard limit.
///
/// Expected: only the first `limit` rows
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (user, xp) in [("1", 10), ("2", 20), ("3", 30), ("4", 40)] {
        factory::create_user_experience(db, "100", user, xp).await?;
    }
    let (service, _level_ups) = service(db);

    let board = service.get_leaderboard(GUILD, 2).await?;

    let users: Vec<u64> = board.iter().map(|e| e.user_id).collect();
    assert_eq!(users, vec![4, 3]);

    Ok(())
}

/// Tests rank lookups over the whole guild.
///
/// Expected: rank computed over all members, unranked for strangers
#[tokio::test]
async fn ranks_over_all_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_experience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (user, xp) in [("1", 10), ("2", 20), ("3", 30), ("4", 40)] {
        factory::create_user_experience(db, "100", user, xp).await?;
    }
    factory::create_user_experience(db, "200", "9", 1_000).await?;
    let (service, _level_ups) = service(db);

    assert_eq!(
        service.get_rank(GUILD, 1).await?,
        Rank::Ranked {
            position: 4,
            total_users: 4
        }
    );
    assert_eq!(service.get_rank(GUILD, 9).await?, Rank::Unranked);

    Ok(())
}
