//! Tests for the SQLite pool store.

use metalfactor_database::{SqlitePoolStore, establish_connection, run_migrations};
use metalfactor_interface::{
    GuildKey, PoolErrorKind, PoolPolicy, PoolSide, PoolStore, Pools, Transfer, TransferDirection,
};
use std::sync::Arc;
use tempfile::TempDir;

const ALLOW: PoolPolicy = PoolPolicy::AllowNegative;

fn pc(amount: i64) -> Transfer {
    Transfer::new(TransferDirection::PlayersToDm, amount)
}

fn dm(amount: i64) -> Transfer {
    Transfer::new(TransferDirection::DmToPlayers, amount)
}

#[tokio::test]
async fn test_unknown_guild_reads_zero() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let pools = store.read(&GuildKey::new("missing")).await.unwrap();
    assert_eq!(pools, Pools::default());
}

#[tokio::test]
async fn test_create_then_read() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");

    store.create_or_replace(&guild, 12, ALLOW).await.unwrap();
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(12, 0));
}

#[tokio::test]
async fn test_create_fully_replaces() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");

    store.create_or_replace(&guild, 12, ALLOW).await.unwrap();
    store
        .overwrite(&guild, Pools::new(1, 9), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    store.create_or_replace(&guild, 5, ALLOW).await.unwrap();

    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(5, 0));
}

#[tokio::test]
async fn test_adjust_shifts_and_round_trips() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 10, ALLOW).await.unwrap();

    let after_pc = store
        .adjust(&guild, pc(5), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(after_pc, Pools::new(5, 5));
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(5, 5));

    let after_dm = store
        .adjust(&guild, dm(5), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(after_dm, Pools::new(10, 0));
}

#[tokio::test]
async fn test_adjust_allows_negative_by_default() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 1, ALLOW).await.unwrap();

    let pools = store
        .adjust(&guild, pc(3), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(pools, Pools::new(-2, 3));
}

#[tokio::test]
async fn test_adjust_rejected_by_policy_rolls_back() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 4, ALLOW).await.unwrap();

    let err = store
        .adjust(&guild, dm(1), PoolPolicy::RejectNegative)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        PoolErrorKind::NegativePool {
            side: PoolSide::Dm,
            value: -1
        }
    );
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(4, 0));
}

#[tokio::test]
async fn test_adjust_overflow_is_an_error() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, i64::MAX, ALLOW).await.unwrap();

    let err = store
        .adjust(&guild, dm(1), PoolPolicy::AllowNegative)
        .await
        .unwrap_err();
    assert_eq!(err.kind, PoolErrorKind::Overflow);
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(i64::MAX, 0));
}

#[tokio::test]
async fn test_adjust_without_campaign_returns_computed_values() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");

    let pools = store
        .adjust(&guild, pc(2), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(pools, Pools::new(-2, 2));
    assert_eq!(store.read(&guild).await.unwrap(), Pools::default());
}

#[tokio::test]
async fn test_overwrite_then_read() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 10, ALLOW).await.unwrap();

    store
        .overwrite(&guild, Pools::new(3, 7), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(3, 7));
}

#[tokio::test]
async fn test_overwrite_missing_campaign_is_silent() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");

    store
        .overwrite(&guild, Pools::new(3, 7), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(store.read(&guild).await.unwrap(), Pools::default());
}

#[tokio::test]
async fn test_overwrite_rejected_by_policy() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 10, ALLOW).await.unwrap();

    let result = store
        .overwrite(&guild, Pools::new(-1, 2), PoolPolicy::RejectNegative)
        .await;
    assert!(result.is_err());
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(10, 0));
}

#[tokio::test]
async fn test_start_rejected_by_policy_keeps_existing_campaign() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 6, ALLOW).await.unwrap();

    let err = store
        .create_or_replace(&guild, -1, PoolPolicy::RejectNegative)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        PoolErrorKind::NegativePool {
            side: PoolSide::Player,
            value: -1
        }
    );
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(6, 0));

    let unknown = GuildKey::new("200");
    assert!(
        store
            .create_or_replace(&unknown, -1, PoolPolicy::RejectNegative)
            .await
            .is_err()
    );
    assert_eq!(store.read(&unknown).await.unwrap(), Pools::default());
}

#[tokio::test]
async fn test_guilds_are_isolated() {
    let store = SqlitePoolStore::in_memory().unwrap();
    let first = GuildKey::new("1");
    let second = GuildKey::new("2");
    store.create_or_replace(&first, 3, ALLOW).await.unwrap();
    store.create_or_replace(&second, 8, ALLOW).await.unwrap();

    store
        .adjust(&first, pc(1), PoolPolicy::AllowNegative)
        .await
        .unwrap();

    assert_eq!(store.read(&first).await.unwrap(), Pools::new(2, 1));
    assert_eq!(store.read(&second).await.unwrap(), Pools::new(8, 0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adjustments_are_not_lost() {
    let store = Arc::new(SqlitePoolStore::in_memory().unwrap());
    let guild = GuildKey::new("100");
    store.create_or_replace(&guild, 100, ALLOW).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..25 {
        let store = store.clone();
        let guild = guild.clone();
        handles.push(tokio::spawn(async move {
            store
                .adjust(&guild, pc(2), PoolPolicy::AllowNegative)
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(50, 50));
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("campaigns.db");
    let guild = GuildKey::new("100");

    {
        let store = SqlitePoolStore::open(&path).unwrap();
        store.create_or_replace(&guild, 7, ALLOW).await.unwrap();
        store
            .adjust(&guild, pc(2), PoolPolicy::AllowNegative)
            .await
            .unwrap();
    }

    assert!(path.is_file());
    let store = SqlitePoolStore::open(&path).unwrap();
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(5, 2));
}

#[test]
fn test_migrations_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("campaigns.db");

    let mut conn = establish_connection(&path).unwrap();
    run_migrations(&mut conn).unwrap();
    run_migrations(&mut conn).unwrap();
}

#[test]
fn test_missing_directory_fails_to_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no/such/dir/campaigns.db");
    assert!(SqlitePoolStore::open(&path).is_err());
}
