//! Behavior of the in-memory pool store.

use metalfactor_interface::{
    GuildKey, InMemoryPoolStore, PoolErrorKind, PoolPolicy, PoolSide, PoolStore, Pools, Transfer,
    TransferDirection,
};

const ALLOW: PoolPolicy = PoolPolicy::AllowNegative;

fn pc(amount: i64) -> Transfer {
    Transfer::new(TransferDirection::PlayersToDm, amount)
}

fn dm(amount: i64) -> Transfer {
    Transfer::new(TransferDirection::DmToPlayers, amount)
}

#[tokio::test]
async fn unknown_guild_reads_zero() {
    let store = InMemoryPoolStore::new();
    let pools = store.read(&GuildKey::new("nobody")).await.unwrap();
    assert_eq!(pools, Pools::default());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_replaces_existing_campaign() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    store.create_or_replace(&guild, 10, ALLOW).await.unwrap();
    store
        .adjust(&guild, pc(4), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    store.create_or_replace(&guild, 3, ALLOW).await.unwrap();

    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(3, 0));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn adjust_round_trip_restores_pools() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    store.create_or_replace(&guild, 8, ALLOW).await.unwrap();

    let after_pc = store
        .adjust(&guild, pc(5), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(after_pc, Pools::new(3, 5));

    let after_dm = store
        .adjust(&guild, dm(5), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(after_dm, Pools::new(8, 0));
}

#[tokio::test]
async fn adjust_without_campaign_persists_nothing() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    let computed = store
        .adjust(&guild, pc(2), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(computed, Pools::new(-2, 2));
    assert_eq!(store.read(&guild).await.unwrap(), Pools::default());
}

#[tokio::test]
async fn reject_policy_leaves_pools_untouched() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    store.create_or_replace(&guild, 1, ALLOW).await.unwrap();

    let err = store
        .adjust(&guild, pc(2), PoolPolicy::RejectNegative)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        PoolErrorKind::NegativePool {
            side: PoolSide::Player,
            value: -1
        }
    );
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(1, 0));
}

#[tokio::test]
async fn rejected_start_keeps_existing_campaign() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    store.create_or_replace(&guild, 5, ALLOW).await.unwrap();

    let err = store
        .create_or_replace(&guild, -3, PoolPolicy::RejectNegative)
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        PoolErrorKind::NegativePool {
            side: PoolSide::Player,
            value: -3
        }
    );
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(5, 0));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn overwrite_sets_absolute_values() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    store.create_or_replace(&guild, 4, ALLOW).await.unwrap();
    store
        .overwrite(&guild, Pools::new(3, 7), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert_eq!(store.read(&guild).await.unwrap(), Pools::new(3, 7));
}

#[tokio::test]
async fn overwrite_without_campaign_is_not_an_error() {
    let store = InMemoryPoolStore::new();
    let guild = GuildKey::new("g");
    store
        .overwrite(&guild, Pools::new(3, 7), PoolPolicy::AllowNegative)
        .await
        .unwrap();
    assert!(store.is_empty().await);
}
