//! Integration tests for `DieselUserRepository` against PostgreSQL.
//!
//! Each test uses fresh UUIDs and emails, so suites can share one database
//! and run in parallel.

use rstest::{fixture, rstest};
use user_directory::domain::ports::{UserPersistenceError, UserRepository};
use user_directory::domain::{EmailAddress, NewUser, UserChanges, UserId, UserName};
use user_directory::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

mod support;

use support::{migrated_test_database, unique_email};

async fn repository(database_url: &str) -> DieselUserRepository {
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2).with_min_idle(None))
        .await
        .expect("test pool builds");
    DieselUserRepository::new(pool)
}

#[fixture]
fn new_user() -> NewUser {
    NewUser {
        id: UserId::random(),
        name: UserName::new("Diesel Test User").expect("valid name"),
        email: EmailAddress::new(unique_email("diesel")).expect("valid email"),
    }
}

#[rstest]
#[tokio::test]
async fn create_then_find_round_trips(new_user: NewUser) {
    let Some(url) = migrated_test_database() else {
        return;
    };
    let repo = repository(&url).await;

    let created = repo.create(&new_user).await.expect("insert succeeds");
    let found = repo
        .find_by_id(&new_user.id)
        .await
        .expect("lookup succeeds")
        .expect("user exists");

    assert!(created.row_id() > 0);
    assert_eq!(found.id(), &new_user.id);
    assert_eq!(found.name(), &new_user.name);
    assert_eq!(found.email(), &new_user.email);
    assert!(found.audit().deleted_at.is_none());
}

#[rstest]
#[tokio::test]
async fn duplicate_live_email_is_rejected(new_user: NewUser) {
    let Some(url) = migrated_test_database() else {
        return;
    };
    let repo = repository(&url).await;
    repo.create(&new_user).await.expect("first insert succeeds");

    let clash = NewUser {
        id: UserId::random(),
        ..new_user.clone()
    };
    let err = repo.create(&clash).await.expect_err("duplicate email");

    assert_eq!(
        err,
        UserPersistenceError::duplicate_email(new_user.email.as_ref())
    );
}

#[rstest]
#[tokio::test]
async fn update_merges_only_supplied_fields(new_user: NewUser) {
    let Some(url) = migrated_test_database() else {
        return;
    };
    let repo = repository(&url).await;
    repo.create(&new_user).await.expect("insert succeeds");

    let changes = UserChanges {
        name: Some(UserName::new("Renamed").expect("valid name")),
        email: None,
    };
    let updated = repo
        .update(&new_user.id, &changes)
        .await
        .expect("update succeeds")
        .expect("user exists");

    assert_eq!(updated.name().as_ref(), "Renamed");
    assert_eq!(updated.email(), &new_user.email);
    assert!(updated.audit().updated_at >= updated.audit().created_at);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_user_returns_none() {
    let Some(url) = migrated_test_database() else {
        return;
    };
    let repo = repository(&url).await;
    let changes = UserChanges {
        name: Some(UserName::new("Ghost").expect("valid name")),
        email: None,
    };

    let outcome = repo
        .update(&UserId::random(), &changes)
        .await
        .expect("update runs");

    assert!(outcome.is_none());
}

#[rstest]
#[tokio::test]
async fn soft_delete_hides_user_and_frees_email(new_user: NewUser) {
    let Some(url) = migrated_test_database() else {
        return;
    };
    let repo = repository(&url).await;
    repo.create(&new_user).await.expect("insert succeeds");

    assert!(repo.delete(&new_user.id).await.expect("delete runs"));
    assert!(!repo.delete(&new_user.id).await.expect("second delete runs"));
    assert!(
        repo.find_by_id(&new_user.id)
            .await
            .expect("lookup runs")
            .is_none()
    );
    let listed = repo.list().await.expect("list runs");
    assert!(listed.iter().all(|user| user.id() != &new_user.id));

    let again = NewUser {
        id: UserId::random(),
        ..new_user
    };
    repo.create(&again).await.expect("email reusable after delete");
}

#[rstest]
#[tokio::test]
async fn list_includes_created_users(new_user: NewUser) {
    let Some(url) = migrated_test_database() else {
        return;
    };
    let repo = repository(&url).await;
    repo.create(&new_user).await.expect("insert succeeds");

    let listed = repo.list().await.expect("list runs");

    assert!(listed.iter().any(|user| user.id() == &new_user.id));
}
