//! Integration tests for the swap request lifecycle.
//!
//! - Creation defaults and the distinct-parties constraint
//! - Pending-pair duplicate suppression
//! - Guarded status transitions
//! - Direction/status filtered listing
//! - Dashboard summary aggregates
//! - The pending-received notification feed
//! - Listing reference counting for delete guards

use skillswap_core::skill::{SkillLevel, SkillType};
use skillswap_core::swap::SwapStatus;
use skillswap_db::models::skill::CreateSkill;
use skillswap_db::models::swap_request::{CreateSwapRequest, SwapDirection, SwapListFilter};
use skillswap_db::models::user::{CreateUser, User};
use skillswap_db::models::user_skill::{CreateUserSkill, UserSkill};
use skillswap_db::repositories::{SkillRepo, SwapRequestRepo, UserRepo, UserSkillRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Pair {
    requester: User,
    receiver: User,
    offered: UserSkill,
    wanted: UserSkill,
}

/// Two users, one skill each, each listed as OFFERED by its owner.
async fn setup_pair(pool: &PgPool, tag: &str) -> Pair {
    let requester = UserRepo::create(
        pool,
        &CreateUser {
            email: format!("{tag}-requester@example.com"),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
            name: Some(format!("{tag} requester")),
            location: None,
        },
    )
    .await
    .unwrap();
    let receiver = UserRepo::create(
        pool,
        &CreateUser {
            email: format!("{tag}-receiver@example.com"),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
            name: Some(format!("{tag} receiver")),
            location: None,
        },
    )
    .await
    .unwrap();

    let offered_skill = SkillRepo::create(
        pool,
        &CreateSkill {
            name: format!("{tag} offered skill"),
            category: "Test".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let wanted_skill = SkillRepo::create(
        pool,
        &CreateSkill {
            name: format!("{tag} wanted skill"),
            category: "Test".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let offered = UserSkillRepo::create(
        pool,
        &CreateUserSkill {
            user_id: requester.id,
            skill_id: offered_skill.id,
            skill_type: SkillType::Offered,
            level: SkillLevel::Advanced,
        },
    )
    .await
    .unwrap();
    let wanted = UserSkillRepo::create(
        pool,
        &CreateUserSkill {
            user_id: receiver.id,
            skill_id: wanted_skill.id,
            skill_type: SkillType::Offered,
            level: SkillLevel::Beginner,
        },
    )
    .await
    .unwrap();

    Pair {
        requester,
        receiver,
        offered,
        wanted,
    }
}

fn new_swap(pair: &Pair, message: Option<&str>) -> CreateSwapRequest {
    CreateSwapRequest {
        requester_id: pair.requester.id,
        receiver_id: pair.receiver.id,
        skill_offered_id: pair.offered.id,
        skill_wanted_id: pair.wanted.id,
        message: message.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Test: Creation defaults to PENDING
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_defaults_to_pending(pool: PgPool) {
    let pair = setup_pair(&pool, "create").await;

    let swap = SwapRequestRepo::create(&pool, &new_swap(&pair, Some("Trade?")))
        .await
        .unwrap();
    assert_eq!(swap.status, "PENDING");
    assert_eq!(swap.message.as_deref(), Some("Trade?"));
    assert_eq!(swap.requester_id, pair.requester.id);
    assert_eq!(swap.receiver_id, pair.receiver.id);
}

// ---------------------------------------------------------------------------
// Test: Self-swap rejected by check constraint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_self_swap_rejected(pool: PgPool) {
    let pair = setup_pair(&pool, "self").await;

    let result = SwapRequestRepo::create(
        &pool,
        &CreateSwapRequest {
            requester_id: pair.requester.id,
            receiver_id: pair.requester.id,
            skill_offered_id: pair.offered.id,
            skill_wanted_id: pair.wanted.id,
            message: None,
        },
    )
    .await;
    assert!(result.is_err(), "requester == receiver should fail");
}

// ---------------------------------------------------------------------------
// Test: Pending-pair duplicate suppression
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_pending_pair_rejected(pool: PgPool) {
    let pair = setup_pair(&pool, "pending-dup").await;

    let first = SwapRequestRepo::create(&pool, &new_swap(&pair, None))
        .await
        .unwrap();
    assert!(
        SwapRequestRepo::has_pending_between(&pool, pair.requester.id, pair.receiver.id)
            .await
            .unwrap()
    );
    // Direction matters.
    assert!(
        !SwapRequestRepo::has_pending_between(&pool, pair.receiver.id, pair.requester.id)
            .await
            .unwrap()
    );

    // The partial unique index backstops the application-level check.
    let result = SwapRequestRepo::create(&pool, &new_swap(&pair, None)).await;
    assert!(result.is_err(), "second pending pair should fail");

    // Once the first request leaves PENDING a new one is allowed.
    SwapRequestRepo::transition(&pool, first.id, SwapStatus::Rejected, SwapStatus::Pending)
        .await
        .unwrap()
        .expect("transition should apply");
    SwapRequestRepo::create(&pool, &new_swap(&pair, None))
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Test: Transition applies only from the required status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_transition_guarded_on_current_status(pool: PgPool) {
    let pair = setup_pair(&pool, "transition").await;
    let swap = SwapRequestRepo::create(&pool, &new_swap(&pair, None))
        .await
        .unwrap();

    // COMPLETED requires ACCEPTED; from PENDING the guard fails.
    let blocked =
        SwapRequestRepo::transition(&pool, swap.id, SwapStatus::Completed, SwapStatus::Accepted)
            .await
            .unwrap();
    assert!(blocked.is_none());
    let row = SwapRequestRepo::find_by_id(&pool, swap.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "PENDING", "failed guard writes nothing");

    let accepted =
        SwapRequestRepo::transition(&pool, swap.id, SwapStatus::Accepted, SwapStatus::Pending)
            .await
            .unwrap()
            .expect("accept from PENDING should apply");
    assert_eq!(accepted.status, "ACCEPTED");
    assert!(accepted.updated_at >= swap.updated_at);

    // Replaying the same transition loses the guard.
    let replay =
        SwapRequestRepo::transition(&pool, swap.id, SwapStatus::Accepted, SwapStatus::Pending)
            .await
            .unwrap();
    assert!(replay.is_none());

    let completed =
        SwapRequestRepo::transition(&pool, swap.id, SwapStatus::Completed, SwapStatus::Accepted)
            .await
            .unwrap()
            .expect("complete from ACCEPTED should apply");
    assert_eq!(completed.status, "COMPLETED");

    // Unknown id behaves like a failed guard.
    let ghost =
        SwapRequestRepo::transition(&pool, 999_999, SwapStatus::Accepted, SwapStatus::Pending)
            .await
            .unwrap();
    assert!(ghost.is_none());
}

// ---------------------------------------------------------------------------
// Test: Listing by direction and status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_for_user_filters(pool: PgPool) {
    let ab = setup_pair(&pool, "ab").await;
    let swap_ab = SwapRequestRepo::create(&pool, &new_swap(&ab, None))
        .await
        .unwrap();

    // A second request coming *into* the first requester.
    let ca = setup_pair(&pool, "ca").await;
    SwapRequestRepo::create(
        &pool,
        &CreateSwapRequest {
            requester_id: ca.requester.id,
            receiver_id: ab.requester.id,
            skill_offered_id: ca.offered.id,
            skill_wanted_id: ab.offered.id,
            message: None,
        },
    )
    .await
    .unwrap();

    let user_id = ab.requester.id;

    let both = SwapRequestRepo::list_for_user(&pool, user_id, &SwapListFilter::default())
        .await
        .unwrap();
    assert_eq!(both.len(), 2);

    let sent = SwapRequestRepo::list_for_user(
        &pool,
        user_id,
        &SwapListFilter {
            direction: Some(SwapDirection::Sent),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].requester_id, user_id);
    assert_eq!(sent[0].receiver.email, ab.receiver.email, "party embedded");

    let received = SwapRequestRepo::list_for_user(
        &pool,
        user_id,
        &SwapListFilter {
            direction: Some(SwapDirection::Received),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].receiver_id, user_id);

    // Status filter composes with direction.
    SwapRequestRepo::transition(&pool, swap_ab.id, SwapStatus::Accepted, SwapStatus::Pending)
        .await
        .unwrap()
        .unwrap();
    let accepted_sent = SwapRequestRepo::list_for_user(
        &pool,
        user_id,
        &SwapListFilter {
            direction: Some(SwapDirection::Sent),
            status: Some(SwapStatus::Accepted),
        },
    )
    .await
    .unwrap();
    assert_eq!(accepted_sent.len(), 1);
    let pending_sent = SwapRequestRepo::list_for_user(
        &pool,
        user_id,
        &SwapListFilter {
            direction: Some(SwapDirection::Sent),
            status: Some(SwapStatus::Pending),
        },
    )
    .await
    .unwrap();
    assert!(pending_sent.is_empty());
}

// ---------------------------------------------------------------------------
// Test: Detail lookup embeds both parties
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_find_detail_embeds_parties(pool: PgPool) {
    let pair = setup_pair(&pool, "detail").await;
    let swap = SwapRequestRepo::create(&pool, &new_swap(&pair, Some("hello")))
        .await
        .unwrap();

    let detail = SwapRequestRepo::find_detail_by_id(&pool, swap.id)
        .await
        .unwrap()
        .expect("detail should exist");
    assert_eq!(detail.requester.id, pair.requester.id);
    assert_eq!(detail.requester.name.as_deref(), Some("detail requester"));
    assert_eq!(detail.receiver.email, pair.receiver.email);
    assert!(detail.ratings.is_empty(), "ratings attached by callers");

    assert!(SwapRequestRepo::find_detail_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Summary aggregates per direction and overall
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_summary_counts(pool: PgPool) {
    let ab = setup_pair(&pool, "sum-ab").await;
    let user_id = ab.requester.id;

    // Sent: one pending, one accepted.
    let s1 = SwapRequestRepo::create(&pool, &new_swap(&ab, None))
        .await
        .unwrap();
    SwapRequestRepo::transition(&pool, s1.id, SwapStatus::Accepted, SwapStatus::Pending)
        .await
        .unwrap()
        .unwrap();
    SwapRequestRepo::create(&pool, &new_swap(&ab, None))
        .await
        .unwrap();

    // Received: one completed.
    let ca = setup_pair(&pool, "sum-ca").await;
    let r1 = SwapRequestRepo::create(
        &pool,
        &CreateSwapRequest {
            requester_id: ca.requester.id,
            receiver_id: user_id,
            skill_offered_id: ca.offered.id,
            skill_wanted_id: ab.offered.id,
            message: None,
        },
    )
    .await
    .unwrap();
    SwapRequestRepo::transition(&pool, r1.id, SwapStatus::Accepted, SwapStatus::Pending)
        .await
        .unwrap()
        .unwrap();
    SwapRequestRepo::transition(&pool, r1.id, SwapStatus::Completed, SwapStatus::Accepted)
        .await
        .unwrap()
        .unwrap();

    let summary = SwapRequestRepo::summary_for_user(&pool, user_id).await.unwrap();
    assert_eq!(summary.sent.total, 2);
    assert_eq!(summary.sent.pending, 1);
    assert_eq!(summary.sent.accepted, 1);
    assert_eq!(summary.sent.completed, 0);
    assert_eq!(summary.received.total, 1);
    assert_eq!(summary.received.completed, 1);
    assert_eq!(summary.overall.total, 3);
    assert_eq!(summary.overall.pending, 1);
    assert_eq!(summary.overall.accepted, 1);
    assert_eq!(summary.overall.completed, 1);

    // A bystander sees zeroes.
    let empty = SwapRequestRepo::summary_for_user(&pool, ca.receiver.id)
        .await
        .unwrap();
    assert_eq!(empty.overall.total, 0);
}

// ---------------------------------------------------------------------------
// Test: Pending-received feed pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_pending_received_page(pool: PgPool) {
    let ab = setup_pair(&pool, "feed-ab").await;
    let cb = setup_pair(&pool, "feed-cb").await;
    let receiver_id = ab.receiver.id;

    SwapRequestRepo::create(&pool, &new_swap(&ab, None))
        .await
        .unwrap();
    let second = SwapRequestRepo::create(
        &pool,
        &CreateSwapRequest {
            requester_id: cb.requester.id,
            receiver_id,
            skill_offered_id: cb.offered.id,
            skill_wanted_id: ab.wanted.id,
            message: None,
        },
    )
    .await
    .unwrap();
    // Accepted requests drop out of the feed.
    let third = SwapRequestRepo::create(
        &pool,
        &CreateSwapRequest {
            requester_id: cb.receiver.id,
            receiver_id,
            skill_offered_id: cb.wanted.id,
            skill_wanted_id: ab.wanted.id,
            message: None,
        },
    )
    .await
    .unwrap();
    SwapRequestRepo::transition(&pool, third.id, SwapStatus::Accepted, SwapStatus::Pending)
        .await
        .unwrap()
        .unwrap();

    let (page, total) = SwapRequestRepo::pending_received_page(&pool, receiver_id, 1, 0)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, second.id, "newest first");

    let (page, total) = SwapRequestRepo::pending_received_page(&pool, receiver_id, 10, 1)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(page.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Delete, and listing reference counting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_and_reference_counts(pool: PgPool) {
    let pair = setup_pair(&pool, "del").await;
    let swap = SwapRequestRepo::create(&pool, &new_swap(&pair, None))
        .await
        .unwrap();

    assert_eq!(
        UserSkillRepo::swap_reference_count(&pool, pair.offered.id)
            .await
            .unwrap(),
        1
    );
    // A referenced listing cannot be removed out from under the swap.
    let result = sqlx::query("DELETE FROM user_skills WHERE id = $1")
        .bind(pair.offered.id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "restricted FK should block the delete");

    assert!(SwapRequestRepo::delete(&pool, swap.id).await.unwrap());
    assert!(SwapRequestRepo::find_by_id(&pool, swap.id)
        .await
        .unwrap()
        .is_none());
    assert!(!SwapRequestRepo::delete(&pool, swap.id).await.unwrap());

    assert_eq!(
        UserSkillRepo::swap_reference_count(&pool, pair.offered.id)
            .await
            .unwrap(),
        0
    );
}
