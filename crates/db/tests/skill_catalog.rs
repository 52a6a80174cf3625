//! Integration tests for the skill taxonomy and per-user listings.
//!
//! - Taxonomy create / lookup / filtered list
//! - Unique skill name constraint
//! - Listing create with the (user, skill, direction) uniqueness rule
//! - Joined listing reads
//! - Owner-scoped deletes

use skillswap_core::skill::{SkillLevel, SkillType};
use skillswap_db::models::skill::{CreateSkill, SkillFilter};
use skillswap_db::models::user::CreateUser;
use skillswap_db::models::user_skill::CreateUserSkill;
use skillswap_db::repositories::{SkillRepo, UserRepo, UserSkillRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        name: None,
        location: None,
    }
}

fn new_skill(name: &str, category: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        category: category.to_string(),
        description: None,
    }
}

fn new_listing(user_id: i64, skill_id: i64, skill_type: SkillType) -> CreateUserSkill {
    CreateUserSkill {
        user_id,
        skill_id,
        skill_type,
        level: SkillLevel::Intermediate,
    }
}

// ---------------------------------------------------------------------------
// Test: Taxonomy create and lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find_skill(pool: PgPool) {
    let skill = SkillRepo::create(&pool, &new_skill("Guitar", "Music"))
        .await
        .unwrap();
    assert_eq!(skill.name, "Guitar");
    assert_eq!(skill.category, "Music");

    let by_id = SkillRepo::find_by_id(&pool, skill.id).await.unwrap();
    assert!(by_id.is_some());

    let by_name = SkillRepo::find_by_name(&pool, "Guitar").await.unwrap();
    assert_eq!(by_name.unwrap().id, skill.id);
}

// ---------------------------------------------------------------------------
// Test: Duplicate skill name rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_skill_name_rejected(pool: PgPool) {
    SkillRepo::create(&pool, &new_skill("Welding", "Trades"))
        .await
        .unwrap();
    let result = SkillRepo::create(&pool, &new_skill("Welding", "Trades")).await;
    assert!(result.is_err(), "duplicate skill name should fail");
}

// ---------------------------------------------------------------------------
// Test: Taxonomy list with filters, ordered by name
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_skills_filtered(pool: PgPool) {
    SkillRepo::create(&pool, &new_skill("Python", "Programming"))
        .await
        .unwrap();
    SkillRepo::create(&pool, &new_skill("Rust", "Programming"))
        .await
        .unwrap();
    SkillRepo::create(&pool, &new_skill("Baking", "Cooking"))
        .await
        .unwrap();

    let all = SkillRepo::list(&pool, &SkillFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Baking", "alphabetical order");

    let programming = SkillRepo::list(
        &pool,
        &SkillFilter {
            category: Some("program".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(programming.len(), 2);

    let rust = SkillRepo::list(
        &pool,
        &SkillFilter {
            query: Some("rus".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(rust.len(), 1);
    assert_eq!(rust[0].name, "Rust");
}

// ---------------------------------------------------------------------------
// Test: Listing create and duplicate direction rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_listing_unique_per_direction(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("lister@example.com"))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Chess", "Games"))
        .await
        .unwrap();

    let offered = UserSkillRepo::create(&pool, &new_listing(user.id, skill.id, SkillType::Offered))
        .await
        .unwrap();
    assert_eq!(offered.skill_type, "OFFERED");
    assert_eq!(offered.level, "INTERMEDIATE");

    // Same skill in the other direction is a distinct listing.
    UserSkillRepo::create(&pool, &new_listing(user.id, skill.id, SkillType::Wanted))
        .await
        .unwrap();

    // Same skill in the same direction is not.
    let result =
        UserSkillRepo::create(&pool, &new_listing(user.id, skill.id, SkillType::Offered)).await;
    assert!(result.is_err(), "duplicate (user, skill, type) should fail");
}

// ---------------------------------------------------------------------------
// Test: Joined listing reads embed the skill row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_for_user_embeds_skill(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("embed@example.com"))
        .await
        .unwrap();
    let other = UserRepo::create(&pool, &new_user("other@example.com"))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Yoga", "Fitness"))
        .await
        .unwrap();

    UserSkillRepo::create(&pool, &new_listing(user.id, skill.id, SkillType::Offered))
        .await
        .unwrap();
    UserSkillRepo::create(&pool, &new_listing(other.id, skill.id, SkillType::Wanted))
        .await
        .unwrap();

    let listings = UserSkillRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(listings.len(), 1, "scoped to the requested user");
    assert_eq!(listings[0].skill.name, "Yoga");
    assert_eq!(listings[0].skill.category, "Fitness");

    let batch = UserSkillRepo::list_for_users(&pool, &[user.id, other.id])
        .await
        .unwrap();
    assert_eq!(batch.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: Delete is owner-scoped
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_listing_owner_scoped(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("owner@example.com"))
        .await
        .unwrap();
    let intruder = UserRepo::create(&pool, &new_user("intruder@example.com"))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Pottery", "Crafts"))
        .await
        .unwrap();
    let listing = UserSkillRepo::create(&pool, &new_listing(owner.id, skill.id, SkillType::Offered))
        .await
        .unwrap();

    // Wrong owner deletes nothing.
    assert!(!UserSkillRepo::delete_for_user(&pool, listing.id, intruder.id)
        .await
        .unwrap());
    assert!(UserSkillRepo::find_by_id(&pool, listing.id)
        .await
        .unwrap()
        .is_some());

    assert!(UserSkillRepo::delete_for_user(&pool, listing.id, owner.id)
        .await
        .unwrap());
    assert!(UserSkillRepo::find_by_id(&pool, listing.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Deleting a user cascades to their listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_delete_cascades_listings(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("cascade@example.com"))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Singing", "Music"))
        .await
        .unwrap();
    let listing = UserSkillRepo::create(&pool, &new_listing(user.id, skill.id, SkillType::Wanted))
        .await
        .unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(UserSkillRepo::find_by_id(&pool, listing.id)
        .await
        .unwrap()
        .is_none());
    // The taxonomy row is shared and survives.
    assert!(SkillRepo::find_by_id(&pool, skill.id)
        .await
        .unwrap()
        .is_some());
}
