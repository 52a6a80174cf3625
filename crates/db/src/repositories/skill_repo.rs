//! Repository for the `skills` table.

use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill, SkillFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, description, created_at";

/// Provides operations on the shared skill taxonomy.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a skill by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a skill by exact name (case-sensitive, names are unique).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE name = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List the taxonomy alphabetically, optionally narrowed by filters.
    ///
    /// `query` substring-matches name or description; `category`
    /// substring-matches the category.
    pub async fn list(pool: &PgPool, filter: &SkillFilter) -> Result<Vec<Skill>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(query) = filter.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            binds.push(format!("%{query}%"));
            let idx = binds.len();
            conditions.push(format!("(name ILIKE ${idx} OR description ILIKE ${idx})"));
        }

        if let Some(category) = filter
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            binds.push(format!("%{category}%"));
            conditions.push(format!("category ILIKE ${}", binds.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("SELECT {COLUMNS} FROM skills {where_clause} ORDER BY name ASC");
        let mut list_query = sqlx::query_as::<_, Skill>(&sql);
        for bind in &binds {
            list_query = list_query.bind(bind);
        }
        list_query.fetch_all(pool).await
    }
}
