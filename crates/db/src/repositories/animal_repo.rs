//! Repository for the `animals` table.

use sqlx::PgPool;

use menagerie_core::animal::AnimalFields;
use menagerie_core::types::DbId;

use crate::models::animal::Animal;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, animal_type, species, extinct, location, life_expectancy, img, created_at, updated_at";

/// Provides CRUD operations for animals.
pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new animal, returning the created row.
    pub async fn create(pool: &PgPool, fields: &AnimalFields) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "INSERT INTO animals
                (animal_type, species, extinct, location, life_expectancy, img)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&fields.animal_type)
            .bind(&fields.species)
            .bind(fields.extinct)
            .bind(&fields.location)
            .bind(fields.life_expectancy)
            .bind(&fields.img)
            .fetch_one(pool)
            .await
    }

    /// Insert a batch of animals one by one, returning the created rows
    /// in insertion order.
    pub async fn create_many(
        pool: &PgPool,
        batch: &[AnimalFields],
    ) -> Result<Vec<Animal>, sqlx::Error> {
        let mut created = Vec::with_capacity(batch.len());
        for fields in batch {
            created.push(Self::create(pool, fields).await?);
        }
        Ok(created)
    }

    /// Find an animal by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all animals in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals ORDER BY id");
        sqlx::query_as::<_, Animal>(&query).fetch_all(pool).await
    }

    /// Replace every mutable field of an animal. The ID is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        fields: &AnimalFields,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!(
            "UPDATE animals SET
                animal_type = $2,
                species = $3,
                extinct = $4,
                location = $5,
                life_expectancy = $6,
                img = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .bind(&fields.animal_type)
            .bind(&fields.species)
            .bind(fields.extinct)
            .bind(&fields.location)
            .bind(fields.life_expectancy)
            .bind(&fields.img)
            .fetch_optional(pool)
            .await
    }

    /// Delete an animal by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every animal. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
