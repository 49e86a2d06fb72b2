//! Integration tests for the animal repository layer.
//!
//! Exercises the repository against a real database: create, lookup,
//! list ordering, full-field replace, delete, and the bulk seed path.

use assert_matches::assert_matches;
use menagerie_core::animal::AnimalFields;
use menagerie_db::models::animal::starter_animals;
use menagerie_db::repositories::AnimalRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn malamute() -> AnimalFields {
    AnimalFields {
        animal_type: "Alaskan Malamute".into(),
        species: "Mammal".into(),
        extinct: false,
        location: "North western shores of Alaska".into(),
        life_expectancy: 12.0,
        img: "https://example.com/malamute.jpg".into(),
    }
}

fn dodo() -> AnimalFields {
    AnimalFields {
        animal_type: "Dodo".into(),
        species: "Bird".into(),
        extinct: true,
        location: "Mauritius".into(),
        life_expectancy: 21.0,
        img: "https://example.com/dodo.jpg".into(),
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_id_and_round_trips(pool: PgPool) {
    let created = AnimalRepo::create(&pool, &malamute()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.animal_type, "Alaskan Malamute");
    assert!(!created.extinct);

    let found = AnimalRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created animal should be findable");
    assert_eq!(found.id, created.id);
    assert_eq!(found.species, "Mammal");
    assert_eq!(found.life_expectancy, 12.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_unknown_id_returns_none(pool: PgPool) {
    let found = AnimalRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert_matches!(found, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_rows_in_insertion_order(pool: PgPool) {
    AnimalRepo::create(&pool, &malamute()).await.unwrap();
    AnimalRepo::create(&pool, &dodo()).await.unwrap();

    let animals = AnimalRepo::list(&pool).await.unwrap();
    assert_eq!(animals.len(), 2);
    assert_eq!(animals[0].animal_type, "Alaskan Malamute");
    assert_eq!(animals[1].animal_type, "Dodo");
}

// ---------------------------------------------------------------------------
// Replace
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_updates_every_field_and_preserves_id(pool: PgPool) {
    let created = AnimalRepo::create(&pool, &malamute()).await.unwrap();

    let updated = AnimalRepo::replace(&pool, created.id, &dodo())
        .await
        .unwrap()
        .expect("existing row should be replaced");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.animal_type, "Dodo");
    assert_eq!(updated.species, "Bird");
    assert!(updated.extinct);
    assert_eq!(updated.location, "Mauritius");
    assert_eq!(updated.life_expectancy, 21.0);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_unknown_id_returns_none(pool: PgPool) {
    let result = AnimalRepo::replace(&pool, 999_999, &malamute()).await.unwrap();
    assert_matches!(result, None);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_row(pool: PgPool) {
    let created = AnimalRepo::create(&pool, &malamute()).await.unwrap();

    assert!(AnimalRepo::delete(&pool, created.id).await.unwrap());
    assert_matches!(
        AnimalRepo::find_by_id(&pool, created.id).await.unwrap(),
        None
    );

    // A second delete finds nothing to remove.
    assert!(!AnimalRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_all_clears_the_table(pool: PgPool) {
    AnimalRepo::create(&pool, &malamute()).await.unwrap();
    AnimalRepo::create(&pool, &dodo()).await.unwrap();

    let removed = AnimalRepo::delete_all(&pool).await.unwrap();
    assert_eq!(removed, 2);
    assert!(AnimalRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Seed batch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_many_inserts_the_starter_set_in_order(pool: PgPool) {
    let created = AnimalRepo::create_many(&pool, &starter_animals())
        .await
        .unwrap();

    assert_eq!(created.len(), 5);
    assert_eq!(created[0].animal_type, "Alaskan Malamute");
    assert_eq!(created[2].species, "Bird");
    assert_eq!(created[4].animal_type, "King Cobra");
    assert!(created.iter().all(|a| !a.extinct));

    let listed = AnimalRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].animal_type, "Alaskan Malamute");
}
