//! Integration tests for the character repository against a real database.

use dossier_core::id::CharacterId;
use dossier_db::repositories::CharacterRepo;
use sqlx::PgPool;

const KNOWN_ID: &str = "0123456789abcdef01234567";

fn known_id() -> CharacterId {
    KNOWN_ID.parse().unwrap()
}

async fn insert_character(
    pool: &PgPool,
    id: &str,
    name: &str,
    biography: Option<&str>,
    description: Option<&str>,
    image: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO characters (id, name, biography, description, image)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(name)
    .bind(biography)
    .bind(description)
    .bind(image)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test]
async fn absent_id_returns_none(pool: PgPool) {
    let bio = CharacterRepo::find_bio_by_id(&pool, &known_id())
        .await
        .unwrap();
    assert!(bio.is_none());
}

#[sqlx::test]
async fn full_row_round_trips(pool: PgPool) {
    insert_character(
        &pool,
        KNOWN_ID,
        "Bob",
        Some("A rogue."),
        Some("Tall."),
        Some("http://x/img.png"),
    )
    .await;

    let bio = CharacterRepo::find_bio_by_id(&pool, &known_id())
        .await
        .unwrap()
        .expect("row was just inserted");

    assert_eq!(bio.name, "Bob");
    assert_eq!(bio.biography.as_deref(), Some("A rogue."));
    assert_eq!(bio.description.as_deref(), Some("Tall."));
    assert_eq!(bio.image.as_deref(), Some("http://x/img.png"));
}

#[sqlx::test]
async fn null_columns_map_to_none(pool: PgPool) {
    insert_character(&pool, KNOWN_ID, "Alice", None, None, None).await;

    let bio = CharacterRepo::find_bio_by_id(&pool, &known_id())
        .await
        .unwrap()
        .expect("row was just inserted");

    assert_eq!(bio.name, "Alice");
    assert_eq!(bio.biography, None);
    assert_eq!(bio.description, None);
    assert_eq!(bio.image, None);
}

#[sqlx::test]
async fn lookup_matches_only_the_requested_id(pool: PgPool) {
    insert_character(&pool, KNOWN_ID, "Alice", None, None, None).await;

    let other: CharacterId = "ffffffffffffffffffffffff".parse().unwrap();
    let bio = CharacterRepo::find_bio_by_id(&pool, &other).await.unwrap();
    assert!(bio.is_none());
}
