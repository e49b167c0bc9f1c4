//! Read-only repository for the `characters` table.

use dossier_core::id::CharacterId;
use dossier_core::profile::CharacterBio;
use sqlx::PgPool;

use crate::models::character::CharacterBioRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "name, biography, description, image";

/// Lookup operations for characters. This service never writes the table,
/// so no create/update/delete exists here.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Fetch the biography projection for a character.
    ///
    /// Returns `None` if no row matches the identifier.
    pub async fn find_bio_by_id(
        pool: &PgPool,
        id: &CharacterId,
    ) -> Result<Option<CharacterBio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let row = sqlx::query_as::<_, CharacterBioRow>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(CharacterBio::from))
    }
}
