//! Character row model.

use dossier_core::profile::CharacterBio;
use sqlx::FromRow;

/// The biography projection of a `characters` row.
///
/// Carries exactly the four columns the profile page needs; the `id`
/// column is the lookup key and is never selected back out.
#[derive(Debug, Clone, FromRow)]
pub struct CharacterBioRow {
    pub name: String,
    pub biography: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<CharacterBioRow> for CharacterBio {
    fn from(row: CharacterBioRow) -> Self {
        CharacterBio {
            name: row.name,
            biography: row.biography,
            description: row.description,
            image: row.image,
        }
    }
}
