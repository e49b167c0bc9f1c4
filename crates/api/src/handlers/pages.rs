//! Handlers for the biography pages.
//!
//! Three read-only pages: the static landing page, an offline sample
//! render, and the live profile lookup. Each request is independent;
//! the only shared state is the pool and the read-only template files.

use axum::extract::{Path, State};
use axum::response::Html;
use dossier_core::error::CoreError;
use dossier_core::id::CharacterId;
use dossier_core::profile::{render_profile, CharacterBio};
use dossier_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::templates;

/// GET / -- the landing page template, served verbatim.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = templates::load_template(&state.config.templates_dir, templates::HOME_TEMPLATE)?;
    Ok(Html(html))
}

/// GET {sample_path} -- render the bundled sample record.
///
/// Reads a local JSON fixture instead of the database, so the page works
/// without a live store connection.
pub async fn sample(State(state): State<AppState>) -> AppResult<Html<String>> {
    let raw = std::fs::read_to_string(&state.config.sample_fixture)?;
    let bio: CharacterBio = serde_json::from_str(&raw)?;
    render_bio(&state, &bio)
}

/// GET {profile_prefix}/{charid} -- look up a character and render its
/// biography.
///
/// Rejects malformed identifiers before the database is consulted (400),
/// and maps an empty lookup to 404.
pub async fn profile(
    State(state): State<AppState>,
    Path(charid): Path<String>,
) -> AppResult<Html<String>> {
    let id: CharacterId = charid.parse()?;

    let bio = CharacterRepo::find_bio_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
        }))?;

    render_bio(&state, &bio)
}

/// Load the profile template and run the substitution.
fn render_bio(state: &AppState, bio: &CharacterBio) -> AppResult<Html<String>> {
    let template =
        templates::load_template(&state.config.templates_dir, templates::PROFILE_TEMPLATE)?;
    let html = render_profile(&template, bio, state.config.image_placeholder)?;
    Ok(Html(html))
}
