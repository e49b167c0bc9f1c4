//! Profile rendering: substitute a character record into an HTML template.
//!
//! The template is plain text carrying the literal placeholders `{name}`,
//! `{biography}`, `{description}` and `{image}`. Substitution is literal
//! replacement, not a templating language; unknown `{tokens}` pass through
//! untouched. Field values are HTML-escaped before insertion, so markup in
//! stored records is displayed rather than executed.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Markup substituted for an empty or absent biography/description.
pub const NOT_SET_MARKUP: &str = r#"<em class="text-muted">Not set.</em>"#;

/// Markup substituted for a missing image under [`ImagePolicy::Placeholder`].
pub const NO_IMAGE_MARKUP: &str =
    r#"<p class="text-muted text-center"><em>No image set.</em></p>"#;

/// The placeholder tokens a profile template must contain.
const PLACEHOLDERS: [&str; 4] = ["{name}", "{biography}", "{description}", "{image}"];

/// Compiled placeholder regex. Matches only the four known tokens so the
/// whole substitution happens in a single pass over the template.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(name|biography|description|image)\}").expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The biography projection of a character record.
///
/// `name` is required once a record exists; the remaining fields are
/// nullable upstream and an empty string counts the same as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBio {
    pub name: String,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// What to substitute for `{image}` when the record has no image.
///
/// The historical variants of this page disagreed (placeholder markup vs.
/// nothing at all), so the choice is configuration rather than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePolicy {
    /// Substitute [`NO_IMAGE_MARKUP`].
    #[default]
    Placeholder,
    /// Substitute an empty string.
    Empty,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Escape a field value for embedding in HTML text or attribute position.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a character's profile page.
///
/// Fails with [`CoreError::Template`] if the template is missing any of the
/// four placeholders; a structurally broken template is an infrastructure
/// problem, not a bad request.
pub fn render_profile(
    template: &str,
    bio: &CharacterBio,
    policy: ImagePolicy,
) -> Result<String, CoreError> {
    for placeholder in PLACEHOLDERS {
        if !template.contains(placeholder) {
            return Err(CoreError::Template(format!(
                "profile template is missing the {placeholder} placeholder"
            )));
        }
    }

    let html = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| match &caps[1] {
        "name" => escape_html(&bio.name),
        "biography" => text_or_not_set(bio.biography.as_deref()),
        "description" => text_or_not_set(bio.description.as_deref()),
        "image" => image_markup(bio.image.as_deref(), &bio.name, policy),
        _ => unreachable!("regex only matches known placeholders"),
    });

    Ok(html.into_owned())
}

/// The escaped field value, or [`NOT_SET_MARKUP`] when absent or empty.
fn text_or_not_set(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => escape_html(text),
        _ => NOT_SET_MARKUP.to_string(),
    }
}

/// An `<img>` tag for the character's image, or the configured fallback.
fn image_markup(image: Option<&str>, name: &str, policy: ImagePolicy) -> String {
    match image {
        Some(url) if !url.is_empty() => format!(
            r#"<img src="{}" alt="{}" class="rounded img-fluid">"#,
            escape_html(url),
            escape_html(name)
        ),
        _ => match policy {
            ImagePolicy::Placeholder => NO_IMAGE_MARKUP.to_string(),
            ImagePolicy::Empty => String::new(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
