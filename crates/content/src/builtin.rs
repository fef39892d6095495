//! Sample catalog bundled with the app.

use crate::pack::ContentPack;
use crate::repository::{Content, ContentError};

const BUILTIN_PACK: &str = include_str!("../data/builtin.json");

/// # Errors
///
/// Returns `ContentError::Serialization` if the bundled JSON is malformed.
pub fn builtin_pack() -> Result<ContentPack, ContentError> {
    ContentPack::from_json_str(BUILTIN_PACK)
}

/// In-memory content seeded with the bundled catalog.
///
/// # Errors
///
/// Returns `ContentError` if the bundled pack fails to parse or validate.
pub async fn load_builtin() -> Result<Content, ContentError> {
    Content::from_pack(&builtin_pack()?).await
}

impl Content {
    /// # Errors
    ///
    /// Returns `ContentError` if the bundled pack fails to parse or validate.
    pub async fn builtin() -> Result<Self, ContentError> {
        load_builtin().await
    }
}
