use std::sync::Arc;

use content::{ContentError, LanguageRepository};
use lingo_core::model::{Language, LanguageCode};

use crate::error::CatalogError;

/// Languages offered in the picker.
#[derive(Clone)]
pub struct CatalogService {
    languages: Arc<dyn LanguageRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(languages: Arc<dyn LanguageRepository>) -> Self {
        Self { languages }
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Content` if the content source fails.
    pub async fn list_languages(&self) -> Result<Vec<Language>, CatalogError> {
        Ok(self.languages.list_languages().await?)
    }

    /// Look a language up by its route key.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LanguageNotFound` for unknown or malformed codes.
    pub async fn get_language(&self, key: &str) -> Result<Language, CatalogError> {
        let code = LanguageCode::new(key).map_err(|_| CatalogError::LanguageNotFound(key.into()))?;
        match self.languages.get_language(&code).await {
            Ok(language) => Ok(language),
            Err(ContentError::NotFound) => Err(CatalogError::LanguageNotFound(key.into())),
            Err(err) => Err(CatalogError::Content(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::InMemoryRepository;

    #[tokio::test]
    async fn unknown_and_malformed_codes_are_not_found() {
        let repo = InMemoryRepository::new();
        repo.upsert_language(&Language::new(
            LanguageCode::new("oromo").unwrap(),
            "Oromo",
            "Afaan Oromoo",
            "",
            "",
        ))
        .await
        .unwrap();
        let service = CatalogService::new(Arc::new(repo));

        assert_eq!(service.get_language("oromo").await.unwrap().name(), "Oromo");
        assert!(matches!(
            service.get_language("klingon").await,
            Err(CatalogError::LanguageNotFound(_))
        ));
        assert!(matches!(
            service.get_language("Oromo!").await,
            Err(CatalogError::LanguageNotFound(_))
        ));
        assert_eq!(service.list_languages().await.unwrap().len(), 1);
    }
}
