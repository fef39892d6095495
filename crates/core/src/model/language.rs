use crate::model::ids::LanguageCode;

/// A vocabulary item shown in the dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleWord {
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
}

/// A language offered in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    code: LanguageCode,
    name: String,
    native_name: String,
    flag: String,
    speakers: String,
    spotlight: Option<String>,
    sample_words: Vec<SampleWord>,
}

impl Language {
    #[must_use]
    pub fn new(
        code: LanguageCode,
        name: impl Into<String>,
        native_name: impl Into<String>,
        flag: impl Into<String>,
        speakers: impl Into<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            native_name: native_name.into(),
            flag: flag.into(),
            speakers: speakers.into(),
            spotlight: None,
            sample_words: Vec::new(),
        }
    }

    /// Featured blurb shown when the language is selected in the picker.
    #[must_use]
    pub fn with_spotlight(mut self, spotlight: impl Into<String>) -> Self {
        self.spotlight = Some(spotlight.into());
        self
    }

    #[must_use]
    pub fn with_sample_words(mut self, words: Vec<SampleWord>) -> Self {
        self.sample_words = words;
        self
    }

    #[must_use]
    pub fn code(&self) -> &LanguageCode {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }

    #[must_use]
    pub fn speakers(&self) -> &str {
        &self.speakers
    }

    #[must_use]
    pub fn spotlight(&self) -> Option<&str> {
        self.spotlight.as_deref()
    }

    #[must_use]
    pub fn sample_words(&self) -> &[SampleWord] {
        &self.sample_words
    }
}
