use lingo_core::model::Language;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageCardVm {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
    pub speakers: String,
    pub spotlight: Option<String>,
}

impl From<&Language> for LanguageCardVm {
    fn from(language: &Language) -> Self {
        Self {
            code: language.code().to_string(),
            name: language.name().to_string(),
            native_name: language.native_name().to_string(),
            flag: language.flag().to_string(),
            speakers: language.speakers().to_string(),
            spotlight: language.spotlight().map(str::to_string),
        }
    }
}

impl LanguageCardVm {
    #[must_use]
    pub fn spotlight_title(&self) -> String {
        format!("🌟 Featured: {} Language", self.name)
    }
}

#[must_use]
pub fn map_language_cards(languages: &[Language]) -> Vec<LanguageCardVm> {
    languages.iter().map(LanguageCardVm::from).collect()
}
