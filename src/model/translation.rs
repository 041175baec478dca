use std::collections::HashMap;

/// Fallback language for stored translatable text.
pub const DEFAULT_LANG: &str = "en";

/// Translatable stored text.
///
/// Catalog fields (service names, notification templates) may hold either
/// a plain string or a JSON object mapping language codes to strings.
/// Parsing happens once at the read boundary; the core never inspects
/// translations while making booking decisions.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalizedText {
    raw: String,
    translations: Option<HashMap<String, String>>,
}

impl LocalizedText {
    /// Decodes a stored field. Anything that is not a JSON object of
    /// strings is treated as untranslated plain text.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let translations = serde_json::from_str::<HashMap<String, String>>(&raw).ok();
        Self { raw, translations }
    }

    /// Resolves the text for a language, falling back to the default
    /// language and then to the raw stored value.
    pub fn resolve(&self, lang: &str) -> &str {
        match &self.translations {
            Some(map) => map
                .get(lang)
                .or_else(|| map.get(DEFAULT_LANG))
                .map(String::as_str)
                .unwrap_or(&self.raw),
            None => &self.raw,
        }
    }
}
