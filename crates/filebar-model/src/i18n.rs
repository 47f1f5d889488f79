//! Translation tables.
//!
//! Each locale ships as an embedded JSON object tree. Tables are
//! flattened to `prefix.key` strings on load, and a lookup that misses
//! returns the bare key so an untranslated label is still readable.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a translation table.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The table is not valid JSON.
    #[error("failed to parse locale table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A leaf of the table is not a string, or the root is not an object.
    #[error("locale entry {path:?} must be a string or an object")]
    InvalidEntry {
        /// Dotted path of the offending entry (empty for the root).
        path: String,
    },
}

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::En, Self::Zh];

    /// Short language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Embedded JSON table for this locale.
    const fn source(self) -> &'static str {
        match self {
            Self::En => include_str!("../locales/en.json"),
            Self::Zh => include_str!("../locales/zh.json"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A `(key_prefix, key)` pair naming one translated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    /// Namespace, e.g. `"fileManager"`.
    pub prefix: &'static str,
    /// Key within the namespace, e.g. `"uploadFile"`.
    pub key: &'static str,
}

impl TranslationKey {
    /// Create a new key.
    #[must_use]
    pub const fn new(prefix: &'static str, key: &'static str) -> Self {
        Self { prefix, key }
    }
}

/// Flattened translation table for one locale.
///
/// Cloning is cheap; the table is shared.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    table: Rc<HashMap<String, String>>,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && (Rc::ptr_eq(&self.table, &other.table) || self.table == other.table)
    }
}

impl Translator {
    /// Load the embedded table for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError`] if the embedded table is malformed.
    pub fn new(locale: Locale) -> Result<Self, I18nError> {
        Self::from_json(locale, locale.source())
    }

    /// Load a table from a JSON object tree.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Parse`] for invalid JSON and
    /// [`I18nError::InvalidEntry`] for non-string leaves or a non-object root.
    pub fn from_json(locale: Locale, json: &str) -> Result<Self, I18nError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(root) = value else {
            return Err(I18nError::InvalidEntry {
                path: String::new(),
            });
        };
        let mut table = HashMap::new();
        flatten("", &root, &mut table)?;
        Ok(Self {
            locale,
            table: Rc::new(table),
        })
    }

    /// A translator with no entries; every lookup returns its key.
    #[must_use]
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            table: Rc::new(HashMap::new()),
        }
    }

    /// The locale this table serves.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up `key` under `prefix`, falling back to `key` itself.
    #[must_use]
    pub fn translate(&self, prefix: &str, key: &str) -> String {
        self.table
            .get(&format!("{prefix}.{key}"))
            .map_or_else(|| key.to_owned(), Clone::clone)
    }

    /// A view of this table with a default key prefix.
    #[must_use]
    pub fn scoped(&self, prefix: &'static str) -> ScopedTranslator {
        ScopedTranslator {
            translator: self.clone(),
            prefix,
        }
    }
}

fn flatten(
    prefix: &str,
    object: &serde_json::Map<String, serde_json::Value>,
    out: &mut HashMap<String, String>,
) -> Result<(), I18nError> {
    for (name, value) in object {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            serde_json::Value::String(text) => {
                out.insert(path, text.clone());
            }
            serde_json::Value::Object(child) => flatten(&path, child, out)?,
            _ => return Err(I18nError::InvalidEntry { path }),
        }
    }
    Ok(())
}

/// A [`Translator`] bound to a default key prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedTranslator {
    translator: Translator,
    prefix: &'static str,
}

impl ScopedTranslator {
    /// Look up `key` under the default prefix.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator.translate(self.prefix, key)
    }

    /// Look up `key` under an explicit prefix, overriding the default.
    #[must_use]
    pub fn t_with(&self, key: &str, key_prefix: &str) -> String {
        self.translator.translate(key_prefix, key)
    }

    /// Look up a [`TranslationKey`], which carries its own prefix.
    #[must_use]
    pub fn key(&self, key: TranslationKey) -> String {
        self.t_with(key.key, key.prefix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_locale_loads() {
        for locale in Locale::ALL {
            let t = Translator::new(locale);
            assert!(t.is_ok(), "locale {locale} failed to load: {t:?}");
        }
    }

    #[test]
    fn embedded_locales_share_keys() {
        let en = Translator::new(Locale::En).unwrap();
        let zh = Translator::new(Locale::Zh).unwrap();
        let mut en_keys: Vec<_> = en.table.keys().collect();
        let mut zh_keys: Vec<_> = zh.table.keys().collect();
        en_keys.sort();
        zh_keys.sort();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn translate_nested_key() {
        let t = Translator::new(Locale::En).unwrap();
        assert_eq!(t.translate("fileManager", "uploadFile"), "Upload file");
        let scoped = t.scoped("knowledgeDetails");
        assert_eq!(scoped.key(TranslationKey::new("common", "move")), "Move");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let t = Translator::new(Locale::En).unwrap();
        assert_eq!(t.translate("common", "nonexistent"), "nonexistent");
        let empty = Translator::empty(Locale::Zh);
        assert_eq!(empty.translate("a", "b"), "b");
        assert_eq!(empty.locale(), Locale::Zh);
    }

    #[test]
    fn scoped_prefix_can_be_overridden() {
        let t = Translator::new(Locale::En).unwrap().scoped("knowledgeDetails");
        assert_eq!(t.t("bulk"), "Bulk");
        assert_eq!(t.t_with("delete", "common"), "Delete");
        // Keys from another namespace are not visible under the default prefix.
        assert_eq!(t.t("delete"), "delete");
    }

    #[test]
    fn non_string_leaf_is_rejected() {
        let err = Translator::from_json(Locale::En, r#"{"a":{"b":1}}"#).unwrap_err();
        assert!(
            matches!(err, I18nError::InvalidEntry { ref path } if path == "a.b"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = Translator::from_json(Locale::En, "[]").unwrap_err();
        assert!(matches!(err, I18nError::InvalidEntry { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = Translator::from_json(Locale::En, "{").unwrap_err();
        assert!(matches!(err, I18nError::Parse(_)));
    }
}
