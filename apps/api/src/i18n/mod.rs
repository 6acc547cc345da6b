//! Translation catalogs served to clients as static string tables.
//!
//! Clients look up UI strings and the `message_key` values returned by
//! mutation endpoints against these tables, so the server never formats
//! user-facing text in a particular language.

use std::collections::BTreeMap;

pub mod handlers;
pub mod tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Es,
    Hi,
    Ar,
    Pt,
}

impl Lang {
    pub const ALL: [Lang; 5] = [Lang::En, Lang::Es, Lang::Hi, Lang::Ar, Lang::Pt];

    pub fn parse(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "hi" => Some(Lang::Hi),
            "ar" => Some(Lang::Ar),
            "pt" => Some(Lang::Pt),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Hi => "hi",
            Lang::Ar => "ar",
            Lang::Pt => "pt",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Spanish",
            Lang::Hi => "Hindi",
            Lang::Ar => "Arabic",
            Lang::Pt => "Portuguese",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Hi => "हिन्दी",
            Lang::Ar => "العربية",
            Lang::Pt => "Português",
        }
    }

    /// Text direction, for clients that flip their layout.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            _ => "ltr",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::En => tables::EN,
            Lang::Es => tables::ES,
            Lang::Hi => tables::HI,
            Lang::Ar => tables::AR,
            Lang::Pt => tables::PT,
        }
    }
}

/// The catalog for `lang`, merged over the English fallback so every key is
/// always present.
pub fn catalog(lang: Lang) -> BTreeMap<&'static str, &'static str> {
    let mut merged: BTreeMap<&'static str, &'static str> = tables::EN.iter().copied().collect();
    if lang != Lang::En {
        for (key, value) in lang.table() {
            merged.insert(key, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_and_unique() {
        for lang in Lang::ALL {
            let table = lang.table();
            for pair in table.windows(2) {
                assert!(
                    pair[0].0 < pair[1].0,
                    "{} table out of order near {}",
                    lang.code(),
                    pair[1].0
                );
            }
        }
    }

    #[test]
    fn test_every_translated_key_exists_in_english() {
        for lang in Lang::ALL {
            for (key, _) in lang.table() {
                assert!(
                    tables::EN.iter().any(|(k, _)| k == key),
                    "{} has key {key} missing from the English catalog",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn test_catalog_merges_over_english() {
        let es = catalog(Lang::Es);
        assert_eq!(es.get("auth.signIn"), Some(&"Iniciar sesión"));
        // Not yet translated, falls back to English.
        assert_eq!(es.get("jobs.applyNow"), Some(&"Apply Now"));
        assert_eq!(es.len(), tables::EN.len());
    }

    #[test]
    fn test_english_catalog_is_identity() {
        let en = catalog(Lang::En);
        assert_eq!(en.len(), tables::EN.len());
        assert_eq!(en.get("jobs.posted"), Some(&"Job posted successfully"));
    }

    #[test]
    fn test_lang_parse_round_trips() {
        for lang in Lang::ALL {
            assert_eq!(Lang::parse(lang.code()), Some(lang));
        }
        assert_eq!(Lang::parse("ES"), Some(Lang::Es));
        assert_eq!(Lang::parse("fr"), None);
        assert_eq!(Lang::parse(""), None);
    }

    #[test]
    fn test_arabic_is_right_to_left() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Hi.dir(), "ltr");
    }
}
