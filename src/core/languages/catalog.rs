// ─── Language Catalog ───
// Static table of every language code the recognition engine accepts,
// mapped to its display name. Kept in code rather than a data file so
// lookups never depend on install-time assets.

use super::model::LanguageItem;

/// Supported language codes and display names.
///
/// Entries follow the upstream tessdata repository naming, including
/// the non-language detection modules (`equ`, `osd`). Declaration
/// order is unspecified; accessors sort by display name.
const LANGUAGES: &[(&str, &str)] = &[
    ("afr", "Afrikaans"),
    ("amh", "Amharic"),
    ("ara", "Arabic"),
    ("asm", "Assamese"),
    ("aze", "Azerbaijani"),
    ("aze_cyrl", "Azerbaijani - Cyrilic"),
    ("bel", "Belarusian"),
    ("ben", "Bengali"),
    ("bod", "Tibetan"),
    ("bos", "Bosnian"),
    ("bre", "Breton"),
    ("bul", "Bulgarian"),
    ("cat", "Catalan; Valencian"),
    ("ceb", "Cebuano"),
    ("ces", "Czech"),
    ("chi_sim", "Chinese - Simplified"),
    ("chi_tra", "Chinese - Traditional"),
    ("chr", "Cherokee"),
    ("cos", "Corsican"),
    ("cym", "Welsh"),
    ("dan", "Danish"),
    ("deu", "German"),
    ("dzo", "Dzongkha"),
    ("ell", "Greek, Modern (1453-)"),
    ("eng", "English"),
    ("enm", "English, Middle (1100-1500)"),
    ("epo", "Esperanto"),
    ("equ", "Math / equation detection module"),
    ("est", "Estonian"),
    ("eus", "Basque"),
    ("fao", "Faroese"),
    ("fas", "Persian"),
    ("fil", "Filipino (old - Tagalog)"),
    ("fin", "Finnish"),
    ("fra", "French"),
    ("frk", "German - Fraktur"),
    ("frm", "French, Middle (ca.1400-1600)"),
    ("fry", "Western Frisian"),
    ("gla", "Scottish Gaelic"),
    ("gle", "Irish"),
    ("glg", "Galician"),
    ("grc", "Greek, Ancient (to 1453) (contrib)"),
    ("guj", "Gujarati"),
    ("hat", "Haitian; Haitian Creole"),
    ("heb", "Hebrew"),
    ("hin", "Hindi"),
    ("hrv", "Croatian"),
    ("hun", "Hungarian"),
    ("hye", "Armenian"),
    ("iku", "Inuktitut"),
    ("ind", "Indonesian"),
    ("isl", "Icelandic"),
    ("ita", "Italian"),
    ("ita_old", "Italian - Old"),
    ("jav", "Javanese"),
    ("jpn", "Japanese"),
    ("jpn_vert", "Japanese (vertical)"),
    ("kan", "Kannada"),
    ("kat", "Georgian"),
    ("kat_old", "Georgian - Old"),
    ("kaz", "Kazakh"),
    ("khm", "Central Khmer"),
    ("kir", "Kirghiz; Kyrgyz"),
    ("kmr", "Kurmanji (Kurdish - Latin Script)"),
    ("kor", "Korean"),
    ("kor_vert", "Korean (vertical)"),
    ("lao", "Lao"),
    ("lat", "Latin"),
    ("lav", "Latvian"),
    ("lit", "Lithuanian"),
    ("ltz", "Luxembourgish"),
    ("mal", "Malayalam"),
    ("mar", "Marathi"),
    ("mkd", "Macedonian"),
    ("mlt", "Maltese"),
    ("mon", "Mongolian"),
    ("mri", "Maori"),
    ("msa", "Malay"),
    ("mya", "Burmese"),
    ("nep", "Nepali"),
    ("nld", "Dutch; Flemish"),
    ("nor", "Norwegian"),
    ("oci", "Occitan (post 1500)"),
    ("ori", "Oriya"),
    ("osd", "Orientation and script detection module"),
    ("pan", "Panjabi; Punjabi"),
    ("pol", "Polish"),
    ("por", "Portuguese"),
    ("pus", "Pushto; Pashto"),
    ("que", "Quechua"),
    ("ron", "Romanian; Moldavian; Moldovan"),
    ("rus", "Russian"),
    ("san", "Sanskrit"),
    ("sin", "Sinhala; Sinhalese"),
    ("slk", "Slovak"),
    ("slv", "Slovenian"),
    ("snd", "Sindhi"),
    ("spa", "Spanish; Castilian"),
    ("spa_old", "Spanish; Castilian - Old"),
    ("sqi", "Albanian"),
    ("srp", "Serbian"),
    ("srp_latn", "Serbian - Latin"),
    ("sun", "Sundanese"),
    ("swa", "Swahili"),
    ("swe", "Swedish"),
    ("syr", "Syriac"),
    ("tam", "Tamil"),
    ("tat", "Tatar"),
    ("tel", "Telugu"),
    ("tgk", "Tajik"),
    ("tha", "Thai"),
    ("tir", "Tigrinya"),
    ("ton", "Tonga"),
    ("tur", "Turkish"),
    ("uig", "Uighur; Uyghur"),
    ("ukr", "Ukrainian"),
    ("urd", "Urdu"),
    ("uzb", "Uzbek"),
    ("uzb_cyrl", "Uzbek - Cyrilic"),
    ("vie", "Vietnamese"),
    ("yid", "Yiddish"),
    ("yor", "Yoruba"),
];

/// Look up the display name for a code.
pub fn display_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Reverse lookup: find the code for a display name.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(c, _)| *c)
}

pub fn is_supported(code: &str) -> bool {
    display_name(code).is_some()
}

/// All supported codes, sorted by display name.
pub fn available_codes() -> Vec<&'static str> {
    let mut entries: Vec<&(&str, &str)> = LANGUAGES.iter().collect();
    entries.sort_by_key(|(_, name)| *name);
    entries.iter().map(|(code, _)| *code).collect()
}

/// All display names, sorted.
pub fn available_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = LANGUAGES.iter().map(|(_, name)| *name).collect();
    names.sort_unstable();
    names
}

/// Build a `LanguageItem` for a code, if it is in the catalog.
pub fn item(code: &str) -> Option<LanguageItem> {
    display_name(code).map(|name| LanguageItem::new(code, name))
}

/// All catalog entries as items, sorted by display name.
pub fn all_items() -> Vec<LanguageItem> {
    let mut items: Vec<LanguageItem> = LANGUAGES
        .iter()
        .map(|(code, name)| LanguageItem::new(*code, *name))
        .collect();
    items.sort_by(|a, b| a.title.cmp(&b.title));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        assert_eq!(display_name("eng"), Some("English"));
        assert_eq!(display_name("chi_sim"), Some("Chinese - Simplified"));
        assert_eq!(display_name("xyz"), None);
    }

    #[test]
    fn reverse_lookup_by_name() {
        assert_eq!(code_for_name("English"), Some("eng"));
        assert_eq!(code_for_name("German - Fraktur"), Some("frk"));
        assert_eq!(code_for_name("Klingon"), None);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = LANGUAGES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGES.len());
    }

    #[test]
    fn available_codes_sorted_by_display_name() {
        let codes = available_codes();
        assert_eq!(codes.len(), LANGUAGES.len());
        // "Afrikaans" sorts first, "Yoruba" last
        assert_eq!(codes.first(), Some(&"afr"));
        assert_eq!(codes.last(), Some(&"yor"));

        let names: Vec<&str> = codes.iter().map(|c| display_name(c).unwrap()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn item_carries_code_and_title() {
        let item = item("deu").unwrap();
        assert_eq!(item.code, "deu");
        assert_eq!(item.title, "German");
        assert!(super::item("not-a-code").is_none());
    }

    #[test]
    fn detection_modules_are_listed() {
        assert!(is_supported("osd"));
        assert!(is_supported("equ"));
    }
}
