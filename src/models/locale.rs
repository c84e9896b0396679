use log::warn;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::models::errors::{ErrorKind, ExtractorError};
use crate::Result;

const ROW_PATTERN: &str =
    r"^(?P<code>[a-z_A-Z]{5})(?P<lang>[a-zA-Z]+) \((?P<country>[a-z A-Z]+)\)$";

// Locales the documentation still lists but Data Dragon no longer serves.
const STALE_LOCALES: &[&str] = &["ms_MY"];

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub code: String,
    pub language: String,
    pub country: String,
}

impl LocaleEntry {
    /// Key used in `languages.json`.
    pub fn key(&self) -> String {
        self.country.to_lowercase()
    }

    pub fn file_stem(&self) -> String {
        self.country.replace(' ', "_").to_lowercase()
    }
}

/// `languages.json`: lowercase country -> locale, in documentation order.
#[derive(Debug, Default)]
pub struct LocaleFile(Vec<LocaleEntry>);

impl LocaleFile {
    /// One entry per country key; a later row for the same country replaces
    /// the earlier one in place.
    pub fn new(locales: Vec<LocaleEntry>) -> Self {
        let mut entries: Vec<LocaleEntry> = Vec::with_capacity(locales.len());

        for locale in locales {
            match entries.iter_mut().find(|e| e.key() == locale.key()) {
                Some(entry) => {
                    warn!(
                        "Locale {} replaces {} for {}.",
                        locale.code, entry.code, entry.country
                    );
                    *entry = locale;
                }
                None => entries.push(locale),
            }
        }

        LocaleFile(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for LocaleFile {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|locale| (locale.key(), locale)))
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ExtractorError::upstream(format!("Invalid selector {}: {:?}", css, e)))
}

fn flatten_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// Reads the locale table out of the Riot developer documentation page.
pub fn parse_locale_table(html: &str) -> Result<Vec<LocaleEntry>> {
    let document = Html::parse_document(html);

    let table_selector = selector("table")?;
    let header_selector = selector("th")?;
    let row_selector = selector("tr")?;

    let row_re = Regex::new(ROW_PATTERN)?;

    let table = document
        .select(&table_selector)
        .find(|table| {
            let headers = table
                .select(&header_selector)
                .map(|th| flatten_text(th).to_lowercase())
                .collect::<Vec<_>>();

            headers.iter().any(|h| h == "code") && headers.iter().any(|h| h == "language")
        })
        .ok_or_else(|| {
            ExtractorError::new(
                ErrorKind::LocaleTableNotFound,
                "No table with both a code and a language column",
            )
        })?;

    let locales = table
        .select(&row_selector)
        .skip(1)
        .map(flatten_text)
        .filter(|row| !STALE_LOCALES.iter().any(|stale| row.contains(stale)))
        .filter_map(|row| match row_re.captures(&row) {
            Some(c) => Some(LocaleEntry {
                code: c["code"].to_owned(),
                language: c["lang"].to_owned(),
                country: c["country"].to_owned(),
            }),
            None => {
                warn!("Skipping unrecognised locale row: {}", row);
                None
            }
        })
        .collect();

    Ok(locales)
}

pub fn find_locale<'a>(locales: &'a [LocaleEntry], country: &str) -> Result<&'a LocaleEntry> {
    let key = country.to_lowercase();

    locales
        .iter()
        .find(|l| l.key() == key)
        .ok_or_else(|| {
            ExtractorError::new(
                ErrorKind::LocaleNotFound,
                format!("No locale for country {}", country),
            )
        })
}


#[cfg(test)]
mod tests {
    use super::fixtures::LANGUAGES_PAGE;
    use super::*;

    #[test]
    fn parses_the_code_language_table() {
        let locales = parse_locale_table(LANGUAGES_PAGE).unwrap();

        let codes = locales.iter().map(|l| l.code.as_str()).collect::<Vec<_>>();

        assert_eq!(codes, vec!["en_US", "ko_KR", "zh_CN"]);
        assert_eq!(
            locales[0],
            LocaleEntry {
                code: "en_US".to_owned(),
                language: "English".to_owned(),
                country: "United States".to_owned(),
            }
        );
    }

    #[test]
    fn missing_table_is_reported() {
        let html = "<table><tr><th>Region</th></tr><tr><td>KR</td></tr></table>";

        let err = parse_locale_table(html).unwrap_err();

        assert_eq!(err.kind, ErrorKind::LocaleTableNotFound);
    }

    #[test]
    fn locale_file_is_keyed_by_lowercase_country() {
        let locales = parse_locale_table(LANGUAGES_PAGE).unwrap();

        let value = serde_json::to_value(LocaleFile::new(locales)).unwrap();

        assert_eq!(value["united states"]["code"], "en_US");
        assert_eq!(value["korea"]["language"], "Korean");
        assert_eq!(value["korea"]["country"], "Korea");
    }

    #[test]
    fn repeated_country_keeps_the_last_row() {
        let locale = |code: &str, country: &str| LocaleEntry {
            code: code.to_owned(),
            language: "Spanish".to_owned(),
            country: country.to_owned(),
        };

        let file = LocaleFile::new(vec![
            locale("es_ES", "Spain"),
            locale("ko_KR", "Korea"),
            locale("ca_ES", "spain"),
        ]);

        assert_eq!(file.len(), 2);

        let text = serde_json::to_string(&file).unwrap();
        assert_eq!(text.matches("\"spain\"").count(), 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let keys = value.as_object().unwrap().keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["spain", "korea"]);
        assert_eq!(value["spain"]["code"], "ca_ES");
    }

    #[test]
    fn country_lookup_ignores_case() {
        let locales = parse_locale_table(LANGUAGES_PAGE).unwrap();

        assert_eq!(find_locale(&locales, "KOREA").unwrap().code, "ko_KR");
        assert_eq!(
            find_locale(&locales, "united states").unwrap().file_stem(),
            "united_states"
        );

        let err = find_locale(&locales, "Malaysia").unwrap_err();
        assert_eq!(err.kind, ErrorKind::LocaleNotFound);
    }
}
