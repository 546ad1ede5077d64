use std::{env, str::FromStr};

use platewise_shared::Language;

/// Environment variables consulted for the system locale, most specific first.
const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Pick the best supported language for an ordered list of locale tags.
///
/// An exact match on any tag wins over a base-language match (`de` beats
/// `fr-CA` → `fr`), and English is used when nothing matches.
pub fn detect_language<I, S>(preferred: I) -> Language
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tags = preferred
        .into_iter()
        .map(|tag| normalize_tag(tag.as_ref()))
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>();

    let exact = tags.iter().find_map(|tag| Language::from_str(tag).ok());
    if let Some(language) = exact {
        return language;
    }

    let base = tags.iter().find_map(|tag| {
        let (base, _) = tag.split_once('-').unwrap_or((tag.as_str(), ""));
        Language::from_str(base).ok()
    });

    base.unwrap_or_default()
}

/// Parse an `Accept-Language` header into tags ordered by quality.
///
/// Wildcards and tags with `q=0` (or an unparsable weight) are dropped.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut weighted = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = pieces
                .find_map(|param| param.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);

            (quality > 0.0).then(|| (tag.to_owned(), quality))
        })
        .collect::<Vec<_>>();

    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// Locale tags from POSIX locale variables, via `lookup`.
pub fn languages_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .flat_map(|value| {
            value
                .split(':')
                .map(|locale| locale.trim().to_owned())
                .collect::<Vec<_>>()
        })
        .filter(|locale| !locale.is_empty() && locale != "C" && locale != "POSIX")
        .collect()
}

/// Locale tags from the process environment.
pub fn languages_from_env() -> Vec<String> {
    languages_from_vars(|name| env::var(name).ok())
}

/// Language of the host system, `en` when undetermined.
pub fn detect_system_language() -> Language {
    let tags = languages_from_env();
    let language = detect_language(&tags);

    tracing::debug!(?tags, %language, "detected system language");

    language
}

/// `de_DE.UTF-8@euro` → `de-de`
fn normalize_tag(tag: &str) -> String {
    let tag = tag.split(['.', '@']).next().unwrap_or_default();

    tag.trim().replace('_', "-").to_lowercase()
}
