use std::collections::BTreeSet;

/// Canonical form used for every case-insensitive comparison
#[inline]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Normalized, de-duplicated set of values
pub fn normalized_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| normalize(value.as_ref()))
        .collect()
}

/// Case-insensitive membership test; an empty list never matches
#[inline]
pub fn contains_normalized(values: &[String], candidate: &str) -> bool {
    let candidate = normalize(candidate);
    values.iter().any(|value| normalize(value) == candidate)
}

/// Lookup key for region names: lower-cased, Spanish diacritics stripped,
/// typographic apostrophes folded to ASCII.
pub fn fold_region_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            '\u{2019}' | '\u{2018}' | '`' | '´' => '\'',
            other => other,
        })
        .collect()
}
