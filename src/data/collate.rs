//! Name ordering for the roster. Approximates a browser's default `localeCompare`:
//! letters compare case- and accent-insensitively first, then accents, then case
//! (lowercase before uppercase), then raw code points so the order is total.
//! Keys are built from the canonical decomposition, so composed and decomposed
//! spellings of a name land together.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Base letters only: decomposed, marks dropped, lowercased.
fn primary_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match expand_letter(c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

/// Lowercased decomposition; accents still count here.
fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> Vec<u8> {
    s.nfd()
        .map(|c| if c.is_uppercase() { 1 } else { 0 })
        .collect()
}

/// Letters with no canonical decomposition that still sort with a base letter.
fn expand_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ł' | 'ŀ' => "l",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        _ => return None,
    };
    Some(base)
}
