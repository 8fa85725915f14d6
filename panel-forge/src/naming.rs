//! Name normalization and inflection helpers
//!
//! Turns arbitrary user input such as `billing/invoices` or `OwnerResource`
//! into the canonical singular base name a resource bundle is built from.

use inflector::Inflector;

/// Class-name suffix of a resource, and the fallback base name
pub const RESOURCE_SUFFIX: &str = "Resource";

/// Namespace separator used in generated code
pub const NAMESPACE_SEPARATOR: char = '\\';

const fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Normalize a user-supplied resource name into a singular base name
///
/// Never fails. Empty or separator-only input yields `"Resource"`.
///
/// # Examples
///
/// ```
/// use panel_forge::naming::normalize_resource_name;
///
/// assert_eq!(normalize_resource_name("sales/owner"), "Owner");
/// assert_eq!(normalize_resource_name("OwnerResource"), "Owner");
/// assert_eq!(normalize_resource_name("blog_posts"), "BlogPost");
/// assert_eq!(normalize_resource_name(" / "), "Resource");
/// ```
#[must_use]
pub fn normalize_resource_name(input: &str) -> String {
    let trimmed = input.trim_matches(|c: char| c.is_whitespace() || is_path_separator(c));
    let namespaced = trimmed.replace('/', "\\");
    let last_segment = namespaced
        .rsplit(NAMESPACE_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim();

    let studly = studly_case(last_segment);
    let stripped = studly.strip_suffix(RESOURCE_SUFFIX).unwrap_or(&studly);
    let base = if stripped.is_empty() {
        RESOURCE_SUFFIX
    } else {
        stripped
    };

    singularize(base)
}

/// Convert to `StudlyCase` by upper-casing the first letter of every word
///
/// Words are separated by `-`, `_` or whitespace. Letters inside a word keep
/// their case, so `HTTPRequest` stays as is.
///
/// ```
/// use panel_forge::naming::studly_case;
///
/// assert_eq!(studly_case("user_profile"), "UserProfile");
/// assert_eq!(studly_case("order-line item"), "OrderLineItem");
/// assert_eq!(studly_case("HTTPRequest"), "HTTPRequest");
/// ```
#[must_use]
pub fn studly_case(input: &str) -> String {
    input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(upper_first)
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Irregular singular/plural pairs, checked before Inflector's rules
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("criterion", "criteria"),
    ("alias", "aliases"),
    ("status", "statuses"),
    ("campus", "campuses"),
    ("bus", "buses"),
    ("bonus", "bonuses"),
    ("census", "censuses"),
    ("nexus", "nexuses"),
    ("virus", "viruses"),
    ("prospectus", "prospectuses"),
    ("syllabus", "syllabuses"),
    ("apparatus", "apparatuses"),
];

/// Words with a single form
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "equipment",
    "feedback",
    "fish",
    "hardware",
    "information",
    "knowledge",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "traffic",
];

/// Pluralize a word, keeping the casing of the original
///
/// ```
/// use panel_forge::naming::pluralize;
///
/// assert_eq!(pluralize("Invoice"), "Invoices");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("SalesOwner"), "SalesOwners");
/// assert_eq!(pluralize("SalesPerson"), "SalesPeople");
/// ```
#[must_use]
pub fn pluralize(word: &str) -> String {
    inflect(word, true)
}

/// Singularize a word, keeping the casing of the original
///
/// ```
/// use panel_forge::naming::singularize;
///
/// assert_eq!(singularize("Invoices"), "Invoice");
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("Owner"), "Owner");
/// assert_eq!(singularize("Campus"), "Campus");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    inflect(word, false)
}

fn inflect(word: &str, plural: bool) -> String {
    if word.is_empty() {
        return String::new();
    }

    // Irregular forms are matched on the last StudlyCase word only, so
    // `SalesPerson` pluralizes but `Human` is left to the regular rules.
    let (head, last) = split_last_word(word);
    if let Some(form) = irregular_form(&last.to_lowercase(), plural) {
        return format!("{head}{}", match_case(last, &form));
    }

    let lower = word.to_lowercase();
    let inflected = if plural {
        lower.to_plural()
    } else {
        lower.to_singular()
    };
    if inflected.is_empty() {
        return word.to_string();
    }
    match_case(word, &inflected)
}

fn irregular_form(lower: &str, plural: bool) -> Option<String> {
    if UNCOUNTABLE.contains(&lower) {
        return Some(lower.to_string());
    }

    IRREGULAR
        .iter()
        .find(|(singular, plural_form)| lower == *singular || lower == *plural_form)
        .map(|(singular, plural_form)| {
            if plural { plural_form } else { singular }.to_string()
        })
}

/// Split `SalesPerson` into `("Sales", "Person")`; words without an inner
/// word boundary come back whole
fn split_last_word(word: &str) -> (&str, &str) {
    let boundary = word
        .char_indices()
        .zip(word.chars().skip(1))
        .filter(|((_, current), next)| current.is_lowercase() && next.is_uppercase())
        .map(|((index, current), _)| index + current.len_utf8())
        .last();

    boundary.map_or(("", word), |index| word.split_at(index))
}

/// Re-apply the casing of `original` to the prefix it shares with `inflected`
fn match_case(original: &str, inflected: &str) -> String {
    let shared = original
        .chars()
        .zip(inflected.chars())
        .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
        .count();

    original
        .chars()
        .take(shared)
        .chain(inflected.chars().skip(shared))
        .collect()
}

/// Last segment of a namespaced or path-like name
///
/// ```
/// use panel_forge::naming::class_basename;
///
/// assert_eq!(class_basename("App\\Models\\Invoice"), "Invoice");
/// assert_eq!(class_basename("billing/invoice"), "invoice");
/// assert_eq!(class_basename("Invoice"), "Invoice");
/// ```
#[must_use]
pub fn class_basename(name: &str) -> &str {
    name.trim_matches(is_path_separator)
        .rsplit(is_path_separator)
        .next()
        .unwrap_or_default()
}

/// Human readable label, used for navigation labels in generated code
///
/// ```
/// use panel_forge::naming::to_title;
///
/// assert_eq!(to_title("SalesOwner"), "Sales Owner");
/// ```
#[must_use]
pub fn to_title(name: &str) -> String {
    name.to_title_case()
}
