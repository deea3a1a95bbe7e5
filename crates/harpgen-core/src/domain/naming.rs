//! Case conversion and English inflection.
//!
//! Pure functions only. Every generated path and every render context value
//! is derived from these, so the same input always produces the same output.
//!
//! ## Word Boundaries
//!
//! | Input            | Words                 |
//! |------------------|-----------------------|
//! | `userProfile`    | `user`, `profile`     |
//! | `HTTPRequest`    | `http`, `request`     |
//! | `user_profile`   | `user`, `profile`     |
//! | `User Profile!`  | `user`, `profile`     |

use regex::Regex;
use std::sync::LazyLock;

// ── Case conversion ──────────────────────────────────────────────────────────

/// Split an identifier into lowercase words.
///
/// Any character that is not alphanumeric separates words. Inside a run of
/// alphanumerics a lowercase-to-uppercase transition starts a new word, and
/// so does the last capital of an acronym followed by a lowercase letter.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            // "myApp" → "my" + "App"
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// `user profile` → `userProfile`
pub fn to_camel(input: &str) -> String {
    split_words(input)
        .into_iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w } else { capitalize(&w) })
        .collect()
}

/// `user-profile` → `UserProfile`
pub fn to_pascal(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

/// `UserProfile` → `user-profile`
pub fn to_kebab(input: &str) -> String {
    split_words(input).join("-")
}

/// `UserProfile` → `user_profile`
pub fn to_snake(input: &str) -> String {
    split_words(input).join("_")
}

// ── Inflection ───────────────────────────────────────────────────────────────

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "moose",
    "deer",
    "news",
    "metadata",
];

/// `(singular, plural)`
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
];

type Rules = LazyLock<Vec<(Regex, &'static str)>>;

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(&format!("(?i){pattern}")).expect("inflection rule regex");
            (regex, *replacement)
        })
        .collect()
}

// First match wins.
static PLURAL_RULES: Rules = LazyLock::new(|| {
    compile(&[
        (r"(quiz)$", "${1}zes"),
        (r"^(ox)$", "${1}en"),
        (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        (r"(x|ch|ss|sh)$", "${1}es"),
        (r"([^aeiouy]|qu)y$", "${1}ies"),
        (r"(hive)$", "${1}s"),
        (r"([^f])fe$", "${1}ves"),
        (r"([lr])f$", "${1}ves"),
        (r"sis$", "ses"),
        (r"([ti])um$", "${1}a"),
        (r"(buffal|tomat|potat|her)o$", "${1}oes"),
        (r"(bu|mis|gas)s$", "${1}ses"),
        (r"(alias|status)$", "${1}es"),
        (r"(octop|vir)us$", "${1}i"),
        (r"(ax|test)is$", "${1}es"),
        (r"s$", "s"),
        (r"$", "s"),
    ])
});

// Rules that accept both forms (`(es)?`, `(us|i)`) leave singular words as
// they are.
static SINGULAR_RULES: Rules = LazyLock::new(|| {
    compile(&[
        (r"(quiz)zes$", "${1}"),
        (r"(matr)ices$", "${1}ix"),
        (r"(vert|ind)ices$", "${1}ex"),
        (r"^(ox)en$", "${1}"),
        (r"(alias|status)(?:es)?$", "${1}"),
        (r"(octop|vir)(?:us|i)$", "${1}us"),
        (r"(cris|ax|test)(?:es|is)$", "${1}is"),
        (r"(shoe)s$", "${1}"),
        (r"(o)es$", "${1}"),
        (r"(bus)(?:es)?$", "${1}"),
        (r"(x|ch|ss|sh)es$", "${1}"),
        (r"(m)ovies$", "${1}ovie"),
        (r"([^aeiouy]|qu)ies$", "${1}y"),
        (r"(curve|database)s$", "${1}"),
        (r"([lr])ves$", "${1}f"),
        (r"(tive|hive)s$", "${1}"),
        (r"(a)ves$", "${1}ve"),
        (r"([^fo])ves$", "${1}fe"),
        (r"(analy|ba|diagno|parenthe|progno|synop|the)(?:sis|ses)$", "${1}sis"),
        (r"([ti])a$", "${1}um"),
        (r"(ss|us|is|as)$", "${1}"),
        (r"s$", ""),
    ])
});

/// Keep the caller's leading capital when swapping a whole word.
fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

fn inflect(word: &str, rules: &[(Regex, &'static str)], to_plural: bool) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        let (from, to) = if to_plural {
            (singular, plural)
        } else {
            (plural, singular)
        };
        if lower == *from {
            return match_case(word, to);
        }
        // Already in the requested form.
        if lower == *to {
            return word.to_string();
        }
    }

    rules
        .iter()
        .find(|(regex, _)| regex.is_match(word))
        .map(|(regex, replacement)| regex.replace(word, *replacement).into_owned())
        .unwrap_or_else(|| word.to_string())
}

/// `invoice` → `invoices`, `category` → `categories`, `person` → `people`
pub fn pluralize(word: &str) -> String {
    inflect(word, &PLURAL_RULES, true)
}

/// `invoices` → `invoice`, `categories` → `category`, `people` → `person`
pub fn singularize(word: &str) -> String {
    inflect(word, &SINGULAR_RULES, false)
}

// ── NameForms ────────────────────────────────────────────────────────────────

/// Every casing of a single name segment, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms {
    raw: String,
    camel: String,
    pascal: String,
    kebab: String,
    snake: String,
    singular: String,
    plural: String,
}

impl NameForms {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let camel = to_camel(&raw);
        Self {
            pascal: to_pascal(&camel),
            kebab: to_kebab(&camel),
            snake: to_snake(&camel),
            singular: singularize(&camel),
            plural: pluralize(&camel),
            camel,
            raw,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn camel(&self) -> &str {
        &self.camel
    }

    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// `user-profiles` → `user-profile`, used for route file stems.
    pub fn singular_kebab(&self) -> String {
        singularize(&self.kebab)
    }

    /// Whether any usable word survived the split.
    pub fn is_empty(&self) -> bool {
        self.camel.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Case conversion ───────────────────────────────────────────────────

    #[test]
    fn splits_on_case_transitions_and_separators() {
        assert_eq!(split_words("userProfile"), vec!["user", "profile"]);
        assert_eq!(split_words("HTTPRequest"), vec!["http", "request"]);
        assert_eq!(split_words("user_profile-page"), vec!["user", "profile", "page"]);
        assert_eq!(split_words("  User Profile! "), vec!["user", "profile"]);
        assert!(split_words("--__").is_empty());
    }

    #[test]
    fn converts_between_casings() {
        assert_eq!(to_camel("user-profile"), "userProfile");
        assert_eq!(to_camel("UserProfile"), "userProfile");
        assert_eq!(to_pascal("user_profile"), "UserProfile");
        assert_eq!(to_kebab("userProfile"), "user-profile");
        assert_eq!(to_snake("UserProfile"), "user_profile");
    }

    #[test]
    fn kebab_of_camel_is_stable() {
        for input in ["Invoice", "invoice-items", "InvoiceItems", "invoice_items"] {
            let once = to_kebab(&to_camel(input));
            assert_eq!(to_kebab(&to_camel(&once)), once);
        }
    }

    // ── Inflection ────────────────────────────────────────────────────────

    #[test]
    fn pluralizes_regular_words() {
        assert_eq!(pluralize("invoice"), "invoices");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("userProfile"), "userProfiles");
    }

    #[test]
    fn singularizes_regular_words() {
        assert_eq!(singularize("invoices"), "invoice");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("user-profiles"), "user-profile");
        assert_eq!(singularize("invoice"), "invoice");
    }

    #[test]
    fn singular_words_ending_in_s_are_kept() {
        for word in ["status", "alias", "virus", "analysis", "bonus", "canvas", "bus"] {
            assert_eq!(singularize(word), word);
        }
        assert_eq!(singularize("Status"), "Status");
        assert_eq!(singularize("orderStatus"), "orderStatus");
    }

    #[test]
    fn singularizes_latin_and_greek_plurals() {
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("aliases"), "alias");
        assert_eq!(singularize("viri"), "virus");
        assert_eq!(singularize("analyses"), "analysis");
        assert_eq!(singularize("buses"), "bus");
        assert_eq!(singularize("waves"), "wave");
        assert_eq!(singularize("curves"), "curve");
    }

    #[test]
    fn handles_irregular_and_uncountable_words() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(singularize("children"), "child");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(pluralize("sheep"), "sheep");
        assert_eq!(singularize("news"), "news");
    }

    // ── NameForms ─────────────────────────────────────────────────────────

    #[test]
    fn name_forms_derive_every_casing() {
        let forms = NameForms::new("invoice-items");
        assert_eq!(forms.raw(), "invoice-items");
        assert_eq!(forms.camel(), "invoiceItems");
        assert_eq!(forms.pascal(), "InvoiceItems");
        assert_eq!(forms.kebab(), "invoice-items");
        assert_eq!(forms.snake(), "invoice_items");
        assert_eq!(forms.singular(), "invoiceItem");
        assert_eq!(forms.plural(), "invoiceItems");
        assert_eq!(forms.singular_kebab(), "invoice-item");
    }

    #[test]
    fn name_forms_keep_singular_status() {
        let forms = NameForms::new("status");
        assert_eq!(forms.singular(), "status");
        assert_eq!(forms.singular_kebab(), "status");
        assert_eq!(forms.plural(), "statuses");
    }

    #[test]
    fn name_forms_report_empty_names() {
        assert!(NameForms::new("//").is_empty());
        assert!(!NameForms::new("a").is_empty());
    }
}
