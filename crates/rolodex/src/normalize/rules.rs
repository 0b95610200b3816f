//! Canonicalizers for each field role.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::FieldRole;

use super::phone;

/// Validates and canonicalizes one non-blank, trimmed value.
///
/// On failure returns the rule message; the caller attaches the field name.
pub type Canonicalizer = fn(&str) -> Result<String, &'static str>;

pub(crate) const NAME_MESSAGE: &str =
    "must contain letters only (spaces, hyphens, apostrophes allowed)";
pub(crate) const EMAIL_MESSAGE: &str = "doesn't look like a valid email";

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(?:[ '\-][A-Za-z]+)*$").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

impl FieldRole {
    /// The canonicalizer applied to values of this role.
    pub fn canonicalizer(self) -> Canonicalizer {
        match self {
            FieldRole::Name => name,
            FieldRole::Email => email,
            FieldRole::Phone => phone::canonicalize,
            FieldRole::Passthrough => passthrough,
        }
    }
}

/// Letters with single space, hyphen or apostrophe separators, title-cased.
pub fn name(value: &str) -> Result<String, &'static str> {
    if !NAME_PATTERN.is_match(value) {
        return Err(NAME_MESSAGE);
    }
    Ok(title_case(value))
}

/// Lower-cased `local@domain.tld`.
pub fn email(value: &str) -> Result<String, &'static str> {
    let lowered = value.to_lowercase();
    if !EMAIL_PATTERN.is_match(&lowered) {
        return Err(EMAIL_MESSAGE);
    }
    Ok(lowered)
}

/// Kept as given.
pub fn passthrough(value: &str) -> Result<String, &'static str> {
    Ok(value.to_string())
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_title_case() {
        assert_eq!(name("o'brien").unwrap(), "O'Brien");
        assert_eq!(name("mary-jane").unwrap(), "Mary-Jane");
        assert_eq!(name("VAN DER BERG").unwrap(), "Van Der Berg");
        assert_eq!(name("McDonald").unwrap(), "Mcdonald");
    }

    #[test]
    fn test_name_rejects_digits_and_punctuation() {
        assert_eq!(name("R2D2"), Err(NAME_MESSAGE));
        assert_eq!(name("Smith, John"), Err(NAME_MESSAGE));
        assert_eq!(name("Anne  Marie"), Err(NAME_MESSAGE));
        assert_eq!(name("-Anne"), Err(NAME_MESSAGE));
        assert_eq!(name("José"), Err(NAME_MESSAGE));
    }

    #[test]
    fn test_email() {
        assert_eq!(email("Jane.Doe@Example.COM").unwrap(), "jane.doe@example.com");
        assert_eq!(email("Not An Email"), Err(EMAIL_MESSAGE));
        assert_eq!(email("jane@localhost"), Err(EMAIL_MESSAGE));
        assert_eq!(email("jane@@example.com"), Err(EMAIL_MESSAGE));
    }

    #[test]
    fn test_role_dispatch() {
        assert_eq!((FieldRole::Name.canonicalizer())("acme corp").unwrap(), "Acme Corp");
        assert_eq!((FieldRole::Phone.canonicalizer())("131450").unwrap(), "+61131450");
        assert_eq!(
            (FieldRole::Passthrough.canonicalizer())("ID-0042 / legacy").unwrap(),
            "ID-0042 / legacy"
        );
    }
}
