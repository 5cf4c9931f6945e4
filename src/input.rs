// Input layer: validated prompts built on `dialoguer`. Every prompt loops
// until the input matches its grammar; the `_opt` variants are for update
// flows, where a blank answer means "keep the old value" and maps to `None`.

use std::sync::LazyLock;

use anyhow::Result;
use dialoguer::{Input, Password, Select};
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::models::Reason;

// Nine digits, whitespace allowed anywhere between them.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*[0-9]\s*){9}$").unwrap());

// local@domain.tld with a two-letter-minimum extension. Case-sensitive.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

const PHONE_ERR: &str = "Format not valid, please enter the phone number again";
const EMAIL_ERR: &str = "Format not valid, please enter the email again";
const NUMBER_ERR: &str = "Format not valid, please enter the number again";
const EMPTY_ERR: &str = "Must introduce at least 1 character";
const OPTION_ERR: &str = "The option typed is not valid";

/// Strip a phone number down to its canonical nine digits, or reject it.
pub fn normalize_phone(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if !PHONE_RE.is_match(trimmed) {
        return None;
    }
    Some(trimmed.chars().filter(char::is_ascii_digit).collect())
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input.trim())
}

/// Parse a resource identifier: one-or-more ASCII digits, no sign.
pub fn parse_id(input: &str) -> Option<i64> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// First letter decides: `y`/`Y` is a yes, `n`/`N` a no, anything else is
/// undecided and the caller asks again.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().chars().next() {
        Some('y' | 'Y') => Some(true),
        Some('n' | 'N') => Some(false),
        _ => None,
    }
}

/// SHA-256 digest of the plaintext as 64 lowercase hex characters. This is
/// the only form in which a password leaves the input layer.
pub fn hash_password(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn prompt_string(prompt: &str) -> Result<String> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        let value = raw.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
        eprintln!("{EMPTY_ERR}");
    }
}

pub fn prompt_string_opt(prompt: &str) -> Result<Option<String>> {
    let raw: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = raw.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

pub fn prompt_phone(prompt: &str) -> Result<String> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        if let Some(digits) = normalize_phone(&raw) {
            return Ok(digits);
        }
        eprintln!("{PHONE_ERR}");
    }
}

pub fn prompt_phone_opt(prompt: &str) -> Result<Option<String>> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        if let Some(digits) = normalize_phone(&raw) {
            return Ok(Some(digits));
        }
        eprintln!("{PHONE_ERR}");
    }
}

pub fn prompt_email(prompt: &str) -> Result<String> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        let value = raw.trim();
        if is_valid_email(value) {
            return Ok(value.to_string());
        }
        eprintln!("{EMAIL_ERR}");
    }
}

pub fn prompt_email_opt(prompt: &str) -> Result<Option<String>> {
    loop {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let value = raw.trim();
        if value.is_empty() {
            return Ok(None);
        }
        if is_valid_email(value) {
            return Ok(Some(value.to_string()));
        }
        eprintln!("{EMAIL_ERR}");
    }
}

pub fn prompt_id(prompt: &str) -> Result<i64> {
    loop {
        let raw: String = Input::new().with_prompt(prompt).interact_text()?;
        if let Some(id) = parse_id(&raw) {
            return Ok(id);
        }
        eprintln!("{NUMBER_ERR}");
    }
}

/// Read a password with hidden input and return its digest.
pub fn prompt_password(prompt: &str) -> Result<String> {
    loop {
        let plain = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        let plain = plain.trim();
        if !plain.is_empty() {
            return Ok(hash_password(plain));
        }
        eprintln!("{EMPTY_ERR}");
    }
}

/// Update-mode password prompt: a blank answer keeps the stored digest and
/// bypasses hashing entirely.
pub fn prompt_password_opt(prompt: &str) -> Result<Option<String>> {
    let plain = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    let plain = plain.trim();
    Ok((!plain.is_empty()).then(|| hash_password(plain)))
}

pub fn prompt_reason(prompt: &str) -> Result<Reason> {
    let labels: Vec<&str> = Reason::ALL.iter().map(|reason| reason.label()).collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Reason::ALL[choice])
}

pub fn prompt_reason_opt(prompt: &str) -> Result<Option<Reason>> {
    let mut labels = vec!["Keep the current reason"];
    labels.extend(Reason::ALL.iter().map(|reason| reason.label()));
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(if choice == 0 {
        None
    } else {
        Some(Reason::ALL[choice - 1])
    })
}

pub fn confirm(prompt: &str) -> Result<bool> {
    loop {
        let raw: String = Input::new()
            .with_prompt(format!("{prompt} (Y/N)"))
            .interact_text()?;
        if let Some(answer) = parse_confirmation(&raw) {
            return Ok(answer);
        }
        eprintln!("{OPTION_ERR}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_nine_digits_in_any_spacing() {
        assert_eq!(normalize_phone("600112233").as_deref(), Some("600112233"));
        assert_eq!(normalize_phone("600 11 22 33").as_deref(), Some("600112233"));
        assert_eq!(
            normalize_phone("  6 0 0 1 1 2 2 3 3  ").as_deref(),
            Some("600112233")
        );
    }

    #[test]
    fn phone_rejects_wrong_length_and_non_digits() {
        assert_eq!(normalize_phone("60011223"), None);
        assert_eq!(normalize_phone("6001122334"), None);
        assert_eq!(normalize_phone("60011223a"), None);
        assert_eq!(normalize_phone("600-112-233"), None);
        assert_eq!(normalize_phone(""), None);
    }

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("ana@x.co"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(is_valid_email("Ana@X.CO"));
        assert!(!is_valid_email("anax.co"));
        assert!(!is_valid_email("ana@xco"));
        assert!(!is_valid_email("ana@x.c"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn id_parsing_rejects_signs_blanks_and_garbage() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("12a"), None);
        // i64 overflow is a rejection, not a panic
        assert_eq!(parse_id("99999999999999999999"), None);
    }

    #[test]
    fn confirmation_reads_the_first_letter_only() {
        assert_eq!(parse_confirmation("y"), Some(true));
        assert_eq!(parse_confirmation("Y"), Some(true));
        assert_eq!(parse_confirmation("yes"), Some(true));
        assert_eq!(parse_confirmation("YES"), Some(true));
        assert_eq!(parse_confirmation("n"), Some(false));
        assert_eq!(parse_confirmation("N"), Some(false));
        assert_eq!(parse_confirmation("no"), Some(false));
        assert_eq!(parse_confirmation("maybe"), None);
        assert_eq!(parse_confirmation(""), None);
    }

    #[test]
    fn password_digest_is_deterministic_lowercase_hex() {
        let digest = hash_password("password");
        assert_eq!(digest, hash_password("password"));
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // well-known SHA-256 vector
        assert_eq!(
            digest,
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}
