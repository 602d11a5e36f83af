//! Naming-convention validation and conversion.
//!
//! # Design
//!
//! The generator accepts a model name in either PascalCase or snake_case and
//! derives the other form from it. Both forms are frozen into a [`ModuleName`]
//! at the start of a generation run and never mutated afterwards — every path
//! and every rendered template reads from the same pair.
//!
//! The conversion rules are deliberately simple and deterministic:
//!
//! - PascalCase → snake_case inserts `_` before every non-initial uppercase
//!   letter, then lowercases. Acronym runs therefore split at every letter:
//!   `HTTPResponse` becomes `h_t_t_p_response`, not `http_response`.
//! - snake_case → PascalCase splits on `_`, capitalizes each segment, and
//!   concatenates.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A validated model name with both canonical representations.
///
/// Invariant: `pascal` and `snake` are always mutually derivable; once
/// constructed, both forms are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName {
    pascal: String,
    snake: String,
}

impl ModuleName {
    /// Normalize a user-supplied name into both conventions.
    ///
    /// PascalCase is tried first, then snake_case. Anything else fails with
    /// [`DomainError::InvalidName`] naming both expected formats.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        if validate_pascal_case(name) {
            Ok(Self {
                pascal: name.to_string(),
                snake: pascal_to_snake(name)?,
            })
        } else if validate_snake_case(name) {
            Ok(Self {
                pascal: snake_to_pascal(name)?,
                snake: name.to_string(),
            })
        } else {
            Err(DomainError::InvalidName {
                name: name.to_string(),
                expected: "PascalCase or snake_case",
            })
        }
    }

    /// The PascalCase form, e.g. `UserAccount`.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// The snake_case form, e.g. `user_account`.
    pub fn snake(&self) -> &str {
        &self.snake
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// True iff `name` matches `^[A-Z][A-Za-z0-9]*$`.
pub fn validate_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// True iff `name` matches `^[a-z][a-z0-9_]*$`.
///
/// Note that consecutive underscores (`user__x`) are accepted — the pattern
/// puts no constraint on what follows the first character beyond the
/// character class.
pub fn validate_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        _ => false,
    }
}

// ── Conversion ────────────────────────────────────────────────────────────────

/// Convert PascalCase to snake_case.
///
/// Inserts `_` before every uppercase letter that is not the first character,
/// then lowercases the whole string. Consecutive capitals split at every
/// boundary (`HTTPResponse` → `h_t_t_p_response`).
pub fn pascal_to_snake(name: &str) -> Result<String, DomainError> {
    if !validate_pascal_case(name) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            expected: "PascalCase",
        });
    }

    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Convert snake_case to PascalCase.
///
/// Splits on `_`, capitalizes the first letter of each segment, concatenates.
pub fn snake_to_pascal(name: &str) -> Result<String, DomainError> {
    if !validate_snake_case(name) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            expected: "snake_case",
        });
    }

    let mut out = String::with_capacity(name.len());
    for segment in name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    Ok(out)
}

// ── Remediation ───────────────────────────────────────────────────────────────

/// Best-effort suggestion for an invalid name. Advisory only, never applied
/// automatically.
///
/// Invalid characters become `_`; a cleaned string containing `_` is assumed
/// to be snake_case intent and lowercased; otherwise a leading uppercase
/// signals PascalCase intent and underscores are stripped. Returns `None`
/// when neither signal is present.
pub fn suggest_fix(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if cleaned.contains('_') {
        Some(cleaned.to_ascii_lowercase())
    } else if cleaned.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        Some(cleaned.chars().filter(|&c| c != '_').collect())
    } else {
        None
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── validation boundaries ─────────────────────────────────────────────

    #[test]
    fn pascal_validation() {
        assert!(validate_pascal_case("UserAccount"));
        assert!(validate_pascal_case("User"));
        assert!(validate_pascal_case("User2Account"));
        assert!(!validate_pascal_case(""));
        assert!(!validate_pascal_case("aBC"));
        assert!(!validate_pascal_case("user_account"));
        assert!(!validate_pascal_case("User_Account"));
    }

    #[test]
    fn snake_validation() {
        assert!(validate_snake_case("user_account"));
        assert!(validate_snake_case("user"));
        assert!(validate_snake_case("user2"));
        assert!(!validate_snake_case(""));
        assert!(!validate_snake_case("User"));
        assert!(!validate_snake_case("_user"));
        assert!(!validate_snake_case("1user"));
    }

    #[test]
    fn double_underscore_is_accepted() {
        // The character class allows it; confirmed intent, not an oversight.
        assert!(validate_snake_case("user__x"));
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn pascal_to_snake_basic() {
        assert_eq!(pascal_to_snake("UserAccount").unwrap(), "user_account");
        assert_eq!(pascal_to_snake("Order").unwrap(), "order");
    }

    #[test]
    fn pascal_to_snake_splits_acronym_runs() {
        // Naive splitter: every uppercase letter starts a new segment.
        assert_eq!(pascal_to_snake("HTTPResponse").unwrap(), "h_t_t_p_response");
    }

    #[test]
    fn pascal_to_snake_rejects_invalid() {
        assert!(pascal_to_snake("userAccount").is_err());
        assert!(pascal_to_snake("").is_err());
    }

    #[test]
    fn snake_to_pascal_basic() {
        assert_eq!(snake_to_pascal("user_account").unwrap(), "UserAccount");
        assert_eq!(snake_to_pascal("order").unwrap(), "Order");
    }

    #[test]
    fn snake_to_pascal_rejects_invalid() {
        assert!(snake_to_pascal("UserAccount").is_err());
        assert!(snake_to_pascal("").is_err());
    }

    #[test]
    fn round_trip_snake_pascal_snake() {
        for s in ["user", "user_account", "order_line_item", "abc_def_ghi"] {
            let pascal = snake_to_pascal(s).unwrap();
            assert_eq!(pascal_to_snake(&pascal).unwrap(), s, "round trip for {s}");
        }
    }

    #[test]
    fn round_trip_counterexample_with_digits() {
        // "user2account" capitalizes to "User2account"; converting back keeps
        // the digit attached, so the round trip holds. But a name like
        // "user_2x" pascalizes to "User2x" which snakes back to "user2x" —
        // the underscore before a digit segment is not recoverable.
        let pascal = snake_to_pascal("user_2x").unwrap();
        assert_eq!(pascal, "User2x");
        assert_eq!(pascal_to_snake(&pascal).unwrap(), "user2x");
    }

    // ── ModuleName ────────────────────────────────────────────────────────

    #[test]
    fn parse_pascal_input() {
        let m = ModuleName::parse("UserAccount").unwrap();
        assert_eq!(m.pascal(), "UserAccount");
        assert_eq!(m.snake(), "user_account");
    }

    #[test]
    fn parse_snake_input() {
        let m = ModuleName::parse("user_account").unwrap();
        assert_eq!(m.pascal(), "UserAccount");
        assert_eq!(m.snake(), "user_account");
    }

    #[test]
    fn parse_rejects_mixed_input() {
        let err = ModuleName::parse("user-account").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidName {
                expected: "PascalCase or snake_case",
                ..
            }
        ));
    }

    #[test]
    fn from_str_works() {
        let m: ModuleName = "Order".parse().unwrap();
        assert_eq!(m.snake(), "order");
    }

    // ── suggest_fix ───────────────────────────────────────────────────────

    #[test]
    fn suggest_fix_kebab_case() {
        assert_eq!(suggest_fix("user-account").as_deref(), Some("user_account"));
    }

    #[test]
    fn suggest_fix_mixed_pascal_snake() {
        // Contains an underscore after cleaning, so snake intent wins.
        assert_eq!(suggest_fix("User_Account").as_deref(), Some("user_account"));
    }

    #[test]
    fn suggest_fix_leading_upper_no_separator() {
        assert_eq!(suggest_fix("UserAccount!").as_deref(), Some("useraccount_"));
    }

    #[test]
    fn suggest_fix_no_signal() {
        assert_eq!(suggest_fix("useraccount"), None);
        assert_eq!(suggest_fix(""), None);
    }
}
