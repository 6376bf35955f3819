//! Form validation shared by the page views and the server functions.
//!
//! The views run these before making a remote call so the user gets an inline
//! message without a round trip; the server functions run them again because
//! the client is not trusted.

/// Minimum password length, matching the sign-up form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The medium choices offered by the sign-up and profile forms.
pub const MEDIUM_OPTIONS: &[(&str, &str)] = &[
    ("photography", "Photography"),
    ("painting", "Painting"),
    ("sculpture", "Sculpture"),
    ("digital", "Digital Art"),
    ("other", "Other"),
];

/// Minimal email shape check: something before and after a single-use `@`.
pub fn email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Password length check.
pub fn password(value: &str) -> Result<(), String> {
    if value.len() < MIN_PASSWORD_LEN {
        Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))
    } else {
        Ok(())
    }
}

/// Prices must be finite and non-negative.
pub fn price(value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        Err("Price must be a non-negative number".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(email("artist@example.com"));
        assert!(email("  padded@example.com  "));
        assert!(!email("no-at-sign"));
        assert!(!email("@example.com"));
        assert!(!email("artist@"));
        assert!(!email(""));
    }

    #[test]
    fn password_length() {
        assert!(password("abcdef").is_ok());
        assert!(password("abcde").is_err());
        assert!(password("").is_err());
    }

    #[test]
    fn price_bounds() {
        assert!(price(0.0).is_ok());
        assert!(price(149.99).is_ok());
        assert!(price(-0.01).is_err());
        assert!(price(f64::NAN).is_err());
        assert!(price(f64::INFINITY).is_err());
    }
}
