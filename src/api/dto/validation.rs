use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.len() < 3 || email.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Email must contain between 3 and 255 characters")));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("0").with_message(Cow::from("Invalid email format")));
    }

    Ok(())
}

/// Blank values are accepted: a blank field in a profile update means "keep".
pub fn is_email_or_blank(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Ok(());
    }

    is_email(email)
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::new("0").with_message(Cow::from("Password must not be blank")));
    }

    if password.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Password must contain at most 255 characters")));
    }

    Ok(())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("0").with_message(Cow::from("Name must not be blank")));
    }

    if name.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Name must contain at most 255 characters")));
    }

    Ok(())
}

pub fn is_name_or_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Ok(());
    }

    is_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::plain("someone@example.com")]
    #[case::padded("  someone@example.com ")]
    #[case::plus("someone+tickets@example.co.uk")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_email(email).is_ok());
    }

    #[rstest]
    #[case::no_at("example.com", "Invalid email format")]
    #[case::no_tld("someone@example", "Invalid email format")]
    #[case::too_short("a@", "Email must contain between 3 and 255 characters")]
    fn test_invalid_emails(#[case] email: &str, #[case] message: &str) {
        let err = is_email(email).unwrap_err();
        assert_eq!(err.message.unwrap(), message);
    }

    #[test]
    fn test_blank_is_allowed_for_updates() {
        assert!(is_email_or_blank("   ").is_ok());
        assert!(is_name_or_blank("").is_ok());
        assert!(is_email_or_blank("nope").is_err());
    }

    #[test]
    fn test_blank_name_and_password_rejected() {
        assert!(is_name("  ").is_err());
        assert!(is_password(" ").is_err());
        assert!(is_password("p").is_ok());
    }
}
