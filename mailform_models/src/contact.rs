use std::sync::LazyLock;

use regex::Regex;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// A validated contact form submission.
///
/// All fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: ContactName,
    pub email: EmailAddress,
    pub title: ContactTitle,
    pub message: ContactMessage,
}

impl ContactPayload {
    /// Maximum number of characters of the submitter's email address.
    pub const EMAIL_MAX_LEN: usize = 100;
}

/// Shape a submitter's address must have in addition to being a valid
/// mailbox: an unquoted ASCII local part without leading, trailing or
/// repeated dots, and a dotted domain ending in an alphabetic TLD.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

nutype_string!(ContactName(validate(not_empty, len_char_max = 100)));
nutype_string!(ContactTitle(validate(not_empty, len_char_max = 300)));
nutype_string!(ContactMessage(validate(not_empty, len_char_max = 5000)));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = ContactName::try_new("  Max Mustermann \n".to_owned()).unwrap();
        assert_eq!(name.as_str(), "Max Mustermann");
    }

    #[test]
    fn blank_is_rejected() {
        assert!(ContactName::try_new(String::new()).is_err());
        assert!(ContactTitle::try_new(" \t\r\n ".to_owned()).is_err());
        assert!(ContactMessage::try_new("   ".to_owned()).is_err());
    }

    #[test]
    fn contact_email_shape() {
        for email in [
            "a@example.com",
            "max.mustermann@example.de",
            "o'brien+tag@mail.example.org",
        ] {
            assert!(CONTACT_EMAIL_REGEX.is_match(email), "{email}");
        }
        for email in [
            "a@b",
            "a@localhost",
            "a@[127.0.0.1]",
            "\"q x\"@example.com",
            "ä@example.com",
            ".a@example.com",
            "a..b@example.com",
            "a.@example.com",
            "a@example.c0m",
        ] {
            assert!(!CONTACT_EMAIL_REGEX.is_match(email), "{email}");
        }
    }

    #[test]
    fn length_limits() {
        assert!(ContactName::try_new("x".repeat(100)).is_ok());
        assert!(ContactName::try_new("x".repeat(101)).is_err());
        assert!(ContactTitle::try_new("x".repeat(300)).is_ok());
        assert!(ContactTitle::try_new("x".repeat(301)).is_err());
        assert!(ContactMessage::try_new("x".repeat(5000)).is_ok());
        assert!(ContactMessage::try_new("x".repeat(5001)).is_err());
    }

    #[test]
    fn length_counts_chars() {
        assert!(ContactName::try_new("ä".repeat(100)).is_ok());
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("  {}  ", "x".repeat(100));
        assert!(ContactName::try_new(padded).is_ok());
    }
}
