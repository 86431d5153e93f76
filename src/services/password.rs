use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString,
        rand_core::OsRng,
    },
};
use serde::{Deserialize, Serialize};

/// How account passwords are stored and compared.
///
/// `Plaintext` keeps the password verbatim and compares it with exact string
/// equality. `Argon2` stores a PHC string and verifies against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    #[default]
    Plaintext,
    Argon2,
}

impl PasswordScheme {
    pub fn encode(&self, password: &str) -> Result<String> {
        match self {
            Self::Plaintext => Ok(password.to_owned()),
            Self::Argon2 => encrypt_password(password),
        }
    }

    pub fn matches(&self, password: &str, stored: &str) -> bool {
        match self {
            Self::Plaintext => password == stored,
            Self::Argon2 => match verify_password(password, stored) {
                Ok(()) => true,
                Err(HashError::Password) => false,
                Err(error) => {
                    tracing::warn!(%error, "stored password is not a valid argon2 hash");
                    false
                }
            },
        }
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::exact("p4ssw0rd", "p4ssw0rd", true)]
    #[case::one_char_off("p4ssw0rd", "p4ssw0rD", false)]
    #[case::trailing_space("p4ssw0rd ", "p4ssw0rd", false)]
    #[case::empty("", "p4ssw0rd", false)]
    fn test_plaintext_matching(#[case] given: &str, #[case] stored: &str, #[case] expected: bool) {
        assert_eq!(PasswordScheme::Plaintext.matches(given, stored), expected);
    }

    #[test]
    fn test_plaintext_encoding_is_verbatim() {
        assert_eq!(PasswordScheme::Plaintext.encode("  spaced  ").unwrap(), "  spaced  ");
    }

    #[test]
    fn test_argon2_round_trip() {
        let scheme = PasswordScheme::Argon2;
        let stored = scheme.encode("p4ssw0rd").unwrap();

        assert_ne!(stored, "p4ssw0rd");
        assert!(scheme.matches("p4ssw0rd", &stored));
        assert!(!scheme.matches("p4ssw0rD", &stored));
    }

    #[test]
    fn test_argon2_rejects_unhashed_value() {
        assert!(!PasswordScheme::Argon2.matches("p4ssw0rd", "p4ssw0rd"));
    }

    #[test]
    fn test_scheme_deserialization() {
        let scheme: PasswordScheme = serde_json::from_str("\"argon2\"").unwrap();
        assert_eq!(scheme, PasswordScheme::Argon2);
    }
}
