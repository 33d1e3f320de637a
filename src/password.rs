//! Advisory password strength and random password generation.
//!
//! Nothing in the encryption core consults these checks. They exist for
//! the front-end to give feedback and to suggest strong passwords.

use std::fmt;

use rand::Rng;

/// Shortest password the strength check calls valid.
pub const MIN_RECOMMENDED_LEN: usize = 8;

/// Characters that count as "special" for the strength score.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Alphabet for generated passwords.
const GENERATOR_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        })
    }
}

/// Result of [`validate_password`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub valid: bool,
    pub strength: Strength,
    pub message: &'static str,
}

/// Rate a password.
///
/// Under 8 characters is invalid. Otherwise the score is the number of
/// character classes present (upper, lower, digit, special): 12+ chars
/// with 3+ classes is strong, 2+ classes is medium, anything else weak.
pub fn validate_password(password: &str) -> PasswordCheck {
    let len = password.chars().count();
    if len < MIN_RECOMMENDED_LEN {
        return PasswordCheck {
            valid: false,
            strength: Strength::Weak,
            message: "Password must be at least 8 characters",
        };
    }

    let classes = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];
    let score = classes.iter().filter(|present| **present).count();

    if len >= 12 && score >= 3 {
        PasswordCheck {
            valid: true,
            strength: Strength::Strong,
            message: "Strong password",
        }
    } else if score >= 2 {
        PasswordCheck {
            valid: true,
            strength: Strength::Medium,
            message: "Medium strength password",
        }
    } else {
        PasswordCheck {
            valid: true,
            strength: Strength::Weak,
            message: "Weak password - consider using more character types",
        }
    }
}

/// Generate a random password of `length` characters.
///
/// Each character is drawn uniformly from the generator alphabet using
/// the thread-local CSPRNG.
pub fn generate_secure_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(GENERATOR_CHARSET[rng.random_range(0..GENERATOR_CHARSET.len())]))
        .collect()
}
