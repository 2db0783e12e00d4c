//! Log-safe wrappers for personal data

use std::fmt;

/// Email address with the local part masked, for log fields
#[derive(Debug, Clone)]
pub struct MaskedEmail(String);

impl MaskedEmail {
    pub fn new(email: &str) -> Self {
        Self(Self::mask(email.trim()))
    }

    fn mask(email: &str) -> String {
        match email.split_once('@') {
            Some((local, domain)) => {
                let masked_local = match local.chars().next() {
                    Some(first) if local.chars().count() > 2 => format!("{first}***"),
                    _ => "*".repeat(local.chars().count()),
                };
                format!("{masked_local}@{domain}")
            }
            None => "***@***".to_string(),
        }
    }
}

impl fmt::Display for MaskedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(MaskedEmail::new("user@example.com").to_string(), "u***@example.com");
        assert_eq!(MaskedEmail::new("ab@test.com").to_string(), "**@test.com");
        assert_eq!(MaskedEmail::new("a@test.com").to_string(), "*@test.com");
        assert_eq!(MaskedEmail::new("invalid-email").to_string(), "***@***");
    }
}
