//! Admin mode password check.
//!
//! This is a demo gate for a local single-user UI. It only decides whether
//! editing controls are shown; it is not a security boundary and protects
//! nothing. The secret comes from configuration in plain text.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Exact match against the configured secret.
    pub fn verify(&self, input: &str) -> bool {
        constant_time_eq(self.secret.as_bytes(), input.as_bytes())
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_ADMIN_PASSWORD)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret() {
        let gate = AdminGate::default();
        assert!(gate.verify("1234"));
        assert!(!gate.verify("12345"));
        assert!(!gate.verify(""));
        assert!(!gate.verify(" 1234"));
    }

    #[test]
    fn test_custom_secret() {
        let gate = AdminGate::new("open sesame");
        assert!(gate.verify("open sesame"));
        assert!(!gate.verify("1234"));
    }
}
