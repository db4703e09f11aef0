use std::fmt;

/// Identifies one render session; a tick carrying a revoked token is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionToken(u64);

impl SessionToken {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session #{}", self.0)
    }
}

/// Hands out session tokens; at most one is current at any time.
#[derive(Debug, Default)]
pub struct TokenIssuer {
    last_generation: u64,
    current: Option<SessionToken>,
}

impl TokenIssuer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token, revoking whichever one was current.
    pub fn issue(&mut self) -> SessionToken {
        self.last_generation += 1;
        let token = SessionToken(self.last_generation);
        self.current = Some(token);
        token
    }

    pub fn revoke(&mut self) -> Option<SessionToken> {
        self.current.take()
    }

    #[must_use]
    pub fn current(&self) -> Option<SessionToken> {
        self.current
    }

    #[must_use]
    pub fn is_current(&self, token: SessionToken) -> bool {
        self.current == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_increase_monotonically() {
        let mut issuer = TokenIssuer::new();

        let first = issuer.issue();
        let second = issuer.issue();

        assert!(second > first);
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
    }

    #[test]
    fn issuing_revokes_previous_token() {
        let mut issuer = TokenIssuer::new();

        let first = issuer.issue();
        assert!(issuer.is_current(first));

        let second = issuer.issue();
        assert!(!issuer.is_current(first));
        assert!(issuer.is_current(second));
    }

    #[test]
    fn revoke_leaves_no_current_token() {
        let mut issuer = TokenIssuer::new();
        let token = issuer.issue();

        assert_eq!(issuer.revoke(), Some(token));
        assert!(!issuer.is_current(token));
        assert_eq!(issuer.current(), None);
        assert_eq!(issuer.revoke(), None);
    }

    #[test]
    fn generations_are_not_reused_after_revoke() {
        let mut issuer = TokenIssuer::new();
        let first = issuer.issue();
        issuer.revoke();

        let second = issuer.issue();

        assert_ne!(first, second);
    }
}
