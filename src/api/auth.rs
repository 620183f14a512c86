/// Source of the bearer credential attached to every request.
///
/// `None` means nobody is signed in; callers must not send anything then.
pub trait Authenticator {
    fn bearer_token(&self) -> Option<String>;
}

/// A credential handed over once, e.g. read from the environment.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl Authenticator for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_counts_as_signed_out() {
        assert_eq!(StaticToken::new(Some("  ".into())).bearer_token(), None);
        assert_eq!(StaticToken::signed_out().bearer_token(), None);
        assert_eq!(
            StaticToken::new(Some("abc".into())).bearer_token().as_deref(),
            Some("abc")
        );
    }
}
