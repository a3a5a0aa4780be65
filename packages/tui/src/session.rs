/// Identity handed to the app by its caller.
///
/// Sign-in itself is owned by an external identity provider; this value only
/// reports the outcome. It is injected explicitly rather than read from
/// ambient state, and every fetch is gated on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
