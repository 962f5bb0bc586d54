//! Ways of presenting an API token

/// How the token travels with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// `Authorization: Bearer <token>` header
    Bearer,
    /// `auth` field inside the JSON-RPC envelope
    Legacy,
}

impl AuthMode {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "bearer",
            Self::Legacy => "legacy",
        }
    }
}
