//! Visitor classification and the `seen` cookie.

use std::fmt;

/// Name of the cookie marking a returning visitor.
pub const SEEN_COOKIE_NAME: &str = "seen";

/// Whether the visitor has been here before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitor {
    /// No `seen` cookie, or an empty one.
    New,
    /// The request carried a non-empty `seen` cookie.
    Returning,
}

impl Visitor {
    /// Classifies a visitor from the values of its `Cookie` request headers.
    ///
    /// Each header value holds `name=value` pairs separated by `;`. Only the
    /// first `seen` cookie counts, and a double-quoted value is unquoted
    /// before it is checked for emptiness.
    #[must_use]
    pub fn from_cookie_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let seen = headers
            .into_iter()
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| name.trim() == SEEN_COOKIE_NAME)
            .is_some_and(|(_, value)| !unquote(value.trim()).is_empty());
        if seen { Self::Returning } else { Self::New }
    }

    /// Returns the greeting shown to this visitor.
    #[must_use]
    pub const fn greeting(self) -> &'static str {
        match self {
            Self::New => "Hello, new friend",
            Self::Returning => "Hello, old friend",
        }
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

/// The `seen` cookie issued with every greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenCookie {
    value: &'static str,
    max_age_secs: u32,
    path: &'static str,
}

impl SeenCookie {
    /// Creates the standard cookie: `seen=yes` for one hour on `/`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: "yes",
            max_age_secs: 3600,
            path: "/",
        }
    }

    /// Returns the cookie lifetime in seconds.
    #[must_use]
    pub const fn max_age_secs(&self) -> u32 {
        self.max_age_secs
    }
}

impl Default for SeenCookie {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the cookie as a `Set-Cookie` header value. The cookie is always
/// `Secure` and `HttpOnly`.
impl fmt::Display for SeenCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SEEN_COOKIE_NAME}={}; Max-Age={}; Path={}; Secure; HttpOnly",
            self.value, self.max_age_secs, self.path
        )
    }
}
