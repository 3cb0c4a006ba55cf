//! Cookie-based visitor greeting.
//!
//! A visitor is greeted as an old friend when the request carries a
//! non-empty `seen` cookie and as a new friend otherwise. Every response
//! (re)sets the cookie for another hour.

mod greeting;

pub use greeting::{SEEN_COOKIE_NAME, SeenCookie, Visitor};
