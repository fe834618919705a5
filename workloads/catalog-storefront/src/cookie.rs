//! Session cookie handling.

use catalog_cache::SessionId;

pub const SESSION_COOKIE: &str = "catalog_session";

/// The browser session of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserSession {
    pub id: SessionId,
    /// The id was minted for this request and must be sent back.
    pub issued: bool,
}

impl BrowserSession {
    /// Resolve the session from a `Cookie` header, minting a new id when the
    /// cookie is missing or malformed.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        match header.and_then(find_session_cookie) {
            Some(id) => Self { id, issued: false },
            None => Self {
                id: SessionId::generate(),
                issued: true,
            },
        }
    }

    /// `Set-Cookie` value to send, if the id is new.
    pub fn set_cookie(&self) -> Option<String> {
        self.issued.then(|| {
            format!(
                "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
                self.id
            )
        })
    }
}

fn find_session_cookie(header: &str) -> Option<SessionId> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value.trim()))
}
