//! Discohook link classification and payload extraction.
//!
//! Two link shapes are accepted:
//! - data links: `https://discohook.org/?data=<base64url>` (also `.app`)
//! - share links: `https://share.discohook.app/go/<id>` (also `.org`)

use url::Url;

/// Hosts that serve full data links.
const DATA_HOSTS: &[&str] = &["discohook.org", "discohook.app"];

/// Hosts that serve shortened share links.
const SHARE_HOSTS: &[&str] = &["share.discohook.org", "share.discohook.app"];

/// A recognized Discohook link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscohookLink {
    /// Full data link; `payload` is the base64url `data` query value.
    Data { payload: String },
    /// Shortened share link; `id` is the path segment after `/go/`.
    Share { id: String },
}

/// Errors from payload extraction.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("not a Discohook data link")]
    NotADiscohookLink,

    #[error("link has no data payload")]
    MissingPayload,

    #[error("data payload contains a character outside the base64url alphabet: {character:?}")]
    InvalidCharacters { character: char },
}

/// True if `s` is non-empty and drawn entirely from the base64url alphabet.
fn is_base64url(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Classify an input string as a Discohook data or share link.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is
/// not exactly one of the two accepted link shapes.
pub fn classify(input: &str) -> Option<DiscohookLink> {
    let trimmed = input.trim();
    if let Ok(payload) = extract_payload(trimmed) {
        return Some(DiscohookLink::Data { payload });
    }
    share_id(trimmed).map(|id| DiscohookLink::Share { id })
}

/// Extract the base64url payload from a data link.
///
/// The link must have an http(s) scheme, a Discohook host, the root path,
/// a single `data` query parameter, and no fragment.
pub fn extract_payload(link: &str) -> Result<String, LinkError> {
    let url = Url::parse(link.trim()).map_err(|_| LinkError::NotADiscohookLink)?;

    if !matches!(url.scheme(), "http" | "https") || url.fragment().is_some() {
        return Err(LinkError::NotADiscohookLink);
    }
    let host = url.host_str().ok_or(LinkError::NotADiscohookLink)?;
    if !DATA_HOSTS.contains(&host) {
        return Err(LinkError::NotADiscohookLink);
    }
    if url.path() != "/" {
        return Err(LinkError::NotADiscohookLink);
    }

    let mut pairs = url.query_pairs();
    let (key, value) = pairs.next().ok_or(LinkError::MissingPayload)?;
    if key != "data" || pairs.next().is_some() {
        return Err(LinkError::NotADiscohookLink);
    }
    if value.is_empty() {
        return Err(LinkError::MissingPayload);
    }
    if let Some(character) = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(LinkError::InvalidCharacters { character });
    }

    Ok(value.into_owned())
}

/// Extract the id from a share link, or `None` if the input isn't one.
fn share_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    if url.fragment().is_some() || url.query().is_some() {
        return None;
    }
    if !SHARE_HOSTS.contains(&url.host_str()?) {
        return None;
    }

    let id = url.path().strip_prefix("/go/")?;
    is_base64url(id).then(|| id.to_string())
}
