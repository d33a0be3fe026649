//! Base64url payload decoding.
//!
//! Discohook stores the whole editor state as unpadded base64url-encoded
//! UTF-8 JSON. Decoding yields a `ShareState` with one entry per message;
//! each entry's `data` is kept as an arbitrary JSON object so unknown
//! fields survive untouched.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

/// Decoded top-level editor state.
#[derive(Debug, Deserialize)]
pub struct ShareState {
    pub messages: Vec<MessageEntry>,
}

/// One message slot in the editor state.
#[derive(Debug, Deserialize)]
pub struct MessageEntry {
    /// The message body as stored, schema unchecked.
    #[serde(default)]
    pub data: serde_json::Map<String, Value>,
}

/// Errors from payload decoding.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64url data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("decoded data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decoded data has no \"messages\" array")]
    MissingMessages,
}

/// Decode a base64url payload into the editor state.
///
/// Discohook emits unpadded base64url; padded input is accepted too since
/// users sometimes paste links that passed through a re-encoder.
pub fn decode_payload(payload: &str) -> Result<ShareState, DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| URL_SAFE.decode(payload))?;
    let text = String::from_utf8(bytes)?;

    let value: Value = serde_json::from_str(&text)?;
    if !value.get("messages").map_or(false, Value::is_array) {
        return Err(DecodeError::MissingMessages);
    }

    let state: ShareState = serde_json::from_value(value)?;
    log::debug!("decoded payload with {} message(s)", state.messages.len());
    Ok(state)
}
