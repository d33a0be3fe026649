//! Per-message cleanup before display.
//!
//! The editor state carries fields that are useless when pasting back into
//! Discohook's JSON editor: attached `files` can't round-trip, and embed
//! `image`/`thumbnail` objects carry proxy URLs and dimensions the editor
//! regenerates itself. Cleanup strips those down and normalizes embed
//! timestamps to RFC 3339 UTC.

use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Trim non-essential fields from one message body, in place.
pub fn clean_message(message: &mut Map<String, Value>) {
    message.remove("files");

    if let Some(Value::Array(embeds)) = message.get_mut("embeds") {
        for embed in embeds.iter_mut() {
            let Some(embed) = embed.as_object_mut() else {
                continue;
            };
            slim_media(embed, "image");
            slim_media(embed, "thumbnail");
            normalize_timestamp(embed);
        }
    }
}

/// Reduce an embed media object to just its `url`.
fn slim_media(embed: &mut Map<String, Value>, key: &str) {
    let Some(url) = embed.get(key).and_then(|media| media.get("url")).cloned() else {
        return;
    };
    embed.insert(key.to_string(), serde_json::json!({ "url": url }));
}

/// Rewrite a parseable embed timestamp as RFC 3339 UTC.
///
/// Values that don't parse are left as-is rather than discarded.
fn normalize_timestamp(embed: &mut Map<String, Value>) {
    let Some(Value::String(raw)) = embed.get("timestamp") else {
        return;
    };
    if let Some(normalized) = to_rfc3339_utc(raw) {
        embed.insert("timestamp".to_string(), Value::String(normalized));
    }
}

fn to_rfc3339_utc(raw: &str) -> Option<String> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return dt.to_offset(UtcOffset::UTC).format(&Rfc3339).ok();
    }

    // Editor-produced local values carry no offset; treat them as UTC.
    let with_subseconds =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let without_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let dt = PrimitiveDateTime::parse(raw, &with_subseconds)
        .or_else(|_| PrimitiveDateTime::parse(raw, &with_seconds))
        .or_else(|_| PrimitiveDateTime::parse(raw, &without_seconds))
        .ok()?;
    dt.assume_utc().format(&Rfc3339).ok()
}
