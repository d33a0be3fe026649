//! Rendering decoded messages as JSON documents.

use serde_json::Value;

use crate::clean::clean_message;
use crate::decode::ShareState;

/// How rendered documents are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Indented, one block per message.
    Pretty,
    /// Compact, suited to one-document-per-line output.
    Compact,
}

/// Render one JSON document per message.
///
/// Each message body is cleaned unless `raw` is set, then serialized
/// according to `layout`.
pub fn render_messages(
    state: ShareState,
    raw: bool,
    layout: Layout,
) -> Result<Vec<String>, serde_json::Error> {
    state
        .messages
        .into_iter()
        .map(|entry| {
            let mut data = entry.data;
            if !raw {
                clean_message(&mut data);
            }
            let value = Value::Object(data);
            match layout {
                Layout::Pretty => serde_json::to_string_pretty(&value),
                Layout::Compact => serde_json::to_string(&value),
            }
        })
        .collect()
}
