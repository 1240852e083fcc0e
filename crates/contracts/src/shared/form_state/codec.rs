//! `name=value&name=value` encoding of form snapshots.
//!
//! Names and values are percent-encoded with `urlencoding`, which escapes
//! everything except `A-Za-z0-9-_.~`. A bare `+` never appears in the output,
//! so the decoder reads `+` as a space, the way form bodies are written.

use super::{FieldEntry, FormSnapshot};
use std::borrow::Cow;

const PAIR_SEPARATOR: &str = "&";
const KEY_VALUE_SEPARATOR: &str = "=";

/// Percent-encodes one name or value.
pub fn encode_component(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

/// Reverses [`encode_component`]; `None` on malformed UTF-8.
pub fn decode_component(encoded: &str) -> Option<String> {
    let spaced = encoded.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}

/// Encodes the snapshot in entry order.
pub fn encode(snapshot: &FormSnapshot) -> String {
    snapshot
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "{}{}{}",
                encode_component(&entry.name),
                KEY_VALUE_SEPARATOR,
                encode_component(&entry.value)
            )
        })
        .collect::<Vec<_>>()
        .join(PAIR_SEPARATOR)
}

/// Decodes an encoded snapshot.
///
/// Segments that cannot be read are skipped; the remaining pairs are kept.
pub fn decode(encoded: &str) -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    for segment in encoded.split(PAIR_SEPARATOR) {
        if segment.is_empty() {
            continue;
        }
        match decode_pair(segment) {
            Some(FieldEntry { name, value }) => snapshot.push(name, value),
            None => log::debug!("form state: skipping malformed pair {:?}", segment),
        }
    }
    snapshot
}

fn decode_pair(segment: &str) -> Option<FieldEntry> {
    // Only the first '=' separates; the rest belongs to the value.
    let (raw_name, raw_value) = segment.split_once(KEY_VALUE_SEPARATOR)?;
    let name = decode_component(raw_name)?;
    if name.is_empty() {
        return None;
    }
    let value = decode_component(raw_value)?;
    Some(FieldEntry { name, value })
}
