//! JSON message encoder.
//!
//! Turns a [`ReadMessage`] into the UTF-8 bytes of its JSON form, ready to
//! be transmitted or logged. The output is:
//!
//! - **Indented** two spaces per level, one field per line.
//! - **Relaxed** in its escaping: only `"`, `\` and control characters
//!   (U+0000..U+001F) are escaped. Non-ASCII text, `<`, `>`, `&`, `'` and
//!   `+` are written raw, so the bytes are NOT safe to drop into an HTML
//!   `<script>` block without escaping them again.
//! - **Deterministic**: keys follow struct declaration order and nothing
//!   beyond the record itself is written.
//!
//! No envelope, length prefix, or checksum is added.

use chatest_types::error::EncodeError;
use chatest_types::message::ReadMessage;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"  ";

/// Encode any serializable record with the relaxed, indented JSON policy.
///
/// serde_json's default formatter already escapes only what the JSON
/// grammar requires; the pretty formatter adds the indentation.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Encode a message record for transmission.
pub fn encode_message(message: &ReadMessage) -> Result<Vec<u8>, EncodeError> {
    encode_json(message)
}

/// Parse bytes produced by [`encode_message`] back into a record.
///
/// Fails with `Serialization` on invalid UTF-8, malformed JSON, or a
/// missing field.
pub fn decode_message(bytes: &[u8]) -> Result<ReadMessage, EncodeError> {
    Ok(serde_json::from_slice(bytes)?)
}
