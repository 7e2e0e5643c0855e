/// Raw response returned by [`crate::DateTimeClient::fetch`].
///
/// The body is passed through verbatim; see [`crate::decode_datetime`] for
/// turning it into text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimePayload {
    pub body: Vec<u8>,
    /// Declared `Content-Type` header, if the server sent a readable one.
    pub content_type: Option<String>,
}

impl DateTimePayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

/// How a payload was interpreted by [`crate::decode_datetime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Body was a JSON string literal.
    Json,
    /// Body was bare text.
    PlainText,
}

/// Datetime text extracted from a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedDateTime {
    pub format: PayloadFormat,
    pub value: String,
}
