use crate::{DateTimeError, DateTimePayload, DecodedDateTime, PayloadFormat, Result};

/// Interprets a fetched payload as either a JSON string or plain text.
///
/// The declared content type decides the branch:
/// - `application/json` or any `+json` type: the body must be a JSON string
/// - `text/*`: the body is UTF-8 text
/// - anything else or missing: JSON is tried first, then plain text
pub fn decode_datetime(payload: &DateTimePayload) -> Result<DecodedDateTime> {
    match declared_format(payload.content_type.as_deref()) {
        Some(PayloadFormat::Json) => decode_json(&payload.body),
        Some(PayloadFormat::PlainText) => decode_plain_text(&payload.body),
        None => decode_json(&payload.body).or_else(|_| decode_plain_text(&payload.body)),
    }
}

fn declared_format(content_type: Option<&str>) -> Option<PayloadFormat> {
    let mime = content_type?
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        Some(PayloadFormat::Json)
    } else if mime.starts_with("text/") {
        Some(PayloadFormat::PlainText)
    } else {
        None
    }
}

fn decode_json(body: &[u8]) -> Result<DecodedDateTime> {
    let value = serde_json::from_slice::<String>(body)
        .map_err(|err| DateTimeError::Decode(format!("expected JSON string body: {err}")))?;
    Ok(DecodedDateTime {
        format: PayloadFormat::Json,
        value,
    })
}

fn decode_plain_text(body: &[u8]) -> Result<DecodedDateTime> {
    let text = std::str::from_utf8(body)
        .map_err(|err| DateTimeError::Decode(format!("body is not valid UTF-8: {err}")))?;
    Ok(DecodedDateTime {
        format: PayloadFormat::PlainText,
        value: text.trim().to_owned(),
    })
}
