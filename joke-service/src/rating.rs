//! Inline rating payload: `"{joke_id}{SEPARATOR}{code}"`, code "1" (positive) or "2" (negative).
//!
//! Decoding splits on the last separator, so an id containing the separator still round-trips the
//! polarity. Encoding refuses such ids and payloads over Telegram's callback data limit.

use crate::joke::Polarity;
use thiserror::Error;

/// Fixed two-character token between joke id and polarity code.
pub const SEPARATOR: &str = "::";

/// Telegram rejects callback data longer than this many bytes.
pub const MAX_PAYLOAD_LEN: usize = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RatingError {
    #[error("payload has no separator: {0:?}")]
    MissingSeparator(String),

    #[error("unknown polarity code: {0:?}")]
    UnknownPolarity(String),

    #[error("joke id contains the separator: {0:?}")]
    SeparatorInJokeId(String),

    #[error("payload is {0} bytes, limit is {MAX_PAYLOAD_LEN}")]
    PayloadTooLong(usize),
}

/// Builds the callback payload for a rating button.
pub fn encode_rating(joke_id: &str, polarity: Polarity) -> Result<String, RatingError> {
    if joke_id.contains(SEPARATOR) {
        return Err(RatingError::SeparatorInJokeId(joke_id.to_string()));
    }
    let payload = format!("{}{}{}", joke_id, SEPARATOR, polarity.code());
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(RatingError::PayloadTooLong(payload.len()));
    }
    Ok(payload)
}

/// Recovers `(joke_id, polarity)` from a callback payload, splitting on the last separator.
pub fn decode_rating(payload: &str) -> Result<(String, Polarity), RatingError> {
    let (joke_id, code) = payload
        .rsplit_once(SEPARATOR)
        .ok_or_else(|| RatingError::MissingSeparator(payload.to_string()))?;
    let polarity =
        Polarity::from_code(code).ok_or_else(|| RatingError::UnknownPolarity(code.to_string()))?;
    Ok((joke_id.to_string(), polarity))
}
