//! Opaque pagination cursor codec.
//!
//! A cursor is the JSON continuation state wrapped in a versioned envelope
//! and base64-encoded. Callers treat the token as opaque; only its
//! round-trip behavior is part of the contract. The token format is stable
//! across calls for a given core version, so it acts as a persisted-state
//! contract between pages of the same query.

use base64::{engine::general_purpose, Engine as _};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Envelope schema version. Bump whenever the continuation state changes
/// shape; decode rejects tokens from any other version.
const CURSOR_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    v: u32,
    body: T,
}

/// Encode continuation state into an opaque token.
pub fn encode_cursor<T: Serialize>(state: &T) -> CoreResult<String> {
    let envelope = Envelope {
        v: CURSOR_VERSION,
        body: state,
    };
    let raw = serde_json::to_vec(&envelope)
        .map_err(|e| CoreError::Cursor(format!("serialize cursor: {}", e)))?;
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(raw))
}

/// Decode an opaque token back into continuation state.
///
/// Accepts URL-safe base64 first, falling back to standard base64 for
/// tokens that passed through URL-unescaping middlemen.
pub fn decode_cursor<T: DeserializeOwned>(token: &str) -> CoreResult<T> {
    let raw = general_purpose::URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| general_purpose::STANDARD.decode(token))
        .map_err(|e| CoreError::Cursor(format!("decode cursor: {}", e)))?;

    let envelope: Envelope<T> = serde_json::from_slice(&raw)
        .map_err(|e| CoreError::Cursor(format!("parse cursor: {}", e)))?;

    if envelope.v != CURSOR_VERSION {
        return Err(CoreError::Cursor(format!(
            "unsupported cursor version {}",
            envelope.v
        )));
    }

    Ok(envelope.body)
}
