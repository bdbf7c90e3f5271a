// Path: crates/client/src/codec.rs

//! Text-safe encoding of binary records and response unframing.
//!
//! Requests travel as the radix-64 (padded) encoding of a record's binary
//! form. Responses are decoded according to the endpoint's [`ResponseFraming`]:
//! first the body encoding is undone, then an `AuthenticatedMessage` is peeled
//! if the endpoint wraps its records.

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use eicoop_types::schema::AuthenticatedMessage;
use eicoop_types::{BodyEncoding, Envelope, ResponseFraming, WireError};
use prost::Message;

/// Encodes raw bytes as padded radix-64 text.
pub fn encode_payload(bytes: &[u8]) -> String {
    B64.encode(bytes)
}

/// Decodes padded radix-64 text. Surrounding whitespace is ignored.
pub fn decode_payload(text: &str) -> Result<Vec<u8>, WireError> {
    B64.decode(text.trim())
        .map_err(|e| WireError::Parse(format!("invalid base64 payload: {}", e)))
}

/// Serializes a record and encodes it for the `data` form field.
pub fn encode_record<M: Message>(record: &M) -> String {
    encode_payload(&record.encode_to_vec())
}

/// Parses a record from its binary form.
pub fn decode_record<M: Message + Default>(bytes: &[u8]) -> Result<M, WireError> {
    M::decode(bytes).map_err(|e| {
        WireError::Parse(format!(
            "malformed {} payload: {}",
            short_type_name::<M>(),
            e
        ))
    })
}

/// Decodes a response body into a typed record using the endpoint's framing.
pub fn unframe<M: Message + Default>(body: &[u8], framing: ResponseFraming) -> Result<M, WireError> {
    let payload = match framing.encoding {
        BodyEncoding::Base64 => {
            let text = std::str::from_utf8(body)
                .map_err(|e| WireError::Parse(format!("response body is not text: {}", e)))?;
            decode_payload(text)?
        }
        BodyEncoding::Raw => body.to_vec(),
    };

    match framing.envelope {
        Envelope::Bare => decode_record(&payload),
        Envelope::Authenticated => {
            let outer: AuthenticatedMessage = decode_record(&payload)?;
            decode_record(&outer.message)
        }
    }
}

/// Produces the response body the backend would send for `record`.
///
/// The inverse of [`unframe`]; used by mock backends.
pub fn frame<M: Message>(record: &M, framing: ResponseFraming) -> Vec<u8> {
    let payload = match framing.envelope {
        Envelope::Bare => record.encode_to_vec(),
        Envelope::Authenticated => AuthenticatedMessage {
            message: record.encode_to_vec(),
            ..Default::default()
        }
        .encode_to_vec(),
    };
    match framing.encoding {
        BodyEncoding::Base64 => encode_payload(&payload).into_bytes(),
        BodyEncoding::Raw => payload,
    }
}

fn short_type_name<M>() -> &'static str {
    let full = std::any::type_name::<M>();
    full.rsplit("::").next().unwrap_or(full)
}
