//! Image payload encoding.

use base64::{engine::general_purpose::STANDARD, Engine};

/// Base64-encode raw image bytes for the `image` field of a request body.
pub fn encode_image(image: &[u8]) -> String {
    STANDARD.encode(image)
}
