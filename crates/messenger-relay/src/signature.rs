//! Webhook payload signature verification.
//!
//! The platform signs each POST body with HMAC-SHA1 keyed by the app secret
//! and sends it as `X-Hub-Signature: sha1=<hex>`.

use crate::error::RelayError;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::{debug, warn};

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "x-hub-signature";

/// Lowercase hex HMAC-SHA1 digest of `body` keyed by `secret`.
pub fn digest(secret: &str, body: &[u8]) -> Result<String, RelayError> {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).map_err(|_| RelayError::Authentication)?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a request body against its signature header.
///
/// A missing header is accepted. A present header must hold exactly the
/// lowercase hex digest after its first `=`.
pub fn verify(secret: &str, body: &[u8], signature_header: Option<&str>) -> Result<(), RelayError> {
    let Some(header) = signature_header else {
        debug!("No signature header, skipping verification");
        return Ok(());
    };

    let Some((_, hash)) = header.split_once('=') else {
        warn!("Malformed signature header");
        return Err(RelayError::Authentication);
    };

    if hash != digest(secret, body)? {
        warn!("Signature mismatch");
        return Err(RelayError::Authentication);
    }

    Ok(())
}
