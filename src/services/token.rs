//! Signed session tokens.
//!
//! Sessions are stateless: the server keeps no session table. A token is a
//! hex-encoded JSON claims payload joined to an HMAC-SHA256 signature over
//! that payload, `"<payload_hex>.<signature_hex>"`. Whoever holds the
//! signing secret can mint and verify tokens; nobody else can alter one
//! without invalidating the signature.
//!
//! Token lifecycle: issued, then valid until `exp`, then expired. There is
//! no revocation before expiry.

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried inside a session token.
///
/// The permission set is captured at login time, so a permission change
/// takes effect on the employee's next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated employee
    pub employee_id: String,

    /// Permission tokens held at the time the session was issued
    pub permissions: Vec<String>,

    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,

    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl Claims {
    /// True when the session carries the given permission token.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// Issue a signed token for an employee.
///
/// `ttl_secs` is added to the current time to produce `exp`; the default
/// configuration uses 3600 (one hour).
pub fn issue(secret: &str, employee_id: &str, permissions: Vec<String>, ttl_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        employee_id: employee_id.to_string(),
        permissions,
        iat: now,
        exp: now + ttl_secs,
    };

    let payload = hex::encode(serde_json::to_vec(&claims).expect("claims serialize to JSON"));
    let signature = sign(secret, payload.as_bytes());

    format!("{payload}.{signature}")
}

/// Verify a token and return its claims.
///
/// # Errors
///
/// - `InvalidToken`: malformed token, or the signature does not verify
///   against `secret`. Nothing in the payload is trusted before the
///   signature check passes.
/// - `TokenExpired`: signature is valid but `exp` is in the past.
pub fn verify(secret: &str, token: &str) -> Result<Claims, AppError> {
    let (payload, signature) = token.split_once('.').ok_or(AppError::InvalidToken)?;
    let signature = hex::decode(signature).map_err(|_| AppError::InvalidToken)?;

    // Constant-time comparison via the Mac trait
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC key length is valid");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AppError::InvalidToken)?;

    let payload = hex::decode(payload).map_err(|_| AppError::InvalidToken)?;
    let claims: Claims = serde_json::from_slice(&payload).map_err(|_| AppError::InvalidToken)?;

    if claims.exp <= Utc::now().timestamp() {
        return Err(AppError::TokenExpired);
    }

    Ok(claims)
}

/// HMAC-SHA256 over `data`, hex encoded.
fn sign(secret: &str, data: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC key length is valid");
    mac.update(data);
    hex::encode(mac.finalize().into_bytes())
}
