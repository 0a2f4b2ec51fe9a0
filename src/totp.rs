// totp.rs
// OTP utilities: HMAC-SHA1 dynamic truncation (RFC 4226) plus the TOTP/HOTP wrappers.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use thiserror::Error;

use crate::base32::{self, Base32Error};
use crate::models::{HotpResult, TotpResult};

type HmacSha1 = Hmac<Sha1>;

pub const DEFAULT_PERIOD: u64 = 30; // seconds
pub const DEFAULT_DIGITS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("invalid secret: {0}")]
    InvalidSecret(#[from] Base32Error),
    #[error("period must be greater than zero")]
    InvalidPeriod,
    #[error("system clock is before the Unix epoch")]
    ClockBeforeEpoch,
}

/// Derive a `digits`-long decimal code from `key` and `counter`.
///
/// The counter is hashed as 8 big-endian bytes; the low nibble of the last
/// digest byte selects the 4-byte window that becomes the 31-bit code.
/// The result is always exactly `digits` characters, so `digits == 0` yields "".
pub fn hotp_code(key: &[u8], counter: u64, digits: u32) -> String {
    if digits == 0 {
        return String::new();
    }
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[19] & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let code = match 10u64.checked_pow(digits) {
        Some(modulus) => u64::from(binary) % modulus,
        None => u64::from(binary),
    };
    format!("{:0width$}", code, width = digits as usize)
}

/// Current TOTP for `secret`, read against the system clock.
pub fn generate_totp(secret: &str, period: u64, digits: u32) -> Result<TotpResult, OtpError> {
    let now = u64::try_from(Utc::now().timestamp()).map_err(|_| OtpError::ClockBeforeEpoch)?;
    generate_totp_at(secret, now, period, digits)
}

/// TOTP for `secret` at the given Unix time (whole seconds).
pub fn generate_totp_at(
    secret: &str,
    unix_seconds: u64,
    period: u64,
    digits: u32,
) -> Result<TotpResult, OtpError> {
    if period == 0 {
        return Err(OtpError::InvalidPeriod);
    }
    let counter = unix_seconds / period;
    let time_remaining = period - (unix_seconds % period);
    let key = base32::decode(secret)?;

    Ok(TotpResult {
        token: hotp_code(&key, counter, digits),
        time_remaining,
        period,
    })
}

/// HOTP for `secret` at an explicit counter; the counter is echoed back.
pub fn generate_hotp(secret: &str, counter: u64, digits: u32) -> Result<HotpResult, OtpError> {
    let key = base32::decode(secret)?;
    Ok(HotpResult {
        token: hotp_code(&key, counter, digits),
        counter,
    })
}
