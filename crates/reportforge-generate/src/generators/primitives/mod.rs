use chrono::{DateTime, FixedOffset};
use rand::{Rng, RngCore};

use reportforge_core::{Error, Result};

pub const STRING_LEN: usize = 8;
pub const CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
pub const INTEGER_MIN: i64 = 1;
pub const INTEGER_MAX_EXCLUSIVE: i64 = 100;
pub const DURATION_MIN: u32 = 30;
pub const DURATION_MAX_EXCLUSIVE: u32 = 300;
pub const ARRAY_MIN_LEN: usize = 1;
pub const ARRAY_MAX_LEN: usize = 4;

pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed-length alphanumeric string, characters drawn with replacement.
pub fn random_string(rng: &mut dyn RngCore) -> String {
    let charset = CHARSET.as_bytes();
    (0..STRING_LEN)
        .map(|_| char::from(charset[rng.random_range(0..charset.len())]))
        .collect()
}

pub fn random_integer(rng: &mut dyn RngCore) -> i64 {
    rng.random_range(INTEGER_MIN..INTEGER_MAX_EXCLUSIVE)
}

/// Random v4 UUID rendered as 32 lowercase hex digits.
pub fn random_guid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).simple().to_string()
}

/// Duration in the `[30, 300)` range rendered as a decimal string.
pub fn random_duration(rng: &mut dyn RngCore) -> String {
    rng.random_range(DURATION_MIN..DURATION_MAX_EXCLUSIVE)
        .to_string()
}

pub fn pick_enum(values: &[String], rng: &mut dyn RngCore) -> Result<String> {
    if values.is_empty() {
        return Err(Error::InvalidSchema("enum values are required".to_string()));
    }
    let idx = rng.random_range(0..values.len());
    Ok(values[idx].clone())
}

pub fn array_len(rng: &mut dyn RngCore) -> usize {
    rng.random_range(ARRAY_MIN_LEN..=ARRAY_MAX_LEN)
}

pub fn format_datetime(now: &DateTime<FixedOffset>) -> String {
    now.format(DATETIME_FORMAT).to_string()
}

pub fn format_date(now: &DateTime<FixedOffset>) -> String {
    now.format(DATE_FORMAT).to_string()
}
