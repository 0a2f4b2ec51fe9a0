// lib.rs
// Base32 secret decoding, RFC 4226/6238 one-time codes and the HTTP API around them.

pub mod base32;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod totp;
