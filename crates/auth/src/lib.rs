//! `innkeep-auth` — admin authentication boundary.
//!
//! Claims validation is deterministic and transport-agnostic; token
//! encoding/decoding and password hashing live behind small seams so the
//! rest of the system never touches crypto crates directly.

pub mod admin;
pub mod claims;
pub mod jwt;
pub mod password;

pub use admin::Admin;
pub use claims::{validate_claims, AdminClaims, TokenValidationError};
pub use jwt::{Hs256Jwt, JwtError, JwtValidator};
pub use password::{hash_password, verify_password, PasswordError};
