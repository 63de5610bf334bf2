//! Authentication primitives for the icon-collection service
//!
//! Provides the two cryptographic leaves of the session core:
//! - Password hashing (Argon2id)
//! - Signed session token encoding and fail-closed decoding
//!
//! The service defines its own session orchestration on top of these
//! primitives. Nothing in this crate touches cookies, HTTP, or the
//! process environment; key material is injected by the caller.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{SessionPayload, SessionTokenCodec};
//! use chrono::{Duration, Utc};
//!
//! let codec = SessionTokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let payload = SessionPayload::for_user("user123", Utc::now() + Duration::hours(1));
//! let token = codec.encode(&payload).unwrap();
//!
//! let decoded = codec.decode(&token).expect("valid token");
//! assert_eq!(decoded.user_id.as_deref(), Some("user123"));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionPayload;
pub use token::SessionTokenCodec;
pub use token::TokenError;
