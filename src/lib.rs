//! # Cipher-Bind: Secret-Bound Symmetric Encryption
//!
//! `cipher-bind` is a small cryptographic convenience library that binds a
//! secret and a symmetric cipher algorithm into a [`CipherBinder`], exposing
//! encrypt/decrypt operations plus asynchronous (future- and callback-based)
//! variants.
//!
//! The cipher primitives themselves come from the `aes`/`ctr` crates; this
//! crate only dispatches on text-vs-bytes payloads and defers the
//! asynchronous variants to the next turn of the cooperative scheduler.
//!
//! ## Core Concepts
//!
//! - **[`CipherBinder`]**: holds a secret (never exposed) and an algorithm
//!   identifier, and performs encryption/decryption with a fresh cipher
//!   context per call.
//! - **Legacy key derivation**: key and IV are derived from the secret alone
//!   via the OpenSSL `EVP_BytesToKey` scheme (MD5, no salt), kept for
//!   compatibility with ciphertexts produced by legacy `createCipher`-style
//!   APIs. This derivation is deterministic and NOT suitable for new designs.
//!
//! ## Quick Start
//!
//! ```rust
//! use cipher_bind::{CipherBinder, Ciphertext, Plaintext};
//!
//! fn main() -> Result<(), cipher_bind::Error> {
//!     let binder = CipherBinder::new("correct-horse");
//!
//!     // Encrypt (text in, hex string out)
//!     let ciphertext = binder.encrypt(&Plaintext::from("hello world"))?;
//!     assert!(matches!(ciphertext, Ciphertext::Hex(_)));
//!
//!     // Decrypt
//!     let plaintext = binder.decrypt(&ciphertext, false)?;
//!     assert_eq!(plaintext, Plaintext::from("hello world"));
//!     Ok(())
//! }
//! ```

pub mod algorithm;
pub mod binder;
pub mod error;
pub mod kdf;
pub mod payload;

pub use algorithm::CipherAlgorithm;
pub use binder::CipherBinder;
pub use error::Error;
pub use payload::{Ciphertext, Plaintext};

// --- Prelude ---
// A collection of the most commonly used types.
pub mod prelude {
    pub use crate::algorithm::CipherAlgorithm;
    pub use crate::binder::CipherBinder;
    pub use crate::error::Error;
    pub use crate::payload::{Ciphertext, Plaintext};
}

/// The version of the `cipher-bind` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
