//! Pure Rust FIPS 180-4 message digests.
//!
//! `rsha` re-exports the SHA-1 and SHA-2 family hashers behind a single
//! crate: five concrete [`Digest`] implementations, the runtime-dispatching
//! [`ShaContext`], and stream drivers for hashing readers and files.
//! Zero dependencies and `no_std` compatible without the `std` feature.
//!
//! # Quick Start
//!
//! ```
//! use rsha::{Digest, Sha256};
//!
//! // One-shot computation
//! let digest = Sha256::digest(b"abc");
//! assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
//!
//! // Streaming computation
//! let mut hasher = Sha256::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! Selecting the algorithm at runtime:
//!
//! ```
//! use rsha::{Algorithm, ShaContext};
//!
//! let mut ctx = ShaContext::new(Algorithm::Sha512);
//! ctx.update(b"abc")?;
//! assert!(ctx.finalize()?.starts_with("ddaf35a1"));
//! # Ok::<(), rsha::Error>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use sha::{Digest, Error, Sha1, Sha224, Sha256, Sha384, Sha512};
#[cfg(feature = "std")]
pub use sha::{Algorithm, ShaContext};
#[cfg(feature = "std")]
pub use sha::io::{DigestReader, StreamError, digest_file, digest_stream};
