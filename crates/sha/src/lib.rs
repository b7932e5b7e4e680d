//! FIPS 180-4 message digests: SHA-1, SHA-224, SHA-256, SHA-384, SHA-512.
//!
//! Two compression engines drive the five algorithms: a word-32 engine
//! (64-byte blocks, SHA-1/224/256) and a word-64 engine (128-byte blocks,
//! SHA-384/512).
//!
//! Each algorithm is available three ways:
//!
//! - a concrete hasher ([`Sha256`], ...) implementing [`Digest`]
//! - the variant-dispatching [`ShaContext`], which renders lowercase hex
//!   and detects API misuse (`alloc`)
//! - the stream drivers [`io::digest_stream`] / [`io::digest_file`] (`std`)
//!
//! The crate is `no_std` compatible with zero library dependencies outside
//! the workspace; dev-only dependencies are used for oracle testing.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
mod context;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod sha1;
mod sha224;
mod sha256;
mod sha384;
mod sha512;
mod util;
mod w32;
mod w64;

#[cfg(feature = "alloc")]
pub use context::{Algorithm, ShaContext};
pub use error::Error;
pub use sha1::Sha1;
pub use sha224::Sha224;
pub use sha256::Sha256;
pub use sha384::Sha384;
pub use sha512::Sha512;
pub use traits::Digest;
