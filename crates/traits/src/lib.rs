//! Core digest trait for the rsha workspace.
//!
//! This crate provides the foundational [`Digest`] trait that every rsha
//! hash implementation conforms to, plus the [`io::DigestReader`] adapter
//! for hashing transparently during reads. It is `no_std` compatible and
//! has zero dependencies.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
