//! SM3 cryptographic hash function, GM/T 0004-2012.
//!
//! `Sm3` implements the `digest` traits, so the usual `Digest` API works:
//!
//! ```
//! use sm3::{Digest, Sm3};
//!
//! let mut hasher = Sm3::new();
//! hasher.input(b"abc");
//! assert_eq!(hasher.result()[..], sm3::sum(b"abc")[..]);
//! ```
#![no_std]
#[cfg(feature = "std")]
extern crate std;

mod consts;
mod sm3;
mod utils;

pub use digest::Digest;
pub use crate::consts::{BLOCK_SIZE, IV, SIZE};
pub use crate::sm3::Sm3;
pub use crate::utils::compress256;

/// One-shot SM3 digest of `data`.
pub fn sum(data: &[u8]) -> [u8; SIZE] {
    let mut hasher = Sm3::new();
    hasher.write(data);
    hasher.sum()
}
