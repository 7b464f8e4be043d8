#![warn(missing_docs, unused_imports)]

//! Somewhat-homomorphic encryption of integer vectors.
//!
//! A plaintext `x ∈ ℤⁿ` is scaled by `w` and key-switched to a private key
//! `S = [I | T]`, giving a ciphertext `c` with `S·c = w·x + e` for a small
//! error `e`. Ciphertexts under the same key can be added, and two
//! ciphertexts can be combined into an encryption of the inner product of
//! their plaintexts without access to any private key.

mod ciphertext;
mod errors;
mod keys;
mod ops;
mod parameters;
mod plaintext;
mod wire;

pub use ciphertext::Ciphertext;
pub use errors::{Error, Result};
pub use keys::{generate_key_pair, PrivateKey, PublicKey};
pub use ops::inner_product;
pub use parameters::{IntVecParameters, IntVecParametersBuilder};
pub use plaintext::Plaintext;
