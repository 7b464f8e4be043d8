//! Keys for the integer vector encryption scheme

mod private_key;
mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;

use crate::IntVecParameters;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Generates a private key `[I_n | T]`, with `T` an `n × m` block sampled in
/// `[0, bound)`, together with its public key.
///
/// Aborts if `bound` is zero.
pub fn generate_key_pair<R: RngCore + CryptoRng>(
	par: &Arc<IntVecParameters>,
	n: usize,
	m: usize,
	bound: u64,
	rng: &mut R,
) -> (PrivateKey, PublicKey) {
	let sk = PrivateKey::random(par, n, m, bound, rng);
	let pk = PublicKey::new(&sk, rng);
	(sk, pk)
}
