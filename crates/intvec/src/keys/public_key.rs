//! Public keys for the integer vector encryption scheme

use crate::{Ciphertext, Error, IntVecParameters, Plaintext, PrivateKey, Result};
use intvec_math::Matrix;
use intvec_traits::{FheEncrypter, FheParametrized};
use log::debug;
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Public key: a key-switching matrix. It is safe to hand to an untrusted
/// party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
	pub(crate) par: Arc<IntVecParameters>,
	pub(crate) m: Matrix,
}

impl PublicKey {
	/// Generate the public key of a private key `[I_n | T]`, i.e. the matrix
	/// switching from the trivial key `I_n` to `[I_n | T]`.
	///
	/// Aborts if the private key has fewer columns than rows.
	pub fn new<R: RngCore + CryptoRng>(sk: &PrivateKey, rng: &mut R) -> Self {
		let identity = PrivateKey::identity(&sk.par, sk.s.rows());
		Self::key_switching(&identity, &sk.t_block(), rng)
	}

	/// Generate the matrix switching ciphertexts valid under `from` (shape
	/// `p × q`) to ciphertexts valid under `[I_p | t]`.
	///
	/// With `S* = bit_matrix(from)`, `A` uniform in `[0, aBound)` and `E`
	/// uniform in `[0, bBound)`, the result is
	/// ```text
	/// [ S* + E − t·A ]
	/// [      A       ]
	/// ```
	/// so that `[I_p | t] · M = S* + E`.
	///
	/// Aborts if `t` does not have `p` rows.
	pub fn key_switching<R: RngCore + CryptoRng>(
		from: &PrivateKey,
		t: &Matrix,
		rng: &mut R,
	) -> Self {
		assert_eq!(
			t.rows(),
			from.s.rows(),
			"The T block must have as many rows as the source key"
		);
		let par = &from.par;
		let (a_bound, b_bound) = par.error_bounds();

		let s_star = par.gadget.bit_matrix(&from.s);
		let a = Matrix::random(t.columns(), s_star.columns(), a_bound, rng);
		let e = Matrix::random(s_star.rows(), s_star.columns(), b_bound, rng);
		let u = &(&s_star + &e) - &(t * &a);

		let m = u.concat_vertical(&a);
		debug!(
			"Generated a {}x{} key-switching matrix from a {}x{} key",
			m.rows(),
			m.columns(),
			from.s.rows(),
			from.s.columns()
		);
		Self {
			par: par.clone(),
			m,
		}
	}

	/// The underlying key-switching matrix.
	pub fn matrix(&self) -> &Matrix {
		&self.m
	}

	/// Switches `ct` to the key this matrix targets, computing
	/// `M · bit_vector(ct)`.
	///
	/// Returns an error if the matrix was not built for ciphertexts of this
	/// length, or if an entry of `ct` does not fit in the gadget.
	pub fn switch(&self, ct: &Ciphertext) -> Result<Ciphertext> {
		assert_eq!(self.par, ct.par, "Incompatible parameters");
		let expected = ct.c.rows() * self.par.gadget_width();
		if self.m.columns() != expected {
			return Err(Error::DimensionMismatch(format!(
				"A key-switching matrix of {} columns cannot switch a ciphertext of length {}",
				self.m.columns(),
				ct.c.rows()
			)));
		}

		let c_star = self.par.gadget.bit_vector(&ct.c)?;
		Ok(Ciphertext::from_matrix(&self.m * &c_star, &self.par))
	}
}

impl FheParametrized for PublicKey {
	type Parameters = IntVecParameters;
}

impl FheEncrypter<Plaintext, Ciphertext> for PublicKey {
	type Error = Error;

	/// Scales the plaintext by `w`, which makes it a ciphertext under the
	/// trivial key, and switches it to the key of this public key.
	fn try_encrypt(&self, pt: &Plaintext) -> Result<Ciphertext> {
		assert_eq!(self.par, pt.par, "Incompatible parameters");
		let scaled = pt.m.scalar_mul(&self.par.scale);
		self.switch(&Ciphertext::from_matrix(scaled, &self.par))
	}
}
