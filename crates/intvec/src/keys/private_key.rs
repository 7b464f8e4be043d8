//! Private keys for the integer vector encryption scheme

use crate::{Ciphertext, Error, IntVecParameters, Plaintext, PublicKey, Result};
use intvec_math::Matrix;
use intvec_traits::{FheDecrypter, FheParametrized};
use itertools::Itertools;
use log::debug;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Private key, usually of the form `[I | T]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
	pub(crate) par: Arc<IntVecParameters>,
	pub(crate) s: Matrix,
}

impl PrivateKey {
	/// Samples a private key `[I_n | T]` where `T` is an `n × m` block with
	/// entries drawn uniformly from `[0, bound)`.
	///
	/// `n` is the length of the plaintexts and `n + m` the length of the
	/// ciphertexts this key decrypts.
	///
	/// Aborts if `bound` is zero.
	pub fn random<R: RngCore + CryptoRng>(
		par: &Arc<IntVecParameters>,
		n: usize,
		m: usize,
		bound: u64,
		rng: &mut R,
	) -> Self {
		let t = Matrix::random(n, m, bound, rng);
		debug!("Sampled a {}x{} private key", n, n + m);
		Self::from_t_block(par, &t)
	}

	/// Builds the private key `[I | t]`, with an identity of the same order as
	/// the number of rows of `t`.
	pub fn from_t_block(par: &Arc<IntVecParameters>, t: &Matrix) -> Self {
		let s = Matrix::identity(t.rows())
			.concat_horizontal(t)
			.expect("the identity has as many rows as t");
		Self {
			par: par.clone(),
			s,
		}
	}

	/// Creates the trivial key `I_n`, under which a scaled plaintext is its own
	/// ciphertext.
	pub(crate) fn identity(par: &Arc<IntVecParameters>, n: usize) -> Self {
		Self {
			par: par.clone(),
			s: Matrix::identity(n),
		}
	}

	/// Returns the `T` block, i.e. every column after the leading `rows`
	/// columns.
	///
	/// Aborts if the key has fewer columns than rows.
	pub fn t_block(&self) -> Matrix {
		self.s.slice_columns(self.s.rows()..self.s.columns())
	}

	/// The underlying key matrix.
	pub fn matrix(&self) -> &Matrix {
		&self.s
	}

	/// Computes the long key `vec(s1ᵀ · s2)`, as a `1 × k²` private key, which
	/// decrypts the flattened tensor of two ciphertexts of length `k` before
	/// any dimension reduction.
	///
	/// Returns an error if the two keys do not have the same shape.
	pub fn inner_product_long_key(&self, other: &PrivateKey) -> Result<PrivateKey> {
		if self.s.shape() != other.s.shape() {
			return Err(Error::ShapeMismatch(format!(
				"Keys of shapes {:?} and {:?}",
				self.s.shape(),
				other.s.shape()
			)));
		}
		assert_eq!(self.par, other.par, "Incompatible parameters");

		let tensor = &self.s.transpose() * &other.s;
		let k = tensor.rows();
		Ok(Self {
			par: self.par.clone(),
			s: Matrix::new(1, k * k, tensor.data().to_vec()),
		})
	}

	/// Derives, from a long key of `k²` columns, the reduced private key
	/// `[1 | T]` of shape `1 × k` together with the public key that switches
	/// the long key to it. The public key is the one consumed by
	/// [`inner_product`](crate::inner_product); the private key decrypts its
	/// result.
	///
	/// Aborts if the key has no column.
	pub fn inner_product_key_pair<R: RngCore + CryptoRng>(
		&self,
		rng: &mut R,
	) -> (PrivateKey, PublicKey) {
		let n = isqrt(self.s.columns());
		assert!(n > 0, "Cannot reduce an empty key");

		let t = Matrix::random(1, n - 1, self.par.tensor_key_bound(), rng);
		debug!(
			"Reducing a 1x{} long key to a 1x{} key",
			self.s.columns(),
			n
		);
		let sk = Self::from_t_block(&self.par, &t);
		let pk = PublicKey::key_switching(self, &t, rng);
		(sk, pk)
	}

	/// Rounds `v / w` to the nearest integer. The quotient is truncated, and
	/// lowered by one more when a negative numerator left a remainder.
	fn round_scaled(&self, v: &BigInt) -> BigInt {
		let numerator = v + &self.par.half_scale;
		let mut nearest = &numerator / &self.par.scale;
		if numerator.is_negative() && !(&numerator % &self.par.scale).is_zero() {
			nearest -= BigInt::one();
		}
		nearest
	}
}

fn isqrt(n: usize) -> usize {
	let mut r = (n as f64).sqrt() as usize;
	while r * r > n {
		r -= 1;
	}
	while (r + 1) * (r + 1) <= n {
		r += 1;
	}
	r
}

impl FheParametrized for PrivateKey {
	type Parameters = IntVecParameters;
}

impl FheDecrypter<Plaintext, Ciphertext> for PrivateKey {
	type Error = Error;

	fn try_decrypt(&self, ct: &Ciphertext) -> Result<Plaintext> {
		assert_eq!(self.par, ct.par, "Incompatible parameters");
		if self.s.columns() != ct.c.rows() {
			return Err(Error::DimensionMismatch(format!(
				"A key of {} columns cannot decrypt a ciphertext of length {}",
				self.s.columns(),
				ct.c.rows()
			)));
		}

		let sc = &self.s * &ct.c;
		let m = sc.data().iter().map(|v| self.round_scaled(v)).collect_vec();
		Ok(Plaintext::from_matrix(Matrix::from_column(m), &self.par))
	}
}
