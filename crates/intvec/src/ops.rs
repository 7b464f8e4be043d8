//! Homomorphic inner product.

use crate::{Ciphertext, Error, PublicKey, Result};
use intvec_math::Matrix;
use itertools::Itertools;
use log::trace;
use num_integer::Integer;

/// Computes an encryption of the inner product of the plaintexts of `c1` and
/// `c2`. This requires no private key.
///
/// The ciphertexts are tensored as `vec(c1 · c2ᵀ)`, descaled once by `w`
/// (rounding toward negative infinity), and
/// reduced with `key`, which must have been produced by
/// [`PrivateKey::inner_product_key_pair`](crate::PrivateKey::inner_product_key_pair)
/// for ciphertexts of this length. The result decrypts under the private key
/// returned alongside `key`.
///
/// Returns an error if `c1` and `c2` do not have the same shape, or if `key`
/// was not built for the tensor of two ciphertexts of this length.
pub fn inner_product(c1: &Ciphertext, c2: &Ciphertext, key: &PublicKey) -> Result<Ciphertext> {
	if c1.c.shape() != c2.c.shape() {
		return Err(Error::ShapeMismatch(format!(
			"Ciphertexts of shapes {:?} and {:?}",
			c1.c.shape(),
			c2.c.shape()
		)));
	}
	assert_eq!(c1.par, c2.par, "Incompatible parameters");

	let par = &c1.par;
	let tensor_len = c1.c.rows() * c2.c.rows();
	if key.m.columns() != tensor_len * par.gadget_width() {
		return Err(Error::DimensionMismatch(format!(
			"A key-switching matrix of {} columns cannot reduce a tensor of length {}",
			key.m.columns(),
			tensor_len
		)));
	}

	let tensor = &c1.c * &c2.c.transpose();
	let descaled = tensor
		.data()
		.iter()
		.map(|v| v.div_floor(&par.scale))
		.collect_vec();
	trace!(
		"Reducing a tensor of length {} to length {}",
		tensor_len,
		key.m.rows()
	);
	key.switch(&Ciphertext::from_matrix(Matrix::from_column(descaled), par))
}
