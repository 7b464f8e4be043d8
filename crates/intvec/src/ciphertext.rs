//! Ciphertext type for the integer vector encryption scheme.

use crate::IntVecParameters;
use intvec_math::Matrix;
use intvec_traits::{FheCiphertext, FheParametrized};
use num_bigint::BigInt;
use std::{
	ops::{Add, AddAssign},
	sync::Arc,
};

/// A ciphertext: a column vector usually longer than the plaintext it
/// encrypts. The key able to decrypt it is tracked by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
	pub(crate) par: Arc<IntVecParameters>,
	pub(crate) c: Matrix,
}

impl Ciphertext {
	/// Creates a ciphertext from its entries.
	pub fn new(values: &[BigInt], par: &Arc<IntVecParameters>) -> Self {
		Self::from_matrix(Matrix::from_column(values.to_vec()), par)
	}

	pub(crate) fn from_matrix(c: Matrix, par: &Arc<IntVecParameters>) -> Self {
		debug_assert!(c.columns() <= 1);
		Self {
			par: par.clone(),
			c,
		}
	}

	/// Number of entries of the ciphertext vector.
	pub fn len(&self) -> usize {
		self.c.rows()
	}

	/// Returns whether the ciphertext vector is empty.
	pub fn is_empty(&self) -> bool {
		self.c.rows() == 0
	}

	/// The underlying `k × 1` matrix.
	pub fn matrix(&self) -> &Matrix {
		&self.c
	}
}

impl FheParametrized for Ciphertext {
	type Parameters = IntVecParameters;
}

impl FheCiphertext for Ciphertext {}

impl Add<&Ciphertext> for &Ciphertext {
	type Output = Ciphertext;

	/// Homomorphic addition.
	///
	/// Aborts if the ciphertexts do not have the same shape or parameters.
	fn add(self, rhs: &Ciphertext) -> Ciphertext {
		let mut out = self.clone();
		out += rhs;
		out
	}
}

impl AddAssign<&Ciphertext> for Ciphertext {
	fn add_assign(&mut self, rhs: &Ciphertext) {
		assert_eq!(self.par, rhs.par, "Incompatible parameters");
		self.c += &rhs.c;
	}
}

#[cfg(test)]
mod tests {
	use super::Ciphertext;
	use crate::{IntVecParameters, IntVecParametersBuilder};
	use num_bigint::BigInt;

	fn values(v: &[i64]) -> Vec<BigInt> {
		v.iter().map(|x| BigInt::from(*x)).collect()
	}

	#[test]
	fn add() {
		let par = IntVecParameters::default_arc();
		let a = Ciphertext::new(&values(&[1, 2, 3]), &par);
		let b = Ciphertext::new(&values(&[10, -20, 30]), &par);
		let sum = &a + &b;
		assert_eq!(sum.len(), 3);
		assert_eq!(sum.matrix().to_column(), values(&[11, -18, 33]));

		let mut c = a.clone();
		c += &b;
		assert_eq!(c, sum);
	}

	#[test]
	#[should_panic]
	fn add_mismatched_shapes_aborts() {
		let par = IntVecParameters::default_arc();
		let a = Ciphertext::new(&values(&[1, 2, 3]), &par);
		let b = Ciphertext::new(&values(&[1, 2]), &par);
		let _ = &a + &b;
	}

	#[test]
	#[should_panic]
	fn add_mismatched_parameters_aborts() {
		let par = IntVecParameters::default_arc();
		let other = IntVecParametersBuilder::new()
			.set_gadget_width(64)
			.build_arc()
			.unwrap();
		let a = Ciphertext::new(&values(&[1, 2]), &par);
		let b = Ciphertext::new(&values(&[1, 2]), &other);
		let _ = &a + &b;
	}

	#[test]
	fn empty() {
		let par = IntVecParameters::default_arc();
		assert!(Ciphertext::new(&[], &par).is_empty());
	}
}
