//! Plaintext type for the integer vector encryption scheme

use crate::{Error, IntVecParameters, Result};
use intvec_math::Matrix;
use intvec_traits::{FheDecoder, FheEncoder, FheParametrized, FhePlaintext};
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::sync::Arc;

/// A plaintext: a column vector of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext {
	pub(crate) par: Arc<IntVecParameters>,
	pub(crate) m: Matrix,
}

impl Plaintext {
	pub(crate) fn from_matrix(m: Matrix, par: &Arc<IntVecParameters>) -> Self {
		debug_assert!(m.columns() <= 1);
		Self {
			par: par.clone(),
			m,
		}
	}

	/// Number of entries of the plaintext vector.
	pub fn len(&self) -> usize {
		self.m.rows()
	}

	/// Returns whether the plaintext vector is empty.
	pub fn is_empty(&self) -> bool {
		self.m.rows() == 0
	}

	/// The underlying `n × 1` matrix.
	pub fn matrix(&self) -> &Matrix {
		&self.m
	}
}

impl FheParametrized for Plaintext {
	type Parameters = IntVecParameters;
}

impl FhePlaintext for Plaintext {}

impl<'a> FheEncoder<&'a [BigInt]> for Plaintext {
	type Error = Error;

	/// Returns an error if a value, once scaled by `w`, does not fit in the
	/// gadget.
	fn try_encode(value: &'a [BigInt], par: &Arc<IntVecParameters>) -> Result<Self> {
		for v in value {
			let bits = v.bits() + par.scale_bits() as u64;
			if v.bits() > 0 && bits > par.gadget_width() as u64 {
				return Err(Error::MathError(intvec_math::Error::GadgetOverflow {
					bits,
					width: par.gadget_width(),
				}));
			}
		}
		Ok(Self::from_matrix(Matrix::from_column(value.to_vec()), par))
	}
}

impl<'a> FheEncoder<&'a [i64]> for Plaintext {
	type Error = Error;

	fn try_encode(value: &'a [i64], par: &Arc<IntVecParameters>) -> Result<Self> {
		let value = value.iter().map(|v| BigInt::from(*v)).collect_vec();
		Plaintext::try_encode(value.as_slice(), par)
	}
}

impl FheDecoder<Plaintext> for Vec<BigInt> {
	type Error = Error;

	fn try_decode(pt: &Plaintext) -> Result<Self> {
		Ok(pt.m.to_column())
	}
}

impl FheDecoder<Plaintext> for Vec<i64> {
	type Error = Error;

	fn try_decode(pt: &Plaintext) -> Result<Self> {
		pt.m
			.data()
			.iter()
			.map(|v| {
				v.to_i64()
					.ok_or_else(|| Error::DefaultError(format!("{v} does not fit in an i64")))
			})
			.collect()
	}
}
