//! Powers-of-two gadget.
//!
//! A value `x` with `|x| < 2^l` is decomposed into `l` signed binary digits
//! `d_i ∈ {-1, 0, 1}` such that `x = Σ d_i · 2^i`. The dual operation replaces
//! every entry `v` of a matrix by `v·2^0, …, v·2^{l-1}`, so that for
//! representable vectors `bit_matrix(s) · bit_vector(c) = s · c`.

use crate::{Error, Matrix, Result};
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Gadget of a fixed bit width `l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gadget {
	width: usize,
}

impl Gadget {
	/// Creates a gadget decomposing values into `width` bits.
	///
	/// Aborts if `width` is zero.
	pub fn new(width: usize) -> Self {
		assert!(width > 0, "Gadget width must be positive");
		Self { width }
	}

	/// Bit width `l` of the gadget.
	pub fn width(&self) -> usize {
		self.width
	}

	fn check(&self, x: &BigInt) -> Result<()> {
		if x.bits() > self.width as u64 {
			Err(Error::GadgetOverflow {
				bits: x.bits(),
				width: self.width,
			})
		} else {
			Ok(())
		}
	}

	/// Binary expansion of `|x|`, most significant bit first, left-padded with
	/// zeros to exactly `l` characters.
	pub fn encode_bits(&self, x: &BigInt) -> Result<String> {
		self.check(x)?;
		Ok(format!("{:0>width$b}", x.magnitude(), width = self.width))
	}

	/// Signed digits of `x`, least significant first. Every set bit of `|x|`
	/// carries the sign of `x`.
	pub fn decompose(&self, x: &BigInt) -> Result<Vec<BigInt>> {
		self.check(x)?;
		let digit = if x.is_negative() {
			-BigInt::from(1)
		} else {
			BigInt::from(1)
		};
		let magnitude = x.magnitude();
		Ok((0..self.width as u64)
			.map(|i| {
				if magnitude.bit(i) {
					digit.clone()
				} else {
					BigInt::zero()
				}
			})
			.collect_vec())
	}

	/// The `1 × l` row `[2^0, 2^1, …, 2^{l-1}]`.
	pub fn powers_of_two(&self) -> Matrix {
		let one = BigInt::from(1);
		Matrix::new(
			1,
			self.width,
			(0..self.width).map(|i| &one << i).collect_vec(),
		)
	}

	/// Decomposes every entry of `c`, in row-major order, and stacks the digits
	/// into a column vector of length `rows · columns · l`.
	///
	/// Returns an error if an entry does not fit in `l` bits.
	pub fn bit_vector(&self, c: &Matrix) -> Result<Matrix> {
		let mut out = Vec::with_capacity(c.data().len() * self.width);
		for x in c.data() {
			out.extend(self.decompose(x)?);
		}
		Ok(Matrix::from_column(out))
	}

	/// Replaces every entry `v` of `s` by the `l` entries `v·2^0, …, v·2^{l-1}`.
	pub fn bit_matrix(&self, s: &Matrix) -> Matrix {
		let data = s
			.data()
			.iter()
			.flat_map(|v| (0..self.width).map(move |i| v << i))
			.collect_vec();
		Matrix::new(s.rows(), s.columns() * self.width, data)
	}
}

#[cfg(test)]
mod tests {
	use super::Gadget;
	use crate::{Error, Matrix};
	use num_bigint::BigInt;
	use proptest::prelude::*;

	fn v(values: &[i64]) -> Vec<BigInt> {
		values.iter().map(|x| BigInt::from(*x)).collect()
	}

	#[test]
	fn encode_bits() {
		let g = Gadget::new(100);
		let s = g.encode_bits(&BigInt::from(2)).unwrap();
		assert_eq!(s.len(), 100);
		assert!(s.ends_with("010"));
		assert!(s[..98].chars().all(|c| c == '0'));
		assert_eq!(
			g.encode_bits(&BigInt::from(-5)).unwrap(),
			g.encode_bits(&BigInt::from(5)).unwrap()
		);
		assert_eq!(Gadget::new(4).encode_bits(&BigInt::from(0)).unwrap(), "0000");
	}

	#[test]
	fn decompose() {
		let g = Gadget::new(4);
		assert_eq!(g.decompose(&BigInt::from(6)).unwrap(), v(&[0, 1, 1, 0]));
		assert_eq!(g.decompose(&BigInt::from(-6)).unwrap(), v(&[0, -1, -1, 0]));
		assert_eq!(g.decompose(&BigInt::from(15)).unwrap(), v(&[1, 1, 1, 1]));
		assert_eq!(
			g.decompose(&BigInt::from(16)),
			Err(Error::GadgetOverflow { bits: 5, width: 4 })
		);
		assert_eq!(
			g.decompose(&BigInt::from(-16)),
			Err(Error::GadgetOverflow { bits: 5, width: 4 })
		);
	}

	#[test]
	fn bit_vector_layout() {
		let g = Gadget::new(3);
		let c = Matrix::from_column(v(&[1, 2, -3]));
		let bits = g.bit_vector(&c).unwrap();
		assert_eq!(bits.shape(), (9, 1));
		assert_eq!(bits.to_column(), v(&[1, 0, 0, 0, 1, 0, -1, -1, 0]));
		assert!(g.bit_vector(&Matrix::from_column(v(&[8]))).is_err());
	}

	#[test]
	fn bit_matrix_layout() {
		let g = Gadget::new(3);
		let s = Matrix::new(2, 2, v(&[1, 0, -1, 5]));
		let b = g.bit_matrix(&s);
		assert_eq!(b.shape(), (2, 6));
		assert_eq!(b.row(0), v(&[1, 2, 4, 0, 0, 0]).as_slice());
		assert_eq!(b.row(1), v(&[-1, -2, -4, 5, 10, 20]).as_slice());
	}

	#[test]
	fn powers_of_two() {
		let p = Gadget::new(5).powers_of_two();
		assert_eq!(p, Matrix::new(1, 5, v(&[1, 2, 4, 8, 16])));
	}

	proptest! {
		#[test]
		fn powers_times_bits_recovers_value(x in any::<i64>()) {
			let g = Gadget::new(100);
			let x = BigInt::from(x);
			let bits = g.bit_vector(&Matrix::from_column(vec![x.clone()])).unwrap();
			prop_assert_eq!(&g.powers_of_two() * &bits, Matrix::new(1, 1, vec![x]));
		}

		#[test]
		fn bit_matrix_times_bit_vector_is_product(
			s in proptest::collection::vec(-1000i64..1000, 6),
			c in proptest::collection::vec(any::<i64>(), 3),
		) {
			let g = Gadget::new(64);
			let s = Matrix::new(2, 3, v(&s));
			let c = Matrix::from_column(v(&c));
			prop_assert_eq!(&g.bit_matrix(&s) * &g.bit_vector(&c).unwrap(), &s * &c);
		}

		#[test]
		fn square_through_the_gadget(x in any::<i64>()) {
			let g = Gadget::new(100);
			let m = Matrix::new(1, 1, vec![BigInt::from(x)]);
			let product = &g.bit_matrix(&m) * &g.bit_vector(&m).unwrap();
			prop_assert_eq!(product.get(0, 0), &(BigInt::from(x) * BigInt::from(x)));
		}
	}
}
