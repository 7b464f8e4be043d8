//! Create parameters for the integer vector encryption scheme

use crate::{Error, Result};
use intvec_math::Gadget;
use intvec_traits::FheParameters;
use num_bigint::BigInt;
use num_traits::One;
use std::sync::Arc;

const DEFAULT_GADGET_WIDTH: usize = 100;
const DEFAULT_SCALE_BITS: usize = 45;
const DEFAULT_A_BOUND: u64 = 100;
const DEFAULT_B_BOUND: u64 = 1000;
const DEFAULT_TENSOR_KEY_BOUND: u64 = 100;

/// Parameters for the integer vector encryption scheme.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct IntVecParameters {
	/// Number of bits `l` of the gadget decomposition
	gadget_width: usize,

	/// The scale factor is `w = 2^scale_bits`
	scale_bits: usize,

	/// Exclusive bound of the masking matrix `A` in key switching
	a_bound: u64,

	/// Exclusive bound of the error matrix `E` in key switching
	b_bound: u64,

	/// Exclusive bound of the `T` block of inner-product keys
	t_bound: u64,

	pub(crate) gadget: Gadget,
	pub(crate) scale: BigInt,
	pub(crate) half_scale: BigInt,
}

impl IntVecParameters {
	/// Returns the gadget width `l`.
	pub fn gadget_width(&self) -> usize {
		self.gadget_width
	}

	/// Returns the number of bits of the scale factor.
	pub fn scale_bits(&self) -> usize {
		self.scale_bits
	}

	/// Returns the scale factor `w`.
	pub fn scale(&self) -> &BigInt {
		&self.scale
	}

	/// Returns the exclusive bounds `(aBound, bBound)` of the masking and error
	/// matrices sampled during key switching.
	pub fn error_bounds(&self) -> (u64, u64) {
		(self.a_bound, self.b_bound)
	}

	/// Returns the exclusive bound of the `T` block of inner-product keys.
	pub fn tensor_key_bound(&self) -> u64 {
		self.t_bound
	}

	/// Returns the default parameters, wrapped in an [`Arc`].
	pub fn default_arc() -> Arc<Self> {
		Arc::new(Self::default())
	}
}

impl Default for IntVecParameters {
	fn default() -> Self {
		Self::new(
			DEFAULT_GADGET_WIDTH,
			DEFAULT_SCALE_BITS,
			DEFAULT_A_BOUND,
			DEFAULT_B_BOUND,
			DEFAULT_TENSOR_KEY_BOUND,
		)
	}
}

impl IntVecParameters {
	fn new(
		gadget_width: usize,
		scale_bits: usize,
		a_bound: u64,
		b_bound: u64,
		t_bound: u64,
	) -> Self {
		let scale = BigInt::one() << scale_bits;
		let half_scale = (&scale + BigInt::one()) >> 1usize;
		Self {
			gadget_width,
			scale_bits,
			a_bound,
			b_bound,
			t_bound,
			gadget: Gadget::new(gadget_width),
			scale,
			half_scale,
		}
	}
}

impl FheParameters for IntVecParameters {}

/// Builder for parameters for the integer vector encryption scheme.
#[derive(Debug)]
pub struct IntVecParametersBuilder {
	gadget_width: usize,
	scale_bits: usize,
	a_bound: u64,
	b_bound: u64,
	t_bound: u64,
}

impl IntVecParametersBuilder {
	/// Creates a new instance of the builder, initialized to the default
	/// parameters.
	#[allow(clippy::new_without_default)]
	pub fn new() -> Self {
		Self {
			gadget_width: DEFAULT_GADGET_WIDTH,
			scale_bits: DEFAULT_SCALE_BITS,
			a_bound: DEFAULT_A_BOUND,
			b_bound: DEFAULT_B_BOUND,
			t_bound: DEFAULT_TENSOR_KEY_BOUND,
		}
	}

	/// Sets the gadget width `l`.
	pub fn set_gadget_width(&mut self, gadget_width: usize) -> &mut Self {
		self.gadget_width = gadget_width;
		self
	}

	/// Sets the scale factor to `2^scale_bits`.
	pub fn set_scale_bits(&mut self, scale_bits: usize) -> &mut Self {
		self.scale_bits = scale_bits;
		self
	}

	/// Sets the exclusive bounds of the masking matrix `A` and of the error
	/// matrix `E` used in key switching.
	pub fn set_error_bounds(&mut self, a_bound: u64, b_bound: u64) -> &mut Self {
		self.a_bound = a_bound;
		self.b_bound = b_bound;
		self
	}

	/// Sets the exclusive bound of the `T` block of inner-product keys.
	pub fn set_tensor_key_bound(&mut self, t_bound: u64) -> &mut Self {
		self.t_bound = t_bound;
		self
	}

	/// Build a new `IntVecParameters` inside an `Arc`.
	pub fn build_arc(&self) -> Result<Arc<IntVecParameters>> {
		self.build().map(Arc::new)
	}

	/// Build a new `IntVecParameters`.
	pub fn build(&self) -> Result<IntVecParameters> {
		if self.gadget_width == 0 {
			return Err(Error::ParametersError(
				"The gadget width must be positive".to_string(),
			));
		}
		if self.scale_bits >= self.gadget_width {
			return Err(Error::ParametersError(format!(
				"A scale of {} bits leaves no room in a gadget of width {}",
				self.scale_bits, self.gadget_width
			)));
		}
		if self.a_bound == 0 || self.b_bound == 0 || self.t_bound == 0 {
			return Err(Error::ParametersError(
				"Sampling bounds must be positive".to_string(),
			));
		}

		Ok(IntVecParameters::new(
			self.gadget_width,
			self.scale_bits,
			self.a_bound,
			self.b_bound,
			self.t_bound,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::{IntVecParameters, IntVecParametersBuilder};
	use crate::Error;
	use num_bigint::BigInt;
	use std::error::Error as StdError;

	#[test]
	fn default() {
		let par = IntVecParameters::default();
		assert_eq!(par.gadget_width(), 100);
		assert_eq!(par.scale_bits(), 45);
		assert_eq!(par.scale(), &BigInt::from(1u64 << 45));
		assert_eq!(par.half_scale, BigInt::from(1u64 << 44));
		assert_eq!(par.error_bounds(), (100, 1000));
		assert_eq!(par.tensor_key_bound(), 100);
		assert_eq!(par.gadget.width(), 100);
		assert_eq!(*IntVecParameters::default_arc(), par);
	}

	#[test]
	fn builder() -> Result<(), Box<dyn StdError>> {
		let par = IntVecParametersBuilder::new()
			.set_gadget_width(64)
			.set_scale_bits(20)
			.set_error_bounds(10, 50)
			.set_tensor_key_bound(7)
			.build()?;
		assert_eq!(par.gadget_width(), 64);
		assert_eq!(par.scale(), &BigInt::from(1 << 20));
		assert_eq!(par.error_bounds(), (10, 50));
		assert_eq!(par.tensor_key_bound(), 7);

		assert_eq!(IntVecParametersBuilder::new().build()?, IntVecParameters::default());
		assert_eq!(*IntVecParametersBuilder::new().build_arc()?, IntVecParameters::default());
		Ok(())
	}

	#[test]
	fn builder_rejects() {
		assert!(matches!(
			IntVecParametersBuilder::new().set_gadget_width(0).build(),
			Err(Error::ParametersError(_))
		));
		assert!(matches!(
			IntVecParametersBuilder::new().set_scale_bits(100).build(),
			Err(Error::ParametersError(_))
		));
		assert!(matches!(
			IntVecParametersBuilder::new().set_error_bounds(0, 10).build(),
			Err(Error::ParametersError(_))
		));
		assert!(matches!(
			IntVecParametersBuilder::new().set_tensor_key_bound(0).build(),
			Err(Error::ParametersError(_))
		));
	}
}
