use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// Indicates that two matrices cannot be placed side by side.
	#[error("Unequal rows: left has {left} rows, right has {right} rows")]
	RowCountMismatch {
		/// Rows of the left operand.
		left: usize,
		/// Rows of the right operand.
		right: usize,
	},

	/// Indicates that a value needs more bits than the gadget provides.
	#[error("Value of {bits} bits does not fit in a gadget of width {width}")]
	GadgetOverflow {
		/// Bit length of the offending magnitude.
		bits: u64,
		/// Width of the gadget.
		width: usize,
	},
}

#[cfg(test)]
mod tests {
	use super::Error;

	#[test]
	fn error_strings() {
		assert_eq!(
			Error::RowCountMismatch { left: 2, right: 3 }.to_string(),
			"Unequal rows: left has 2 rows, right has 3 rows"
		);
		assert_eq!(
			Error::GadgetOverflow {
				bits: 101,
				width: 100
			}
			.to_string(),
			"Value of 101 bits does not fit in a gadget of width 100"
		);
	}
}
