use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// Indicates that an error in the underlying mathematical library was
	/// encountered.
	#[error("{0}")]
	MathError(intvec_math::Error),

	/// Indicates that two operands do not have the same shape.
	#[error("Shape mismatch: {0}")]
	ShapeMismatch(String),

	/// Indicates that a key was not built for the dimension of its operand.
	#[error("Dimension mismatch: {0}")]
	DimensionMismatch(String),

	/// Indicates a serialization or deserialization error.
	#[error("Serialization error: {0}")]
	SerializationError(String),

	/// Indicates that the parameters are invalid.
	#[error("Invalid parameters: {0}")]
	ParametersError(String),

	/// Indicates a default error.
	#[error("{0}")]
	DefaultError(String),
}

impl From<intvec_math::Error> for Error {
	fn from(e: intvec_math::Error) -> Self {
		Error::MathError(e)
	}
}
