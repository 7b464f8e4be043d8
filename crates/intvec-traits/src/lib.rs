#![warn(missing_docs, unused_imports)]

//! Traits for integer vector homomorphic encryption.

use std::sync::Arc;

/// The homomorphic encryption parameters.
pub trait FheParameters {}

/// Indicates that an object is parametrized.
pub trait FheParametrized {
	/// The type of the FHE parameters.
	type Parameters: FheParameters;
}

/// A plaintext which will encode one (or more) value(s).
pub trait FhePlaintext
where
	Self: Sized + FheParametrized,
{
}

/// Encode a value into a plaintext.
pub trait FheEncoder<V>
where
	Self: FhePlaintext,
{
	/// The type of error returned.
	type Error;

	/// Attempt to encode a value within a [`FhePlaintext`].
	fn try_encode(value: V, par: &Arc<Self::Parameters>) -> Result<Self, Self::Error>;
}

/// Decode the value in the plaintext.
pub trait FheDecoder<P: FhePlaintext>
where
	Self: Sized,
{
	/// The type of error returned.
	type Error;

	/// Attempt to decode a [`FhePlaintext`] into a value.
	fn try_decode(pt: &P) -> Result<Self, Self::Error>;
}

/// A ciphertext which will encrypt a plaintext.
pub trait FheCiphertext
where
	Self: Sized + Serialize + FheParametrized + DeserializeParametrized,
{
}

/// Encrypt a plaintext into a ciphertext.
///
/// Encryption with a key-switching matrix is deterministic: all the
/// randomness was consumed when the key was generated.
pub trait FheEncrypter<P: FhePlaintext, C: FheCiphertext> {
	/// The type of error returned.
	type Error;

	/// Try to encrypt an [`FhePlaintext`] into an [`FheCiphertext`].
	fn try_encrypt(&self, pt: &P) -> Result<C, Self::Error>;
}

/// Decrypt a ciphertext into a plaintext
pub trait FheDecrypter<P: FhePlaintext, C: FheCiphertext> {
	/// The type of error returned.
	type Error;

	/// Try to decrypt an [`FheCiphertext`] into an [`FhePlaintext`].
	fn try_decrypt(&self, ct: &C) -> Result<P, Self::Error>;
}

/// Serialization.
pub trait Serialize {
	/// Serialize `Self` into a vector of bytes.
	fn to_bytes(&self) -> Vec<u8>;
}

/// Deserialization of a parametrized value.
pub trait DeserializeParametrized
where
	Self: Sized,
	Self: FheParametrized,
{
	/// The type of error returned.
	type Error;

	/// Attempt to deserialize from a vector of bytes
	fn from_bytes(bytes: &[u8], par: &Arc<Self::Parameters>) -> Result<Self, Self::Error>;
}
