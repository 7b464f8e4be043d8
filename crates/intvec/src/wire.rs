//! Textual wire format for matrices, keys and ciphertexts.
//!
//! A matrix is carried as `{"rows":R,"cols":C,"datastr":["…",…]}`, where
//! `datastr` holds the `R·C` entries, in row-major order, as decimal strings.

use crate::{Ciphertext, Error, IntVecParameters, Plaintext, PrivateKey, PublicKey, Result};
use intvec_math::Matrix;
use intvec_traits::{DeserializeParametrized, Serialize};
use itertools::Itertools;
use num_bigint::BigInt;
use std::{str::FromStr, sync::Arc};

#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr {
	rows: usize,
	cols: usize,
	datastr: Vec<String>,
}

impl From<&Matrix> for MatrixRepr {
	fn from(m: &Matrix) -> Self {
		Self {
			rows: m.rows(),
			cols: m.columns(),
			datastr: m.data().iter().map(|v| v.to_string()).collect_vec(),
		}
	}
}

impl TryFrom<MatrixRepr> for Matrix {
	type Error = Error;

	fn try_from(repr: MatrixRepr) -> Result<Self> {
		let expected = repr.rows.checked_mul(repr.cols).ok_or_else(|| {
			Error::SerializationError(format!("{}x{} is too large", repr.rows, repr.cols))
		})?;
		if repr.datastr.len() != expected {
			return Err(Error::SerializationError(format!(
				"Expected {} entries for a {}x{} matrix, found {}",
				expected,
				repr.rows,
				repr.cols,
				repr.datastr.len()
			)));
		}
		let data = repr
			.datastr
			.iter()
			.map(|s| {
				BigInt::from_str(s)
					.map_err(|e| Error::SerializationError(format!("Invalid entry {s:?}: {e}")))
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Matrix::new(repr.rows, repr.cols, data))
	}
}

fn matrix_to_bytes(m: &Matrix) -> Vec<u8> {
	serde_json::to_vec(&MatrixRepr::from(m)).expect("a matrix always serializes to JSON")
}

fn matrix_from_bytes(bytes: &[u8]) -> Result<Matrix> {
	let repr: MatrixRepr =
		serde_json::from_slice(bytes).map_err(|e| Error::SerializationError(e.to_string()))?;
	Matrix::try_from(repr)
}

fn column_from_bytes(bytes: &[u8]) -> Result<Matrix> {
	let m = matrix_from_bytes(bytes)?;
	if m.columns() > 1 {
		return Err(Error::SerializationError(format!(
			"Expected a column vector, found {} columns",
			m.columns()
		)));
	}
	Ok(m)
}

impl Serialize for PrivateKey {
	fn to_bytes(&self) -> Vec<u8> {
		matrix_to_bytes(&self.s)
	}
}

impl DeserializeParametrized for PrivateKey {
	type Error = Error;

	fn from_bytes(bytes: &[u8], par: &Arc<IntVecParameters>) -> Result<Self> {
		Ok(Self {
			par: par.clone(),
			s: matrix_from_bytes(bytes)?,
		})
	}
}

impl Serialize for PublicKey {
	fn to_bytes(&self) -> Vec<u8> {
		matrix_to_bytes(&self.m)
	}
}

impl DeserializeParametrized for PublicKey {
	type Error = Error;

	fn from_bytes(bytes: &[u8], par: &Arc<IntVecParameters>) -> Result<Self> {
		Ok(Self {
			par: par.clone(),
			m: matrix_from_bytes(bytes)?,
		})
	}
}

impl Serialize for Ciphertext {
	fn to_bytes(&self) -> Vec<u8> {
		matrix_to_bytes(&self.c)
	}
}

impl DeserializeParametrized for Ciphertext {
	type Error = Error;

	fn from_bytes(bytes: &[u8], par: &Arc<IntVecParameters>) -> Result<Self> {
		Ok(Ciphertext::from_matrix(column_from_bytes(bytes)?, par))
	}
}

impl Serialize for Plaintext {
	fn to_bytes(&self) -> Vec<u8> {
		matrix_to_bytes(&self.m)
	}
}

impl DeserializeParametrized for Plaintext {
	type Error = Error;

	fn from_bytes(bytes: &[u8], par: &Arc<IntVecParameters>) -> Result<Self> {
		Ok(Plaintext::from_matrix(column_from_bytes(bytes)?, par))
	}
}
