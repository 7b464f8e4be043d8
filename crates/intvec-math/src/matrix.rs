//! Fixed-shape matrices of arbitrary-precision integers.

use std::ops::{Add, AddAssign, Mul, Range, Sub};

use crate::{Error, Result};
use itertools::{izip, Itertools};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng, RngCore};

/// A `rows × columns` matrix of `BigInt`, stored row-major in a single flat
/// vector of exactly `rows * columns` entries.
///
/// Every operator returns a new matrix. The only in-place mutation is
/// [`Matrix::set`], which needs a mutable borrow; a matrix shared across
/// threads behind `&` is therefore read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
	rows: usize,
	columns: usize,
	data: Vec<BigInt>,
}

impl Matrix {
	/// Creates a matrix of the given shape from row-major data.
	///
	/// Aborts if `data.len() != rows * columns`.
	pub fn new(rows: usize, columns: usize, data: Vec<BigInt>) -> Self {
		assert_eq!(
			data.len(),
			rows * columns,
			"Length of data does not match {rows} rows and {columns} columns"
		);
		Self {
			rows,
			columns,
			data,
		}
	}

	/// Creates a zero matrix.
	pub fn zero(rows: usize, columns: usize) -> Self {
		Self {
			rows,
			columns,
			data: vec![BigInt::zero(); rows * columns],
		}
	}

	/// Creates the identity matrix of order `n`.
	pub fn identity(n: usize) -> Self {
		let mut m = Self::zero(n, n);
		m.data
			.iter_mut()
			.step_by(n + 1)
			.for_each(|d| *d = BigInt::one());
		m
	}

	/// Creates a column vector from its entries.
	pub fn from_column(data: Vec<BigInt>) -> Self {
		Self {
			rows: data.len(),
			columns: 1,
			data,
		}
	}

	/// Creates a matrix from a sequence of rows.
	///
	/// Aborts if the rows do not all have the same length.
	pub fn from_rows(rows: &[Vec<BigInt>]) -> Self {
		let columns = rows.first().map_or(0, |r| r.len());
		assert!(
			rows.iter().all(|r| r.len() == columns),
			"Rows must all have {columns} entries"
		);
		Self::new(rows.len(), columns, rows.concat())
	}

	/// Samples a matrix with entries drawn uniformly from `[0, bound)`.
	///
	/// Aborts if `bound` is zero.
	pub fn random<R: RngCore + CryptoRng>(
		rows: usize,
		columns: usize,
		bound: u64,
		rng: &mut R,
	) -> Self {
		assert!(bound > 0, "Sampling bound must be positive");
		let data = (0..rows * columns)
			.map(|_| BigInt::from(rng.gen_range(0..bound)))
			.collect_vec();
		Self::new(rows, columns, data)
	}

	/// Number of rows.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Number of columns.
	pub fn columns(&self) -> usize {
		self.columns
	}

	/// Returns `(rows, columns)`.
	pub fn shape(&self) -> (usize, usize) {
		(self.rows, self.columns)
	}

	/// Row-major view of all the entries.
	pub fn data(&self) -> &[BigInt] {
		&self.data
	}

	fn index(&self, r: usize, c: usize) -> usize {
		assert!(
			r < self.rows && c < self.columns,
			"Index ({r}, {c}) out of range for a {}x{} matrix",
			self.rows,
			self.columns
		);
		r * self.columns + c
	}

	/// Returns the entry at `(r, c)`.
	///
	/// Aborts if the coordinate is out of range.
	pub fn get(&self, r: usize, c: usize) -> &BigInt {
		&self.data[self.index(r, c)]
	}

	/// Overwrites the entry at `(r, c)`.
	///
	/// Aborts if the coordinate is out of range.
	pub fn set(&mut self, r: usize, c: usize, value: BigInt) {
		let i = self.index(r, c);
		self.data[i] = value;
	}

	/// Returns row `i` as a slice.
	///
	/// Aborts if `i` is out of range.
	pub fn row(&self, i: usize) -> &[BigInt] {
		assert!(i < self.rows, "Row {i} out of range");
		&self.data[i * self.columns..(i + 1) * self.columns]
	}

	/// Returns a copy of column `j`.
	///
	/// Aborts if `j` is out of range.
	pub fn column(&self, j: usize) -> Vec<BigInt> {
		assert!(j < self.columns, "Column {j} out of range");
		(0..self.rows).map(|i| self.get(i, j).clone()).collect()
	}

	/// Converts to a sequence of rows.
	pub fn to_rows(&self) -> Vec<Vec<BigInt>> {
		(0..self.rows).map(|i| self.row(i).to_vec()).collect()
	}

	/// Returns the entries of a column vector.
	///
	/// Aborts if the matrix has more than one column.
	pub fn to_column(&self) -> Vec<BigInt> {
		assert!(self.columns <= 1, "Not a column vector");
		self.data.clone()
	}

	/// Returns all entries, in row-major order, as a column vector.
	pub fn flatten(&self) -> Self {
		Self::from_column(self.data.clone())
	}

	/// Returns the transpose.
	pub fn transpose(&self) -> Self {
		let data = (0..self.columns)
			.flat_map(|j| (0..self.rows).map(move |i| (i, j)))
			.map(|(i, j)| self.get(i, j).clone())
			.collect_vec();
		Self::new(self.columns, self.rows, data)
	}

	/// Returns a copy with `row` appended at the bottom.
	///
	/// Aborts if `row.len()` differs from the number of columns.
	pub fn append_row(&self, row: &[BigInt]) -> Self {
		assert_eq!(row.len(), self.columns, "Row length mismatch");
		let mut data = self.data.clone();
		data.extend_from_slice(row);
		Self::new(self.rows + 1, self.columns, data)
	}

	/// Returns a copy with `column` appended on the right.
	///
	/// Aborts if `column.len()` differs from the number of rows.
	pub fn append_column(&self, column: &[BigInt]) -> Self {
		assert_eq!(column.len(), self.rows, "Column length mismatch");
		let mut data = Vec::with_capacity(self.rows * (self.columns + 1));
		for (i, c) in column.iter().enumerate() {
			data.extend_from_slice(self.row(i));
			data.push(c.clone());
		}
		Self::new(self.rows, self.columns + 1, data)
	}

	/// Places `other` to the right of `self`, i.e. `[self | other]`.
	///
	/// Returns an error if the row counts differ.
	pub fn concat_horizontal(&self, other: &Self) -> Result<Self> {
		if self.rows != other.rows {
			return Err(Error::RowCountMismatch {
				left: self.rows,
				right: other.rows,
			});
		}
		let mut data = Vec::with_capacity(self.rows * (self.columns + other.columns));
		for i in 0..self.rows {
			data.extend_from_slice(self.row(i));
			data.extend_from_slice(other.row(i));
		}
		Ok(Self::new(self.rows, self.columns + other.columns, data))
	}

	/// Places `other` below `self`.
	///
	/// Aborts if the column counts differ.
	pub fn concat_vertical(&self, other: &Self) -> Self {
		assert_eq!(self.columns, other.columns, "Column count mismatch");
		let mut data = self.data.clone();
		data.extend_from_slice(&other.data);
		Self::new(self.rows + other.rows, self.columns, data)
	}

	/// Returns the block made of the columns in `range`.
	///
	/// Aborts if the range exceeds the number of columns.
	pub fn slice_columns(&self, range: Range<usize>) -> Self {
		assert!(
			range.start <= range.end && range.end <= self.columns,
			"Column range {range:?} out of range"
		);
		let width = range.end - range.start;
		let data = (0..self.rows)
			.flat_map(|i| self.row(i)[range.clone()].iter().cloned())
			.collect_vec();
		Self::new(self.rows, width, data)
	}

	/// Multiplies every entry by `c`.
	pub fn scalar_mul(&self, c: &BigInt) -> Self {
		let data = self.data.iter().map(|d| d * c).collect_vec();
		Self::new(self.rows, self.columns, data)
	}

	fn assert_same_shape(&self, other: &Self) {
		assert_eq!(
			self.shape(),
			other.shape(),
			"Matrices do not have the same shape"
		);
	}
}

impl Add<&Matrix> for &Matrix {
	type Output = Matrix;

	/// Aborts if the shapes differ.
	fn add(self, rhs: &Matrix) -> Matrix {
		self.assert_same_shape(rhs);
		let data = izip!(&self.data, &rhs.data)
			.map(|(a, b)| a + b)
			.collect_vec();
		Matrix::new(self.rows, self.columns, data)
	}
}

impl AddAssign<&Matrix> for Matrix {
	fn add_assign(&mut self, rhs: &Matrix) {
		self.assert_same_shape(rhs);
		izip!(&mut self.data, &rhs.data).for_each(|(a, b)| *a += b);
	}
}

impl Sub<&Matrix> for &Matrix {
	type Output = Matrix;

	/// Aborts if the shapes differ.
	fn sub(self, rhs: &Matrix) -> Matrix {
		self.assert_same_shape(rhs);
		let data = izip!(&self.data, &rhs.data)
			.map(|(a, b)| a - b)
			.collect_vec();
		Matrix::new(self.rows, self.columns, data)
	}
}

impl Mul<&BigInt> for &Matrix {
	type Output = Matrix;

	fn mul(self, rhs: &BigInt) -> Matrix {
		self.scalar_mul(rhs)
	}
}

impl Mul<&Matrix> for &Matrix {
	type Output = Matrix;

	/// Matrix product, accumulated with the plain triple loop.
	///
	/// Aborts if `self.columns() != rhs.rows()`.
	fn mul(self, rhs: &Matrix) -> Matrix {
		assert_eq!(
			self.columns, rhs.rows,
			"Inner dimensions do not match for the matrix product"
		);
		let mut out = Matrix::zero(self.rows, rhs.columns);
		for i in 0..self.rows {
			let lhs_row = self.row(i);
			for j in 0..rhs.columns {
				let acc = &mut out.data[i * rhs.columns + j];
				for (k, a) in lhs_row.iter().enumerate() {
					*acc += a * &rhs.data[k * rhs.columns + j];
				}
			}
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::Matrix;
	use crate::Error;
	use num_bigint::BigInt;
	use proptest::{collection::vec as prop_vec, prelude::*};
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	fn m(rows: usize, columns: usize, values: &[i64]) -> Matrix {
		Matrix::new(rows, columns, values.iter().map(|v| BigInt::from(*v)).collect())
	}

	fn matrix_strategy(rows: usize, columns: usize) -> impl Strategy<Value = Matrix> {
		prop_vec(any::<i64>(), rows * columns)
			.prop_map(move |v| m(rows, columns, &v))
	}

	#[test]
	fn constructors() {
		assert_eq!(Matrix::zero(2, 3).data(), vec![BigInt::from(0); 6]);
		assert_eq!(Matrix::identity(3), m(3, 3, &[1, 0, 0, 0, 1, 0, 0, 0, 1]));
		assert_eq!(Matrix::identity(0).shape(), (0, 0));
		assert_eq!(
			Matrix::from_rows(&[
				vec![BigInt::from(1), BigInt::from(2)],
				vec![BigInt::from(3), BigInt::from(4)]
			]),
			m(2, 2, &[1, 2, 3, 4])
		);
		assert_eq!(
			Matrix::from_column(vec![BigInt::from(7), BigInt::from(8)]).shape(),
			(2, 1)
		);
	}

	#[test]
	#[should_panic]
	fn new_with_wrong_length_aborts() {
		m(2, 2, &[1, 2, 3]);
	}

	#[test]
	fn get_set_row_column() {
		let mut a = m(2, 3, &[1, 2, 3, 4, 5, 6]);
		assert_eq!(a.get(1, 2), &BigInt::from(6));
		a.set(0, 1, BigInt::from(-9));
		assert_eq!(a.row(0), &[1, -9, 3].map(BigInt::from));
		assert_eq!(a.column(1), vec![BigInt::from(-9), BigInt::from(5)]);
		assert_eq!(a.to_rows()[1], [4, 5, 6].map(BigInt::from).to_vec());
	}

	#[test]
	#[should_panic]
	fn get_out_of_range_aborts() {
		m(2, 2, &[1, 2, 3, 4]).get(2, 0);
	}

	#[test]
	#[should_panic]
	fn set_out_of_range_aborts() {
		m(2, 2, &[1, 2, 3, 4]).set(0, 2, BigInt::from(1));
	}

	#[test]
	fn append_and_concat() {
		let a = m(2, 2, &[1, 2, 3, 4]);
		assert_eq!(
			a.append_row(&[5, 6].map(BigInt::from)),
			m(3, 2, &[1, 2, 3, 4, 5, 6])
		);
		assert_eq!(
			a.append_column(&[5, 6].map(BigInt::from)),
			m(2, 3, &[1, 2, 5, 3, 4, 6])
		);
		assert_eq!(
			a.concat_horizontal(&m(2, 1, &[9, 8])),
			Ok(m(2, 3, &[1, 2, 9, 3, 4, 8]))
		);
		assert_eq!(
			a.concat_horizontal(&m(1, 2, &[9, 8])),
			Err(Error::RowCountMismatch { left: 2, right: 1 })
		);
		assert_eq!(
			a.concat_vertical(&m(1, 2, &[9, 8])),
			m(3, 2, &[1, 2, 3, 4, 9, 8])
		);
	}

	#[test]
	#[should_panic]
	fn concat_vertical_with_wrong_columns_aborts() {
		m(2, 2, &[1, 2, 3, 4]).concat_vertical(&m(1, 3, &[1, 2, 3]));
	}

	#[test]
	fn slice_and_flatten() {
		let a = m(2, 3, &[1, 2, 3, 4, 5, 6]);
		assert_eq!(a.slice_columns(1..3), m(2, 2, &[2, 3, 5, 6]));
		assert_eq!(a.slice_columns(3..3).shape(), (2, 0));
		assert_eq!(a.flatten(), m(6, 1, &[1, 2, 3, 4, 5, 6]));
		assert_eq!(a.flatten().to_column().len(), 6);
	}

	#[test]
	fn arithmetic() {
		let a = m(2, 2, &[1, 2, 3, 4]);
		let b = m(2, 2, &[5, -6, 7, 8]);
		assert_eq!(&a + &b, m(2, 2, &[6, -4, 10, 12]));
		assert_eq!(&a - &b, m(2, 2, &[-4, 8, -4, -4]));
		assert_eq!(&a * &BigInt::from(-2), m(2, 2, &[-2, -4, -6, -8]));
		assert_eq!(&a * &b, m(2, 2, &[19, 10, 43, 14]));
		assert_eq!(
			&m(1, 3, &[1, 2, 3]) * &m(3, 1, &[4, 5, 6]),
			m(1, 1, &[32])
		);

		let mut c = a.clone();
		c += &b;
		assert_eq!(c, &a + &b);
	}

	#[test]
	fn no_overflow() {
		let big: BigInt = BigInt::from(u64::MAX) << 64;
		let a = Matrix::new(1, 1, vec![big.clone()]);
		assert_eq!((&a * &a).get(0, 0), &(&big * &big));
	}

	#[test]
	#[should_panic]
	fn add_mismatched_shapes_aborts() {
		let _ = &m(2, 2, &[1, 2, 3, 4]) + &m(1, 4, &[1, 2, 3, 4]);
	}

	#[test]
	#[should_panic]
	fn sub_mismatched_shapes_aborts() {
		let _ = &m(2, 2, &[1, 2, 3, 4]) - &m(4, 1, &[1, 2, 3, 4]);
	}

	#[test]
	#[should_panic]
	fn product_mismatched_shapes_aborts() {
		let _ = &m(2, 3, &[1, 2, 3, 4, 5, 6]) * &m(2, 3, &[1, 2, 3, 4, 5, 6]);
	}

	#[test]
	fn random_is_bounded() {
		let mut rng = ChaCha8Rng::seed_from_u64(0);
		let r = Matrix::random(5, 7, 10, &mut rng);
		assert_eq!(r.shape(), (5, 7));
		assert!(r
			.data()
			.iter()
			.all(|v| *v >= BigInt::from(0) && *v < BigInt::from(10)));
	}

	#[test]
	fn random_is_reproducible_under_a_seed() {
		let a = Matrix::random(3, 4, 1000, &mut ChaCha8Rng::seed_from_u64(5));
		let b = Matrix::random(3, 4, 1000, &mut ChaCha8Rng::seed_from_u64(5));
		let c = Matrix::random(3, 4, 1000, &mut ChaCha8Rng::seed_from_u64(6));
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	proptest! {
		#[test]
		fn transpose_is_an_involution(a in matrix_strategy(3, 4)) {
			prop_assert_eq!(a.transpose().shape(), (4, 3));
			prop_assert_eq!(a.transpose().transpose(), a);
		}

		#[test]
		fn product_transpose_law(a in matrix_strategy(2, 3), b in matrix_strategy(3, 4)) {
			prop_assert_eq!((&a * &b).transpose(), &b.transpose() * &a.transpose());
		}

		#[test]
		fn identity_is_neutral(a in matrix_strategy(3, 3)) {
			prop_assert_eq!(&Matrix::identity(3) * &a, a.clone());
			prop_assert_eq!(&a * &Matrix::identity(3), a);
		}

		#[test]
		fn add_then_sub(a in matrix_strategy(2, 5), b in matrix_strategy(2, 5)) {
			prop_assert_eq!(&(&a + &b) - &b, a);
		}

		#[test]
		fn rows_round_trip(a in matrix_strategy(4, 2)) {
			prop_assert_eq!(Matrix::from_rows(&a.to_rows()), a);
		}
	}
}
