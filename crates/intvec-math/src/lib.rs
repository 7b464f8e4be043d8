#![warn(missing_docs, unused_imports)]

//! Mathematical utilities for the intvec library: exact integer matrices over
//! arbitrary-precision integers and the powers-of-two gadget.

mod errors;
mod gadget;
mod matrix;

pub use errors::{Error, Result};
pub use gadget::Gadget;
pub use matrix::Matrix;
