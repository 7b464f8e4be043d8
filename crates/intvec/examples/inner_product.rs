//! Encrypts two vectors of length 10 and computes their inner product on the
//! ciphertexts.
//!
//! Run with `RUST_LOG=debug cargo run --example inner_product` to follow key
//! generation.

use console::style;
use intvec::{generate_key_pair, inner_product, IntVecParameters, Plaintext};
use intvec_traits::{FheDecoder, FheDecrypter, FheEncoder, FheEncrypter, Serialize};
use itertools::Itertools;
use log::info;
use rand::thread_rng;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::Builder::from_default_env()
		.filter_level(log::LevelFilter::Info)
		.init();

	let par = IntVecParameters::default_arc();
	let mut rng = thread_rng();

	// plaintext length and extra ciphertext length
	let n = 10;
	let m = 5;

	let (sk, pk) = generate_key_pair(&par, n, m, 100, &mut rng);
	info!("public key: {} bytes", pk.to_bytes().len());

	let x = (0..n as i64).collect_vec();
	let y = vec![2i64; n];
	let c1 = pk.try_encrypt(&Plaintext::try_encode(x.as_slice(), &par)?)?;
	let c2 = pk.try_encrypt(&Plaintext::try_encode(y.as_slice(), &par)?)?;
	info!("x = {:?}", x);
	info!("y = {:?}", y);

	// keys for the inner product
	let (sk_ip, pk_ip) = sk.inner_product_long_key(&sk)?.inner_product_key_pair(&mut rng);

	let ct = inner_product(&c1, &c2, &pk_ip)?;
	let result = Vec::<i64>::try_decode(&sk_ip.try_decrypt(&ct)?)?;
	let expected: i64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();

	println!(
		"{} <x, y> = {} (expected {})",
		style("inner product").green().bold(),
		result[0],
		expected
	);
	if result[0] != expected {
		return Err(format!("decrypted {} instead of {}", result[0], expected).into());
	}
	Ok(())
}
