//! Unpipelined reference multiplier.
//!
//! Accumulates the partial products one after another with a block-rippled adder. There is no
//! clock: the product is available as soon as the call returns.

use crate::{adder, partial_products};

pub fn multiply(multiplicand: u16, multiplier: u16) -> u32 {
	partial_products(multiplicand, multiplier)
		.into_iter()
		.fold(0, |product, row| adder::add_rippled(product, row, false).0)
}

#[cfg(test)]
mod tests {
	#[allow(clippy::unreadable_literal)]
	#[test]
	fn it_works() {
		static TESTS: &[(u16, u16, u32)] = &[
			(0, 0, 0),
			(1, 1, 1),
			(255, 255, 65025),
			(65535, 1, 65535),
			(1, 65535, 65535),
			(65535, 65535, 4294836225),
			(1234, 5678, 7006652),
			(0x8000, 0x8000, 0x4000_0000),
		];
		for &(multiplicand, multiplier, expected) in TESTS {
			assert_eq!(super::multiply(multiplicand, multiplier), expected, "{multiplicand} * {multiplier}");
		}
	}
}
