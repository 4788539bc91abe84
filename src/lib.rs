//! A fixed-latency pipelined 16x16 -> 32 unsigned multiplier.
//!
//! The sixteen partial products are reduced by a three-level tree of 4:2 compressors and the last
//! (sum, carry) pair is resolved by a two-level carry-lookahead adder. Every stage is followed by a
//! register rank, so a result becomes visible [`LATENCY`] ticks after its operands are sampled.

#![no_std]

pub mod adder;

pub mod baseline;

pub mod compressor;

mod partial_product;
pub use partial_product::partial_products;

mod pipeline;
pub use pipeline::{Inputs, LATENCY, Pipeline};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandError {
	MultiplicandOutOfRange(u32),
	MultiplierOutOfRange(u32),
}

impl core::error::Error for OperandError {}

impl core::fmt::Display for OperandError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::MultiplicandOutOfRange(value) => write!(f, "multiplicand {value} does not fit in 16 bits"),
			Self::MultiplierOutOfRange(value) => write!(f, "multiplier {value} does not fit in 16 bits"),
		}
	}
}

#[cfg(test)]
mod tests {
	extern crate std;
	use std::prelude::v1::*;

	#[test]
	fn operand_error_display() {
		static TESTS: &[(super::OperandError, &str)] = &[
			(super::OperandError::MultiplicandOutOfRange(65_536), "multiplicand 65536 does not fit in 16 bits"),
			(super::OperandError::MultiplierOutOfRange(u32::MAX), "multiplier 4294967295 does not fit in 16 bits"),
		];
		for &(err, expected) in TESTS {
			assert_eq!(err.to_string(), expected);
		}
	}
}
