use rand_core::{RngCore as _, SeedableRng as _};

use wallace_multiplier::{Inputs, OperandError};

pub(crate) static SCENARIOS: &[(u16, u16)] = &[
	(0, 0),
	(1, 1),
	(255, 255),
	(0xffff, 1),
	(0xffff, 0xffff),
	(1234, 5678),
];

/// The fixed scenarios, then `operands` in order, then `random` seeded pseudo-random pairs.
pub(crate) fn collect(operands: &[(u32, u32)], random: usize, seed: u64) -> Result<Vec<(u16, u16)>, OperandError> {
	let mut vectors = SCENARIOS.to_vec();

	for &(multiplicand, multiplier) in operands {
		let inputs = Inputs::try_new(multiplicand, multiplier)?;
		vectors.push((inputs.multiplicand, inputs.multiplier));
	}

	let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
	vectors.extend(std::iter::repeat_with(|| {
		let [a0, a1, b0, b1] = rng.next_u32().to_le_bytes();
		(u16::from_le_bytes([a0, a1]), u16::from_le_bytes([b0, b1]))
	}).take(random));

	Ok(vectors)
}

#[cfg(test)]
mod tests {
	use super::{SCENARIOS, collect};
	use wallace_multiplier::OperandError;

	#[test]
	fn order() {
		let vectors = collect(&[(2, 3), (65_535, 0)], 5, 0).unwrap();
		assert_eq!(vectors.len(), SCENARIOS.len() + 2 + 5);
		assert_eq!(vectors[..SCENARIOS.len()], SCENARIOS[..]);
		assert_eq!(vectors[SCENARIOS.len()..][..2], [(2, 3), (0xffff, 0)]);
	}

	#[test]
	fn random_is_seeded() {
		assert_eq!(collect(&[], 100, 7).unwrap(), collect(&[], 100, 7).unwrap());
		assert_ne!(collect(&[], 100, 7).unwrap(), collect(&[], 100, 8).unwrap());
	}

	#[test]
	fn out_of_range() {
		assert_eq!(collect(&[(2, 3), (0x1_0000, 3)], 0, 0), Err(OperandError::MultiplicandOutOfRange(0x1_0000)));
		assert_eq!(collect(&[(2, 0x2_0000)], 0, 0), Err(OperandError::MultiplierOutOfRange(0x2_0000)));
	}
}
