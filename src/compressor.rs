//! 4:2 compression and the three-level reduction tree built from it.
//!
//! A compressor is two carry-save adders in series: the first folds `in1`, `in2`, `in3` into a
//! sum and a shifted carry, the second folds those together with `in4`. The outputs always
//! satisfy `sum + carry == in1 + in2 + in3 + in4 (mod 2^32)`.

/// Bitwise majority: a bit is set where at least two of the three inputs have it set.
pub fn majority(a: u32, b: u32, c: u32) -> u32 {
	(a & b) | (a & c) | (b & c)
}

/// Returns `(sum, carry)`.
pub fn compress(in1: u32, in2: u32, in3: u32, in4: u32) -> (u32, u32) {
	let temp_sum = in1 ^ in2 ^ in3;
	let shifted_carry = majority(in1, in2, in3) << 1;

	let sum = temp_sum ^ in4 ^ shifted_carry;
	let carry = majority(temp_sum, in4, shifted_carry) << 1;
	(sum, carry)
}

/// 16 partial products -> 4 pairs. Compressor `k` takes rows `4k..4k + 4`.
pub fn level1(partial_products: [u32; 16]) -> [(u32, u32); 4] {
	core::array::from_fn(|k| {
		let rows = &partial_products[(4 * k)..][..4];
		compress(rows[0], rows[1], rows[2], rows[3])
	})
}

/// 4 pairs -> 2 pairs. Compressor `k` takes pairs `2k` and `2k + 1`.
pub fn level2(pairs: [(u32, u32); 4]) -> [(u32, u32); 2] {
	core::array::from_fn(|k| compress_pairs(pairs[2 * k], pairs[2 * k + 1]))
}

/// 2 pairs -> 1 pair.
pub fn level3(pairs: [(u32, u32); 2]) -> (u32, u32) {
	compress_pairs(pairs[0], pairs[1])
}

fn compress_pairs((sum0, carry0): (u32, u32), (sum1, carry1): (u32, u32)) -> (u32, u32) {
	compress(sum0, carry0, sum1, carry1)
}

#[cfg(test)]
mod tests {
	use super::{compress, level1, level2, level3, majority};

	#[test]
	fn majority_bits() {
		assert_eq!(majority(0b1100, 0b1010, 0b1001), 0b1000);
		assert_eq!(majority(0b0111, 0b0000, 0b0000), 0);
		assert_eq!(majority(u32::MAX, u32::MAX, 0), u32::MAX);
	}

	#[test]
	fn compress_preserves_sum() {
		static TESTS: &[(u32, u32, u32, u32)] = &[
			(0, 0, 0, 0),
			(1, 1, 1, 1),
			(1, 2, 3, 4),
			(u32::MAX, u32::MAX, u32::MAX, u32::MAX),
			(0x8000_0000, 0x8000_0000, 0x8000_0000, 0x8000_0000),
			(0xdead_beef, 0x0bad_f00d, 0xcafe_babe, 0x1234_5678),
			(0xffff_ffff, 1, 0, 0),
			(0x5555_5555, 0xaaaa_aaaa, 0x5555_5555, 0xaaaa_aaaa),
		];
		for &(in1, in2, in3, in4) in TESTS {
			let (sum, carry) = compress(in1, in2, in3, in4);
			let expected = in1.wrapping_add(in2).wrapping_add(in3).wrapping_add(in4);
			assert_eq!(sum.wrapping_add(carry), expected, "0x{in1:08x} 0x{in2:08x} 0x{in3:08x} 0x{in4:08x}");
			assert_eq!(carry & 1, 0);
		}
	}

	#[test]
	fn compress_all_ones() {
		// Both carry-save stages generate a carry in every column; the top carries fall off.
		let (sum, carry) = compress(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
		assert_eq!(sum, 0xffff_fffe);
		assert_eq!(carry, 0xffff_fffe);
		assert_eq!(sum.wrapping_add(carry), 0xffff_fffc);
	}

	#[test]
	fn tree_preserves_sum() {
		let rows: [u32; 16] = core::array::from_fn(|i| 0x9e37_79b9_u32.rotate_left(u32::try_from(i).unwrap()) ^ 0x0f0f_0f0f);
		let expected = rows.into_iter().fold(0_u32, u32::wrapping_add);

		let l1 = level1(rows);
		assert_eq!(l1.into_iter().fold(0_u32, |acc, (sum, carry)| acc.wrapping_add(sum).wrapping_add(carry)), expected);

		let l2 = level2(l1);
		assert_eq!(l2.into_iter().fold(0_u32, |acc, (sum, carry)| acc.wrapping_add(sum).wrapping_add(carry)), expected);

		let (sum, carry) = level3(l2);
		assert_eq!(sum.wrapping_add(carry), expected);
	}

	#[test]
	fn level1_groups_consecutive_rows() {
		let mut rows = [0_u32; 16];
		rows[4] = 3;
		rows[5] = 5;
		rows[15] = 0x100;
		let l1 = level1(rows);
		assert_eq!(l1[0], (0, 0));
		assert_eq!(l1[1].0.wrapping_add(l1[1].1), 8);
		assert_eq!(l1[2], (0, 0));
		assert_eq!(l1[3], (0x100, 0));
	}
}
