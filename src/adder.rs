//! Carry-lookahead addition.
//!
//! [`Block`] is a 4-bit lookahead unit. [`add`] composes eight of them with a second lookahead level
//! over the blocks' group signals, so a block's incoming carry does not wait on the preceding block's
//! internal carries. [`add_rippled`] chains the same blocks through their actual carry-outs instead.

/// Propagate and generate signals of a 4-bit slice of the two addends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block {
	propagate: [bool; 4],
	generate: [bool; 4],
}

impl Block {
	/// Only the low four bits of `a` and `b` are used.
	pub fn new(a: u8, b: u8) -> Self {
		Self {
			propagate: core::array::from_fn(|k| ((a ^ b) >> k) & 1 != 0),
			generate: core::array::from_fn(|k| ((a & b) >> k) & 1 != 0),
		}
	}

	pub fn propagate(self) -> [bool; 4] {
		self.propagate
	}

	pub fn generate(self) -> [bool; 4] {
		self.generate
	}

	pub fn group_propagate(self) -> bool {
		let [p0, p1, p2, p3] = self.propagate;
		p0 & p1 & p2 & p3
	}

	pub fn group_generate(self) -> bool {
		let [_, p1, p2, p3] = self.propagate;
		let [g0, g1, g2, g3] = self.generate;
		g3 | (p3 & g2) | (p3 & p2 & g1) | (p3 & p2 & p1 & g0)
	}

	/// `c[0]` is `carry_in` and `c[4]` is the carry-out.
	///
	/// Every carry is a sum of products over the generate and propagate signals and `c[0]`,
	/// so none of them depends on another.
	pub fn carries(self, carry_in: bool) -> [bool; 5] {
		let [p0, p1, p2, p3] = self.propagate;
		let [g0, g1, g2, g3] = self.generate;
		let c0 = carry_in;
		[
			c0,
			g0 | (p0 & c0),
			g1 | (p1 & g0) | (p1 & p0 & c0),
			g2 | (p2 & g1) | (p2 & p1 & g0) | (p2 & p1 & p0 & c0),
			g3 | (p3 & g2) | (p3 & p2 & g1) | (p3 & p2 & p1 & g0) | (p3 & p2 & p1 & p0 & c0),
		]
	}

	/// Returns the 4-bit sum and the carry-out.
	pub fn add(self, carry_in: bool) -> (u8, bool) {
		let carries = self.carries(carry_in);
		let sum =
			self.propagate.into_iter().zip(carries)
			.enumerate()
			.fold(0_u8, |sum, (k, (propagate, carry))| sum | (u8::from(propagate ^ carry) << k));
		(sum, carries[4])
	}
}

/// Returns `(a + b + carry_in) mod 2^32` and the carry out of bit 31.
pub fn add(a: u32, b: u32, carry_in: bool) -> (u32, bool) {
	let blocks: [Block; 8] = core::array::from_fn(|k| Block::new(nibble_at(a, k), nibble_at(b, k)));

	// Second lookahead level: block carries only need the group signals.
	let mut block_carries = [carry_in; 9];
	for (k, block) in blocks.iter().enumerate() {
		block_carries[k + 1] = block.group_generate() | (block.group_propagate() & block_carries[k]);
	}

	let sum =
		blocks.into_iter().zip(block_carries)
		.enumerate()
		.fold(0_u32, |sum, (k, (block, carry_in))| {
			let (digit, _) = block.add(carry_in);
			sum | (u32::from(digit) << (4 * k))
		});
	(sum, block_carries[8])
}

/// Same contract as [`add`], but each block waits on the previous block's carry-out.
pub fn add_rippled(a: u32, b: u32, carry_in: bool) -> (u32, bool) {
	(0..8).fold((0_u32, carry_in), |(sum, carry_in), k| {
		let (digit, carry_out) = Block::new(nibble_at(a, k), nibble_at(b, k)).add(carry_in);
		(sum | (u32::from(digit) << (4 * k)), carry_out)
	})
}

fn nibble_at(value: u32, k: usize) -> u8 {
	#[allow(clippy::cast_possible_truncation)]
	let nibble = ((value >> (4 * k)) & 0xf) as u8;
	nibble
}
