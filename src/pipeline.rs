use crate::{OperandError, adder, compressor, partial_products};

/// Ticks from the one that samples an operand pair to the one after which its product is visible,
/// counting both.
pub const LATENCY: usize = 6;

/// Everything sampled at one clock edge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Inputs {
	pub multiplicand: u16,
	pub multiplier: u16,
	pub reset: bool,
}

impl Inputs {
	pub fn new(multiplicand: u16, multiplier: u16) -> Self {
		Self { multiplicand, multiplier, reset: false }
	}

	pub fn reset() -> Self {
		Self { multiplicand: 0, multiplier: 0, reset: true }
	}

	/// Operands wider than 16 bits are rejected rather than truncated.
	pub fn try_new(multiplicand: u32, multiplier: u32) -> Result<Self, OperandError> {
		let multiplicand = multiplicand.try_into().map_err(|_| OperandError::MultiplicandOutOfRange(multiplicand))?;
		let multiplier = multiplier.try_into().map_err(|_| OperandError::MultiplierOutOfRange(multiplier))?;
		Ok(Self::new(multiplicand, multiplier))
	}
}

/// The six register ranks. The all-zero value is the reset state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Ranks {
	operands: (u16, u16),
	partial_products: [u32; 16],
	level1: [(u32, u32); 4],
	level2: [(u32, u32); 2],
	level3: (u32, u32),
	result: u32,
}

impl Ranks {
	/// Every field is computed from `self` as it was before the edge.
	fn next(&self, inputs: Inputs) -> Self {
		if inputs.reset {
			return Self::default();
		}

		let (multiplicand, multiplier) = self.operands;
		let (sum, carry) = self.level3;
		Self {
			operands: (inputs.multiplicand, inputs.multiplier),
			partial_products: partial_products(multiplicand, multiplier),
			level1: compressor::level1(self.partial_products),
			level2: compressor::level2(self.level1),
			level3: compressor::level3(self.level2),
			result: adder::add(sum, carry, false).0,
		}
	}
}

#[derive(Debug, Default)]
pub struct Pipeline {
	ranks: Ranks,
	ticks: u64,
}

impl Pipeline {
	/// One clock edge. All ranks commit together.
	pub fn tick(&mut self, inputs: Inputs) {
		let next = self.ranks.next(inputs);
		self.ranks = next;
		self.ticks += 1;
	}

	pub fn result(&self) -> u32 {
		self.ranks.result
	}

	/// Number of clock edges seen so far, including reset ticks.
	pub fn ticks(&self) -> u64 {
		self.ticks
	}
}

impl core::fmt::Display for Pipeline {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let Ranks { operands: (multiplicand, multiplier), partial_products, level1, level2, level3, result } = &self.ranks;

		writeln!(f, "operands: 0x{multiplicand:04x} 0x{multiplier:04x}")?;
		for (i, rows) in partial_products.chunks(4).enumerate() {
			writeln!(f, "pp[{:2}..{:2}]: 0x{:08x} 0x{:08x} 0x{:08x} 0x{:08x}", i * 4, i * 4 + 4, rows[0], rows[1], rows[2], rows[3])?;
		}
		for (name, pairs) in [("level1", &level1[..]), ("level2", &level2[..]), ("level3", core::slice::from_ref(level3))] {
			write!(f, "{name}:")?;
			for (sum, carry) in pairs {
				write!(f, " (0x{sum:08x}, 0x{carry:08x})")?;
			}
			writeln!(f)?;
		}
		writeln!(f, "result:   0x{result:08x}")?;
		Ok(())
	}
}
