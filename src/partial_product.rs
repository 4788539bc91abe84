/// Row `i` holds `multiplicand[j] & multiplier[i]` at bit `j`, zero-extended to 32 bits and then shifted left by `i`.
pub fn partial_products(multiplicand: u16, multiplier: u16) -> [u32; 16] {
	core::array::from_fn(|i| {
		let multiplier_bit = (multiplier >> i) & 1;
		let row = (0..16_u32).fold(0_u16, |row, j| row | ((((multiplicand >> j) & 1) & multiplier_bit) << j));
		u32::from(row) << i
	})
}
