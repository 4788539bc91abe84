use wallace_multiplier::{Inputs, LATENCY, Pipeline, baseline};

const MAX_LISTED_FAILURES: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Unit {
	Pipeline,
	Baseline,
}

impl std::fmt::Display for Unit {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Pipeline => f.write_str("pipeline"),
			Self::Baseline => f.write_str("baseline"),
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Mismatch {
	multiplicand: u16,
	multiplier: u16,
	expected: u32,
	actual: u32,
}

#[derive(Debug)]
pub(crate) struct Report {
	unit: Unit,
	passed: usize,
	failures: Vec<Mismatch>,
}

impl Report {
	fn new(unit: Unit) -> Self {
		Self { unit, passed: 0, failures: vec![] }
	}

	fn check(&mut self, multiplicand: u16, multiplier: u16, actual: u32) {
		let expected = u32::from(multiplicand) * u32::from(multiplier);
		if actual == expected {
			tracing::debug!(multiplicand, multiplier, actual, "pass");
			self.passed += 1;
		}
		else {
			tracing::warn!(multiplicand, multiplier, expected, actual, "FAIL");
			self.failures.push(Mismatch { multiplicand, multiplier, expected, actual });
		}
	}

	pub(crate) fn passed(&self) -> usize {
		self.passed
	}

	pub(crate) fn failed(&self) -> usize {
		self.failures.len()
	}

	pub(crate) fn all_passed(&self) -> bool {
		self.failures.is_empty()
	}
}

impl std::fmt::Display for Report {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {} passed, {} failed", self.unit, self.passed(), self.failed())?;
		if self.all_passed() {
			f.write_str(" - all passed")?;
			return Ok(());
		}

		for Mismatch { multiplicand, multiplier, expected, actual } in self.failures.iter().take(MAX_LISTED_FAILURES) {
			write!(f, "\n  {multiplicand} * {multiplier}: expected 0x{expected:08x}, got 0x{actual:08x}")?;
		}
		if let Some(unlisted) = self.failed().checked_sub(MAX_LISTED_FAILURES) && unlisted > 0 {
			write!(f, "\n  ... and {unlisted} more")?;
		}
		Ok(())
	}
}

/// Issues one vector per tick after an initial reset tick, then drains the pipeline with zeros.
/// Vector `k` is sampled on tick `k` and checked after tick `k + LATENCY - 1`.
pub(crate) fn run_pipeline(vectors: &[(u16, u16)]) -> Report {
	let _span = tracing::info_span!("run", unit = %Unit::Pipeline).entered();

	let mut pipeline: Pipeline = Default::default();
	pipeline.tick(Inputs::reset());

	let mut report = Report::new(Unit::Pipeline);

	for tick in 0..(vectors.len() + LATENCY - 1) {
		let (multiplicand, multiplier) = vectors.get(tick).copied().unwrap_or_default();
		pipeline.tick(Inputs::new(multiplicand, multiplier));
		tracing::trace!(tick = pipeline.ticks(), "\n{pipeline}");

		if let Some(k) = (tick + 1).checked_sub(LATENCY) {
			let (multiplicand, multiplier) = vectors[k];
			report.check(multiplicand, multiplier, pipeline.result());
		}
	}

	tracing::info!(ticks = pipeline.ticks(), passed = report.passed(), failed = report.failed(), "done");
	report
}

/// The baseline has no clock; each product is read as soon as it is computed.
pub(crate) fn run_baseline(vectors: &[(u16, u16)]) -> Report {
	let _span = tracing::info_span!("run", unit = %Unit::Baseline).entered();

	let mut report = Report::new(Unit::Baseline);
	for &(multiplicand, multiplier) in vectors {
		report.check(multiplicand, multiplier, baseline::multiply(multiplicand, multiplier));
	}

	tracing::info!(passed = report.passed(), failed = report.failed(), "done");
	report
}
