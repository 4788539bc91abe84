//! Drives operand vectors through the pipelined multiplier and the baseline multiplier,
//! and compares every result against native multiplication.
//!
//! Example:
//!
//!     MULTIPLIER_LOG=debug cargo run -p simulator -- --random 10000 --seed 42 1234x5678

mod harness;

mod vectors;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let log_level = match std::env::var_os("MULTIPLIER_LOG") {
		Some(var) if var.to_str() == Some("debug") => tracing::Level::DEBUG,
		Some(var) if var.to_str() == Some("trace") => tracing::Level::TRACE,
		_ => tracing::Level::INFO,
	};
	tracing_subscriber::fmt()
		.with_max_level(log_level)
		.with_writer(std::io::stderr)
		.init();

	let mut args = std::env::args_os();
	let argv0 = args.next().unwrap_or_else(|| env!("CARGO_BIN_NAME").into());
	let Options { units, random, seed, operands } = parse_args(args, &argv0);

	let vectors = vectors::collect(&operands, random, seed)?;
	tracing::info!(vectors = vectors.len(), seed, "collected vectors");

	let mut reports = vec![];
	if units != Units::BaselineOnly {
		reports.push(harness::run_pipeline(&vectors));
	}
	if units != Units::PipelineOnly {
		reports.push(harness::run_baseline(&vectors));
	}

	for report in &reports {
		println!("{report}");
	}

	if !reports.iter().all(harness::Report::all_passed) {
		std::process::exit(1);
	}

	Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Units {
	Both,
	PipelineOnly,
	BaselineOnly,
}

struct Options {
	units: Units,
	random: usize,
	seed: u64,
	operands: Vec<(u32, u32)>,
}

fn parse_args(mut args: impl Iterator<Item = std::ffi::OsString>, argv0: &std::ffi::OsStr) -> Options {
	let mut units = Units::Both;
	let mut random = 1000;
	let mut seed = 0;
	let mut operands = vec![];

	while let Some(opt) = args.next() {
		match opt.to_str() {
			Some("--help") => {
				write_usage(std::io::stdout(), argv0);
				std::process::exit(0);
			},

			Some("--") => {
				for opt in &mut args {
					let Some(pair) = opt.to_str().and_then(parse_operands) else { write_usage_and_crash(argv0); };
					operands.push(pair);
				}
				break;
			},

			Some("--pipeline-only") if units == Units::Both => units = Units::PipelineOnly,

			Some("--baseline-only") if units == Units::Both => units = Units::BaselineOnly,

			Some("--random") => match args.next().as_deref().and_then(std::ffi::OsStr::to_str).map(str::parse) {
				Some(Ok(value)) => random = value,
				_ => write_usage_and_crash(argv0),
			},

			Some("--seed") => match args.next().as_deref().and_then(std::ffi::OsStr::to_str).map(str::parse) {
				Some(Ok(value)) => seed = value,
				_ => write_usage_and_crash(argv0),
			},

			Some(value) => {
				let Some(pair) = parse_operands(value) else { write_usage_and_crash(argv0); };
				operands.push(pair);
			},

			None => write_usage_and_crash(argv0),
		}
	}

	Options { units, random, seed, operands }
}

/// `<multiplicand>x<multiplier>`. The range of each operand is checked later.
fn parse_operands(s: &str) -> Option<(u32, u32)> {
	let (multiplicand, multiplier) = s.split_once('x')?;
	Some((multiplicand.parse().ok()?, multiplier.parse().ok()?))
}

fn write_usage_and_crash(argv0: &std::ffi::OsStr) -> ! {
	write_usage(std::io::stderr(), argv0);
	std::process::exit(1);
}

fn write_usage(mut w: impl std::io::Write, argv0: &std::ffi::OsStr) {
	_ = writeln!(
		w,
		"Usage: {} [ --pipeline-only | --baseline-only ] [ --random <count> ] [ --seed <seed> ] [ -- ] [ <a>x<b> ... ]",
		argv0.to_string_lossy(),
	);
}

#[cfg(test)]
mod tests {
	#[test]
	fn parse_operands() {
		static TESTS: &[(&str, Option<(u32, u32)>)] = &[
			("1234x5678", Some((1234, 5678))),
			("0x0", Some((0, 0))),
			("65536x1", Some((65_536, 1))),
			("1234", None),
			("x5", None),
			("5x", None),
			("-1x5", None),
			("1x2x3", None),
		];
		for &(input, expected) in TESTS {
			assert_eq!(super::parse_operands(input), expected, "{input}");
		}
	}
}
