/*!
# Benchmark: `pargs::Pargs`
*/

use brunch::{
	Bench,
	benches,
};
use pargs::Pargs;

/// # Sample Documentation.
const DOC: &str = "\
Usage: app (check | run) [ -v ] [ -i INT ] <INFILE> [<OUTFILE>]

Options:
    -v, --verbose  turn verbose on
    -i, --int INT  some integer [default: 10]
";

/// # Seeded Instance.
fn parser() -> Pargs {
	Pargs::new(
		DOC,
		["app", "--int=7", "run", "-v", "/foo/bar", "/bar/baz"],
		"1.2.3",
	)
}

benches!(
	Bench::new("pargs::Pargs::new()")
		.run(parser),

	Bench::spacer(),

	Bench::new("pargs::Pargs::switch(-v, --verbose)")
		.run_seeded_with(parser, |mut a| a.switch("-v", "--verbose")),

	Bench::new("pargs::Pargs::opt_int(-i, --int)")
		.run_seeded_with(parser, |mut a| a.opt_int("-i", "--int", 10)),

	Bench::new("pargs::Pargs::check()")
		.run_seeded_with(parser, |a| a.check().is_ok()),

	Bench::new("pargs::Pargs::usage()")
		.run_seeded_with(parser, |a| a.usage()),
);
