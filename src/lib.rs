/*!
# Pargs

This crate provides a tiny, mutate-as-you-go CLI argument extractor called
[`Pargs`], occupying the ground between hand-rolled `std::env::args` loops
and full-service crates like [clap](https://crates.io/crates/clap).

[`Pargs`] holds the unconsumed arguments as one ordered list. Construction
normalizes `key=value` tokens into separate `key value` entries; each
subsequent call — [`Pargs::subcommand`], [`Pargs::switch`], the typed
`opt_*` getters, [`Pargs::positional`] — plucks what it recognizes out of
the list and leaves the rest untouched. A final [`Pargs::check`] flags
anything dash-prefixed that nobody claimed.

Alongside the extraction methods, [`Pargs`] renders a usage banner and a
full help page from a single documentation blob, reports a caller-supplied
version string, and writes (optionally ANSI-red) error messages to
`STDERR`.

Nothing here ever terminates the process. Fallible operations return a
[`PargsError`]; whether that warrants an exit — and with what status — is
entirely up to you.

## Example

A general setup might look something like the following.

```
use pargs::Pargs;

const DOC: &str = "\
Usage: demo (run | check) [ -v ] [ -i INT ] <INFILE> [<OUTFILE>]

Commands:
    run            run it
    check          check it
Options:
    -h, --help     display this help message
    -V, --version  display the application version
    -v, --verbose  turn verbosity on
    -i, --int INT  some integer [default: 10]
Arguments:
    <INFILE>       input file
    <OUTFILE>      output file [default: '-']
";

// Normally you'd use Pargs::from_env(DOC, "1.0.0") instead.
let argv = ["demo", "run", "--int=7", "-v", "in.dat"];
let mut args = Pargs::new(DOC, argv, "1.0.0");

if args.is_empty() || args.switch("-h", "--help") {
    println!("{}", args.help());
    return;
}
if args.switch("-V", "--version") {
    println!("{}", args.version());
    return;
}

// Each step hands back an error instead of exiting; a real binary
// would print it and bail with a non-zero status.
let cmd = match args.subcommand(&["run", "check"]) {
    Ok(c) => c,
    Err(e) => {
        args.error(&e);
        eprintln!("{}", args.usage());
        return;
    },
};

let verbose: bool = args.switch("-v", "--verbose");
let int: i64 = args.opt_int("-i", "--int", 10).unwrap();

// Anything dash-prefixed still in the list is a typo.
args.check().unwrap();

let infile: String = args.positional("-");

assert_eq!(cmd, "run");
assert!(verbose);
assert_eq!(int, 7);
assert_eq!(infile, "in.dat");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod error;
mod pargs;

pub use error::PargsError;
pub use pargs::Pargs;
