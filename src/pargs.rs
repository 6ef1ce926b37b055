/*!
# Pargs: The Extractor.
*/

use crate::PargsError;
use std::fmt;



/// # ANSI: Red Foreground.
const ANSI_RED: &str = "\x1b[31m";

/// # ANSI: Reset.
const ANSI_RESET: &str = "\x1b[0m";



#[derive(Debug, Clone)]
/// # Mutate-As-You-Go Argument Extractor.
///
/// `Pargs` owns one ordered list of unconsumed argument tokens plus the
/// documentation/version strings used for rendering [`usage`](Pargs::usage),
/// [`help`](Pargs::help), and [`version`](Pargs::version) output.
///
/// Construction splits any `key=value` token into two consecutive tokens;
/// after that the list only ever shrinks. Every extraction method removes
/// exactly the tokens it consumed — or, on a miss or an invalid value,
/// nothing at all — and never reorders what remains.
///
/// The intended call order mirrors how shells hand arguments over:
///
/// 1. [`Pargs::switch`] for help/version flags;
/// 2. [`Pargs::subcommand`], if the app has modes;
/// 3. [`Pargs::switch`] for the remaining boolean flags;
/// 4. `opt_int`/`opt_float`/`opt_str` for keys with values;
/// 5. [`Pargs::check`] to catch unrecognized keys;
/// 6. [`Pargs::positional`] for whatever's left.
///
/// Fallible methods return a [`PargsError`] rather than exiting; pair them
/// with [`Pargs::error`] and your own `std::process::exit` as needed.
///
/// ## Examples
///
/// ```
/// use pargs::Pargs;
///
/// let argv = ["prog", "-i", "7", "run", "in.dat"];
/// let mut args = Pargs::new("Usage: prog …\n", argv, "0.1.0");
///
/// assert_eq!(args.opt_int("-i", "--int", 10), Ok(7));
/// assert_eq!(args.subcommand(&["run", "check"]).as_deref(), Ok("run"));
/// assert!(args.check().is_ok());
/// assert_eq!(args.positional("-"), "in.dat");
/// assert!(args.is_empty());
/// ```
pub struct Pargs {
	/// # Unconsumed Tokens.
	args: Vec<String>,

	/// # Documentation Blob.
	///
	/// Usage banner up top, blank line, then the rest of the help text.
	doc: String,

	/// # Application Version.
	version: String,

	/// # Colorize Error Output?
	color: bool,
}

/// ## Instantiation.
impl Pargs {
	#[must_use]
	/// # New Instance.
	///
	/// Seed the extractor from a raw argument vector. The first entry is
	/// taken to be the program path and dropped; every remaining token
	/// containing an `=` is split at the first `=` into two consecutive
	/// tokens, so `--key=val` and `--key val` parse identically.
	///
	/// `doc` is the documentation blob used by [`Pargs::usage`] and
	/// [`Pargs::help`]; `version` is whatever [`Pargs::version`] should
	/// report.
	///
	/// Error colorization defaults to on; see [`Pargs::with_color`].
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let args = Pargs::new("Usage: prog\n", ["prog", "--key=val"], "1.0.0");
	/// assert_eq!(args.remaining(), ["--key", "val"]);
	/// ```
	pub fn new<I, T>(doc: &str, argv: I, version: &str) -> Self
	where I: IntoIterator<Item=T>, T: Into<String> {
		let mut args: Vec<String> = Vec::new();
		for raw in argv.into_iter().skip(1) {
			let raw: String = raw.into();
			match raw.split_once('=') {
				Some((key, value)) => {
					args.push(key.to_owned());
					args.push(value.to_owned());
				},
				None => args.push(raw),
			}
		}

		Self {
			args,
			doc: doc.to_owned(),
			version: version.to_owned(),
			color: true,
		}
	}

	#[must_use]
	/// # From the Environment.
	///
	/// Shorthand for seeding [`Pargs::new`] with [`std::env::args`]. (The
	/// program path is skipped as usual.)
	///
	/// ## Examples
	///
	/// ```no_run
	/// use pargs::Pargs;
	///
	/// let args = Pargs::from_env("Usage: prog\n", "1.0.0");
	/// ```
	pub fn from_env(doc: &str, version: &str) -> Self {
		Self::new(doc, std::env::args(), version)
	}

	#[must_use]
	/// # With/Without Color.
	///
	/// Toggle ANSI-red wrapping for [`Pargs::error`] output. On by default;
	/// turn it off when writing to something other than a terminal.
	pub fn with_color(mut self, color: bool) -> Self {
		self.color = color;
		self
	}
}

/// ## Extraction.
impl Pargs {
	/// # Subcommand.
	///
	/// If the first unconsumed token is one of `names`, remove and return
	/// it. Names must match exactly; there is no abbreviation or prefix
	/// matching.
	///
	/// ## Errors
	///
	/// Returns [`PargsError::UnknownSubcommand`] — leaving the list
	/// untouched — if the first token isn't a valid name, or if the list
	/// is empty.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "run", "in.dat"], "1.0.0");
	/// assert_eq!(args.subcommand(&["run", "check"]).as_deref(), Ok("run"));
	/// assert_eq!(args.remaining(), ["in.dat"]);
	/// ```
	pub fn subcommand(&mut self, names: &'static [&'static str])
	-> Result<String, PargsError> {
		let found: &str = self.args.first().map_or("", String::as_str);
		if names.contains(&found) { Ok(self.args.remove(0)) }
		else {
			Err(PargsError::UnknownSubcommand {
				found: found.to_owned(),
				expected: names,
			})
		}
	}

	/// # Boolean Switch.
	///
	/// Returns `true` — removing the matched token — if either form is
	/// present, `false` if not. A switch is a pure presence flag; it never
	/// consumes a following value token.
	///
	/// Only the first occurrence is taken per call: the short form is
	/// searched before the long one, and any duplicate survives until it
	/// is either claimed by another call or reported by [`Pargs::check`].
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "--verbose"], "1.0.0");
	/// assert!(args.switch("-v", "--verbose"));
	/// assert!(! args.switch("-d", "--dry-run"));
	/// assert!(args.is_empty());
	/// ```
	pub fn switch(&mut self, short: &str, long: &str) -> bool {
		if let Some(idx) = self.find_key(short, long) {
			self.args.remove(idx);
			true
		}
		else { false }
	}

	/// # Integer Option.
	///
	/// Find either key form and return the token following it as an `i64`,
	/// removing both. Absent keys return `default` and leave the list
	/// alone.
	///
	/// Values must be unsigned decimal — ASCII digits only, no sign, no
	/// separators — and fit the type.
	///
	/// ## Errors
	///
	/// Returns [`PargsError::MissingValue`] if the key is the last token,
	/// or [`PargsError::NotAnInteger`] if the value doesn't cut it. The
	/// list is left untouched either way.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "-i", "42"], "1.0.0");
	/// assert_eq!(args.opt_int("-i", "--int", 10), Ok(42));
	/// assert_eq!(args.opt_int("-j", "--jobs", 1), Ok(1)); // Absent.
	/// ```
	pub fn opt_int(&mut self, short: &'static str, long: &'static str, default: i64)
	-> Result<i64, PargsError> {
		let Some(idx) = self.find_key(short, long) else { return Ok(default); };
		let value = self.args.get(idx + 1)
			.ok_or(PargsError::MissingValue(short, long))?;

		if ! valid_int(value.as_bytes()) {
			return Err(PargsError::NotAnInteger(short, long, value.clone()));
		}

		// Digits-only can still overflow the type.
		let parsed: i64 = value.parse()
			.map_err(|_| PargsError::NotAnInteger(short, long, value.clone()))?;

		self.args.drain(idx..=idx + 1);
		Ok(parsed)
	}

	/// # Float Option.
	///
	/// Find either key form and return the token following it as an `f64`,
	/// removing both. Absent keys return `default` and leave the list
	/// alone.
	///
	/// Values may only contain ASCII digits and dots — no sign, no
	/// exponent — and must still parse as a float, so stutters like
	/// `3.1.4` are rejected.
	///
	/// ## Errors
	///
	/// Returns [`PargsError::MissingValue`] if the key is the last token,
	/// or [`PargsError::NotAFloat`] if the value doesn't cut it. The list
	/// is left untouched either way.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "--float", "3.14"], "1.0.0");
	/// assert_eq!(args.opt_float("-f", "--float", 10.5), Ok(3.14));
	/// ```
	pub fn opt_float(&mut self, short: &'static str, long: &'static str, default: f64)
	-> Result<f64, PargsError> {
		let Some(idx) = self.find_key(short, long) else { return Ok(default); };
		let value = self.args.get(idx + 1)
			.ok_or(PargsError::MissingValue(short, long))?;

		if ! valid_float(value.as_bytes()) {
			return Err(PargsError::NotAFloat(short, long, value.clone()));
		}

		// The byte check allows repeated dots; the parse does not.
		let parsed: f64 = value.parse()
			.map_err(|_| PargsError::NotAFloat(short, long, value.clone()))?;

		self.args.drain(idx..=idx + 1);
		Ok(parsed)
	}

	/// # String Option.
	///
	/// Find either key form and return the token following it verbatim,
	/// removing both. Absent keys return `default` (owned) and leave the
	/// list alone. No validation is applied to the value.
	///
	/// ## Errors
	///
	/// Returns [`PargsError::MissingValue`] — leaving the list untouched —
	/// if the key is the last token.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "-o", "out.txt"], "1.0.0");
	/// assert_eq!(args.opt_str("-o", "--out", "-").as_deref(), Ok("out.txt"));
	/// ```
	pub fn opt_str(&mut self, short: &'static str, long: &'static str, default: &str)
	-> Result<String, PargsError> {
		let Some(idx) = self.find_key(short, long) else { return Ok(default.to_owned()); };
		if self.args.len() <= idx + 1 {
			return Err(PargsError::MissingValue(short, long));
		}

		let value = self.args.remove(idx + 1);
		self.args.remove(idx);
		Ok(value)
	}

	/// # Unrecognized Key Check.
	///
	/// Scan — without mutating — the remaining tokens for anything shaped
	/// like a key: one or two dashes followed by an ASCII word byte. Run
	/// this after all expected switches and options have been extracted;
	/// whatever is still dash-prefixed at that point is, by construction,
	/// a typo.
	///
	/// ## Errors
	///
	/// Returns [`PargsError::UnknownOptions`] holding every offending
	/// token in order.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::{Pargs, PargsError};
	///
	/// let mut args = Pargs::new("", ["prog", "-x", "in.dat"], "1.0.0");
	/// assert_eq!(
	///     args.check(),
	///     Err(PargsError::UnknownOptions(vec!["-x".to_owned()])),
	/// );
	///
	/// args.switch("-x", "--exes"); // Claimed now.
	/// assert!(args.check().is_ok());
	/// ```
	pub fn check(&self) -> Result<(), PargsError> {
		let bad: Vec<String> = self.args.iter()
			.filter(|a| keylike(a.as_bytes()))
			.cloned()
			.collect();

		if bad.is_empty() { Ok(()) }
		else { Err(PargsError::UnknownOptions(bad)) }
	}

	/// # Positional Argument.
	///
	/// Remove and return the first unconsumed token, or `default` (owned)
	/// if the list is empty. Call once per expected positional, after the
	/// switches and options are out of the way.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "in.txt", "out.txt"], "1.0.0");
	/// assert_eq!(args.positional("-"), "in.txt");
	/// assert_eq!(args.positional("-"), "out.txt");
	/// assert_eq!(args.positional("-"), "-");
	/// ```
	pub fn positional(&mut self, default: &str) -> String {
		if self.args.is_empty() { default.to_owned() }
		else { self.args.remove(0) }
	}

	#[must_use]
	/// # Positional Arguments, Batched.
	///
	/// Remove and return the first `max` unconsumed tokens, padding the
	/// result with `default` if fewer remain. The returned vector always
	/// has exactly `max` entries.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let mut args = Pargs::new("", ["prog", "in.txt"], "1.0.0");
	/// assert_eq!(args.positionals(2, "-"), ["in.txt", "-"]);
	/// ```
	pub fn positionals(&mut self, max: usize, default: &str) -> Vec<String> {
		(0..max).map(|_| self.positional(default)).collect()
	}
}

/// ## Rendering.
impl Pargs {
	#[must_use]
	/// # Usage Banner.
	///
	/// Return the documentation text from its first line up to — but not
	/// including — the first blank (whitespace-only) line found at or
	/// after the second line. Each returned line keeps its trailing `\n`.
	///
	/// ## Examples
	///
	/// ```
	/// use pargs::Pargs;
	///
	/// let args = Pargs::new("Usage: foo\n\nOptions:\n  -h help\n", ["foo"], "1.0.0");
	/// assert_eq!(args.usage(), "Usage: foo\n");
	/// ```
	pub fn usage(&self) -> String {
		let mut out = String::new();
		for (n, line) in self.doc.lines().enumerate() {
			if 0 < n && line.trim().is_empty() { break; }
			out.push_str(line);
			out.push('\n');
		}
		out
	}

	#[must_use]
	/// # Full Help Page.
	///
	/// Return the complete documentation text, trimmed.
	pub fn help(&self) -> &str { self.doc.trim() }

	#[must_use]
	/// # Application Version.
	///
	/// Return the version string supplied at construction.
	pub fn version(&self) -> &str { &self.version }

	/// # Error Message.
	///
	/// Write `msg` to `STDERR`, wrapped in ANSI red unless colorization
	/// has been disabled. The argument list is never touched.
	///
	/// This pairs naturally with [`PargsError`], but takes anything
	/// displayable.
	pub fn error<D>(&self, msg: D)
	where D: fmt::Display {
		if self.color { eprintln!("{ANSI_RED}{msg}{ANSI_RESET}"); }
		else { eprintln!("{msg}"); }
	}
}

/// ## Queries.
impl Pargs {
	#[must_use]
	/// # Is Empty?
	///
	/// Returns `true` if no unconsumed tokens remain. Immediately after
	/// construction this means the program was called bare, the usual cue
	/// to print [`Pargs::usage`] and stop.
	pub fn is_empty(&self) -> bool { self.args.is_empty() }

	#[must_use]
	/// # Number of Unconsumed Tokens.
	pub fn len(&self) -> usize { self.args.len() }

	#[must_use]
	/// # Unconsumed Tokens.
	///
	/// Borrow whatever hasn't been extracted yet, in order.
	pub fn remaining(&self) -> &[String] { &self.args }

	/// # Find Key.
	///
	/// Return the index of the first token equal to `short`, falling back
	/// to the first equal to `long`.
	fn find_key(&self, short: &str, long: &str) -> Option<usize> {
		self.args.iter().position(|a| a == short)
			.or_else(|| self.args.iter().position(|a| a == long))
	}
}



/// # Unsigned Integer?
///
/// One or more ASCII digits and nothing else.
const fn valid_int(mut bytes: &[u8]) -> bool {
	if bytes.is_empty() { return false; }
	while let [b'0'..=b'9', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # Float-ish?
///
/// One or more ASCII digits and/or dots and nothing else. (Dot placement
/// is left to the actual float parse.)
const fn valid_float(mut bytes: &[u8]) -> bool {
	if bytes.is_empty() { return false; }
	while let [b'.' | b'0'..=b'9', rest @ ..] = bytes { bytes = rest; }
	bytes.is_empty()
}

/// # Key-Shaped?
///
/// One or two dashes followed by an ASCII word byte, i.e. the tokens an
/// unclaimed `-x`/`--long` would leave behind.
const fn keylike(bytes: &[u8]) -> bool {
	match bytes {
		[b'-', b'-', b, ..] | [b'-', b, ..] => word_byte(*b),
		_ => false,
	}
}

/// # Word Byte?
const fn word_byte(b: u8) -> bool {
	matches!(b, b'_' | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z')
}
