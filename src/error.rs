/*!
# Pargs: Errors.
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
///
/// Every variant is a user-input problem; the crate has no I/O or internal
/// state that can fail on its own. [`PargsError::as_str`] gives the generic
/// description, while the `Display` impl carries the offending data.
pub enum PargsError {
	/// # Option Key Without a Value.
	///
	/// The key was the last token in the list, so there was nothing left to
	/// read as its value. Holds the short and long forms of the key.
	MissingValue(&'static str, &'static str),

	/// # Non-Integer Option Value.
	///
	/// Holds the short and long forms of the key and the rejected value.
	NotAnInteger(&'static str, &'static str, String),

	/// # Non-Float Option Value.
	///
	/// Holds the short and long forms of the key and the rejected value.
	NotAFloat(&'static str, &'static str, String),

	/// # Dash-Prefixed Leftovers.
	///
	/// Tokens still matching `-x`/`--x` after all expected keys have been
	/// extracted, in their original order.
	UnknownOptions(Vec<String>),

	/// # Missing/Invalid Subcommand.
	///
	/// `found` is the first token (empty if there wasn't one); `expected`
	/// lists the valid subcommand names.
	UnknownSubcommand {
		/// # What the User Typed.
		found: String,
		/// # Valid Subcommand Names.
		expected: &'static [&'static str],
	},
}

impl std::error::Error for PargsError {}

impl fmt::Display for PargsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingValue(short, long) =>
				write!(f, "Missing value for {short}/{long}."),
			Self::NotAnInteger(short, long, value) =>
				write!(f, "Invalid value for {short}/{long}: {value:?} is not an integer."),
			Self::NotAFloat(short, long, value) =>
				write!(f, "Invalid value for {short}/{long}: {value:?} is not a float."),
			Self::UnknownOptions(keys) =>
				write!(f, "Unrecognized option(s): {}.", keys.join(", ")),
			Self::UnknownSubcommand { found, expected } =>
				if found.is_empty() {
					write!(f, "Missing subcommand; expected one of: {}.", expected.join(", "))
				}
				else {
					write!(f, "Invalid subcommand {found:?}; expected one of: {}.", expected.join(", "))
				},
		}
	}
}

impl PargsError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return the generic description as a string slice, sans specifics.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::MissingValue(..) => "Missing option value.",
			Self::NotAnInteger(..) => "Invalid integer value.",
			Self::NotAFloat(..) => "Invalid float value.",
			Self::UnknownOptions(_) => "Unrecognized option(s).",
			Self::UnknownSubcommand { .. } => "Missing/invalid subcommand.",
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			PargsError::MissingValue("-i", "--int").to_string(),
			"Missing value for -i/--int.",
		);
		assert_eq!(
			PargsError::NotAnInteger("-i", "--int", "abc".to_owned()).to_string(),
			"Invalid value for -i/--int: \"abc\" is not an integer.",
		);
		assert_eq!(
			PargsError::UnknownOptions(vec!["-x".to_owned(), "--yes".to_owned()]).to_string(),
			"Unrecognized option(s): -x, --yes.",
		);
		assert_eq!(
			PargsError::UnknownSubcommand {
				found: String::new(),
				expected: &["run", "check"],
			}.to_string(),
			"Missing subcommand; expected one of: run, check.",
		);
		assert_eq!(
			PargsError::UnknownSubcommand {
				found: "walk".to_owned(),
				expected: &["run", "check"],
			}.to_string(),
			"Invalid subcommand \"walk\"; expected one of: run, check.",
		);
	}
}
