use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::bundle::GeneratedBundle;

/// Output rendering of a bundle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// `Village: ...` header followed by one bullet per resident.
	#[default]
	Text,
	/// The bundle as a nested, pretty-printed JSON document.
	Json,
	/// Two columns, `gender,name`, one row per resident.
	Csv,
}

impl OutputFormat {
	/// Renders `bundle` in this format.
	///
	/// # Errors
	/// Only JSON serialization can fail.
	pub fn render(self, bundle: &GeneratedBundle) -> serde_json::Result<String> {
		match self {
			OutputFormat::Text => Ok(to_text(bundle)),
			OutputFormat::Json => to_json(bundle),
			OutputFormat::Csv => Ok(to_csv(bundle)),
		}
	}
}

impl FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"text" => Ok(OutputFormat::Text),
			"json" => Ok(OutputFormat::Json),
			"csv" => Ok(OutputFormat::Csv),
			other => Err(format!("Unknown format '{other}', expected text, json or csv")),
		}
	}
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			OutputFormat::Text => "text",
			OutputFormat::Json => "json",
			OutputFormat::Csv => "csv",
		};
		f.write_str(name)
	}
}

/// Plain-text listing, one line per entry, no trailing newline.
///
/// ```text
/// Village: Ravenford
/// Residents:
///   - Tom of Ravenford
///   - Ann of Ravenford
/// ```
pub fn to_text(bundle: &GeneratedBundle) -> String {
	let mut lines = vec![format!("Village: {}", bundle.village), "Residents:".to_owned()];
	lines.extend(bundle.residents.iter().map(|(_, resident)| format!("  - {resident}")));
	lines.join("\n")
}

/// Pretty JSON with two-space indentation. Non-ASCII text is kept as-is.
pub fn to_json(bundle: &GeneratedBundle) -> serde_json::Result<String> {
	serde_json::to_string_pretty(bundle)
}

/// CSV with a `gender,name` header, males first, CRLF line endings.
pub fn to_csv(bundle: &GeneratedBundle) -> String {
	let mut out = String::from("gender,name\r\n");
	for (gender, resident) in bundle.residents.iter() {
		out.push_str(gender);
		out.push(',');
		out.push_str(&csv_field(resident));
		out.push_str("\r\n");
	}
	out
}

/// Quotes a field only when it holds a delimiter, a quote or a line break.
fn csv_field(value: &str) -> String {
	if value.contains([',', '"', '\n', '\r']) {
		format!("\"{}\"", value.replace('"', "\"\""))
	} else {
		value.to_owned()
	}
}
