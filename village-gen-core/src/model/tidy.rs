/// Digraphs smoothed to a single letter, applied in this order.
const SMOOTHED_DOUBLES: [&str; 7] = ["tt", "ll", "ss", "ff", "rr", "mm", "nn"];

/// Cleans up a raw concatenation of place roots.
///
/// Steps, in order:
/// 1. Empty input is returned as-is
/// 2. Runs of 3+ identical lowercase letters are cut down to 2
/// 3. Each digraph of `SMOOTHED_DOUBLES` becomes its single letter
/// 4. The first character is uppercased
///
/// Not idempotent in general, so callers apply it exactly once.
pub fn tidy(raw: &str) -> String {
	if raw.is_empty() {
		return String::new();
	}

	let mut out = collapse_triples(raw);

	for digraph in SMOOTHED_DOUBLES {
		out = out.replace(digraph, &digraph[..1]);
	}

	capitalize(&out)
}

/// Rewrites every maximal run of an `a`-`z` letter longer than 2 down to 2.
fn collapse_triples(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut previous: Option<char> = None;
	let mut run = 0;

	for c in raw.chars() {
		if Some(c) == previous {
			run += 1;
		} else {
			previous = Some(c);
			run = 1;
		}

		if run <= 2 || !c.is_ascii_lowercase() {
			out.push(c);
		}
	}

	out
}

/// Uppercases the first character (UTF-8 aware), leaving the rest untouched.
fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn empty_stays_empty() {
		assert_eq!(tidy(""), "");
	}

	#[test]
	fn single_character_is_uppercased() {
		assert_eq!(tidy("a"), "A");
		assert_eq!(tidy("é"), "É");
	}

	#[test]
	fn triples_and_longer_runs_collapse_to_double() {
		assert_eq!(tidy("aaa"), "Aa");
		assert_eq!(tidy("aaaa"), "Aa");
		assert_eq!(tidy("brooook"), "Brook");
		assert_eq!(tidy("oooxooo"), "Ooxoo");
	}

	#[test]
	fn smoothed_doubles_become_single() {
		assert_eq!(tidy("settland"), "Setland");
		assert_eq!(tidy("mossford"), "Mosford");
		assert_eq!(tidy("hillmoor"), "Hilmoor");
		assert_eq!(tidy("annwell"), "Anwel");
	}

	#[test]
	fn triple_collapse_runs_before_smoothing() {
		// "ttt" -> "tt" -> "t"
		assert_eq!(tidy("rattton"), "Raton");
		assert_eq!(tidy("fffennn"), "Fen");
	}

	#[test]
	fn doubles_outside_the_table_survive() {
		assert_eq!(tidy("tooth"), "Tooth");
		assert_eq!(tidy("deepbrook"), "Deepbrook");
	}

	#[test]
	fn only_first_character_changes_case() {
		assert_eq!(tidy("ravenWood"), "RavenWood");
		assert_eq!(tidy("Ravenwood"), "Ravenwood");
	}

	#[test]
	fn uppercase_runs_are_not_collapsed() {
		assert_eq!(tidy("AAAx"), "AAAx");
	}

	proptest! {
		#[test]
		fn first_character_is_uppercase(raw in "[a-z]{1,24}") {
			let out = tidy(&raw);
			let first = out.chars().next().unwrap();
			prop_assert!(first.is_ascii_uppercase());
		}

		#[test]
		fn remainder_is_the_transformed_tail(raw in "[a-z]{1,24}") {
			let out = tidy(&raw);
			let lowered = out.to_lowercase();
			let mut expected = collapse_triples(&raw);
			for digraph in SMOOTHED_DOUBLES {
				expected = expected.replace(digraph, &digraph[..1]);
			}
			prop_assert_eq!(lowered, expected);
		}

		#[test]
		fn no_run_longer_than_two_remains(raw in "[a-c]{1,32}") {
			let out = tidy(&raw).to_lowercase();
			let chars: Vec<char> = out.chars().collect();
			prop_assert!(chars.windows(3).all(|w| !(w[0] == w[1] && w[1] == w[2])));
		}
	}
}
