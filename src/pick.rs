// Disambiguation module: narrows a list of search candidates down to one
// chosen id. The validity check is a pure function over the raw input line so
// it can be tested without a terminal; the interactive loop around it just
// prints and re-prompts.

use anyhow::Result;
use dialoguer::Input;

use crate::tmdb::SearchCandidate;

/// What one line of user input means against N candidates. The selection loop
/// keeps prompting until it sees `Selected` or `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Selected(u64),
    Cancelled,
    OutOfRange,
    Invalid,
}

/// Classify a raw input line. Valid selections are 1-based; `0` or an empty
/// line cancels. A number above N is reported as out of range, anything else
/// (non-numeric, negative) as plain invalid input.
pub fn step(input: &str, candidates: &[SearchCandidate]) -> Step {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "0" {
        return Step::Cancelled;
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=candidates.len()).contains(&n) => Step::Selected(candidates[n - 1].id),
        Ok(_) => Step::OutOfRange,
        Err(_) => Step::Invalid,
    }
}

/// Interactively pick one candidate. Prints every candidate with its 1-based
/// index, then loops on input until a valid index (returned as the chosen
/// movie id) or a cancel. `candidates` must be non-empty.
pub fn choose(candidates: &[SearchCandidate]) -> Result<Option<u64>> {
    for (index, candidate) in candidates.iter().enumerate() {
        println!("{}. {} ({})", index + 1, candidate.title, candidate.year);
    }
    loop {
        let line: String = Input::new()
            .with_prompt("Pick a movie by number (0 cancels)")
            .allow_empty(true)
            .interact_text()?;
        match step(&line, candidates) {
            Step::Selected(id) => return Ok(Some(id)),
            Step::Cancelled => return Ok(None),
            Step::OutOfRange => {
                println!("Pick a number between 1 and {}.", candidates.len());
            }
            Step::Invalid => {
                println!("That is not a valid choice, try again.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<SearchCandidate> {
        vec![
            SearchCandidate {
                title: "Inception".into(),
                id: 27205,
                year: "2010".into(),
            },
            SearchCandidate {
                title: "Inception: The Cobol Job".into(),
                id: 64956,
                year: "2010".into(),
            },
        ]
    }

    #[test]
    fn in_range_index_selects_the_candidate_id() {
        let list = candidates();
        assert_eq!(step("1", &list), Step::Selected(27205));
        assert_eq!(step("2", &list), Step::Selected(64956));
        assert_eq!(step("  2  ", &list), Step::Selected(64956));
    }

    #[test]
    fn indices_above_the_list_are_out_of_range() {
        let list = candidates();
        assert_eq!(step("3", &list), Step::OutOfRange);
        assert_eq!(step("99", &list), Step::OutOfRange);
    }

    #[test]
    fn non_numeric_and_negative_input_is_invalid() {
        let list = candidates();
        assert_eq!(step("two", &list), Step::Invalid);
        assert_eq!(step("1.5", &list), Step::Invalid);
        assert_eq!(step("-1", &list), Step::Invalid);
    }

    #[test]
    fn zero_and_empty_line_cancel() {
        let list = candidates();
        assert_eq!(step("0", &list), Step::Cancelled);
        assert_eq!(step("", &list), Step::Cancelled);
        assert_eq!(step("   ", &list), Step::Cancelled);
    }
}
