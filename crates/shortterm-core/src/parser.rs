//! Recall answer parser.
//!
//! Turns the text a user typed into a list of numbers. Parsing never fails:
//! a token that is not an integer is recorded as zero and counted.

use crate::model::Answer;

/// Parse whitespace-separated integers from `input`.
pub fn parse_answer(input: &str) -> Answer {
    let mut answer = Answer::default();
    for token in input.split_whitespace() {
        match token.parse::<i64>() {
            Ok(n) => answer.numbers.push(n),
            Err(_) => {
                tracing::debug!(token, "non-numeric answer token recorded as 0");
                answer.numbers.push(0);
                answer.coerced += 1;
            }
        }
    }
    answer
}

/// Render numbers the way they are shown to the user.
pub fn format_sequence(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_numbers() {
        let answer = parse_answer("12 34 56");
        assert_eq!(answer.numbers, vec![12, 34, 56]);
        assert_eq!(answer.coerced, 0);
    }

    #[test]
    fn tolerates_mixed_whitespace() {
        let answer = parse_answer("  12\t34   56\n");
        assert_eq!(answer.numbers, vec![12, 34, 56]);
    }

    #[test]
    fn non_numeric_tokens_become_zero() {
        let answer = parse_answer("12 ab 56 7x");
        assert_eq!(answer.numbers, vec![12, 0, 56, 0]);
        assert_eq!(answer.coerced, 2);
    }

    #[test]
    fn negative_numbers_parse() {
        assert_eq!(parse_answer("-3 4").numbers, vec![-3, 4]);
    }

    #[test]
    fn blank_input_is_empty() {
        let answer = parse_answer("   ");
        assert!(answer.numbers.is_empty());
        assert_eq!(answer.coerced, 0);
    }

    #[test]
    fn format_joins_with_spaces() {
        assert_eq!(format_sequence(&[10, 42, 99]), "10 42 99");
        assert_eq!(format_sequence(&[]), "");
    }
}
