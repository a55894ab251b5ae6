//! Interactive batch configuration.
//!
//! Four positive integers (account-delay min/max, action-delay min/max,
//! each pair with `max > min`) and a yes/no shuffle toggle. Invalid
//! input is reprompted, never a crash.

use std::io::{self, Write};

/// Operator-supplied run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Inclusive bounds in seconds for the inter-account pause.
    pub min_account_delay: u64,
    pub max_account_delay: u64,
    /// Inclusive bounds in seconds for the pause between an account's
    /// two transfer operations.
    pub min_action_delay: u64,
    pub max_action_delay: u64,
    /// Randomly permute the processing order once before the batch.
    pub shuffle_accounts: bool,
}

/// Validate one delay pair. Both values must parse as integers and the
/// maximum must be strictly greater than the minimum.
pub fn parse_delay_bounds(min: &str, max: &str) -> Result<(u64, u64), String> {
    let min: u64 = min
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", min.trim()))?;
    let max: u64 = max
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", max.trim()))?;
    if max <= min {
        return Err("maximum delay must be greater than minimum".to_string());
    }
    Ok((min, max))
}

/// Interpret a yes/no answer. `None` means the answer was unrecognized.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn prompt_delay_pair(what: &str) -> io::Result<(u64, u64)> {
    loop {
        let min = read_line(&format!("Enter minimum delay between {}: ", what))?;
        let max = read_line(&format!("Enter maximum delay between {}: ", what))?;
        match parse_delay_bounds(&min, &max) {
            Ok(bounds) => return Ok(bounds),
            Err(e) => tracing::error!("{}", e),
        }
    }
}

fn prompt_shuffle() -> io::Result<bool> {
    loop {
        let answer = read_line("Do you want to shuffle accounts (y/n)? ")?;
        match parse_yes_no(&answer) {
            Some(shuffle) => return Ok(shuffle),
            None => tracing::error!("You entered an incorrect answer"),
        }
    }
}

/// Collect the full batch configuration from the operator.
pub fn batch_config() -> io::Result<BatchConfig> {
    let (min_account_delay, max_account_delay) = prompt_delay_pair("accounts")?;
    let (min_action_delay, max_action_delay) = prompt_delay_pair("actions")?;
    let shuffle_accounts = prompt_shuffle()?;

    Ok(BatchConfig {
        min_account_delay,
        max_account_delay,
        min_action_delay,
        max_action_delay,
        shuffle_accounts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        assert_eq!(parse_delay_bounds("2", "10"), Ok((2, 10)));
        assert_eq!(parse_delay_bounds(" 0 ", " 1 "), Ok((0, 1)));
    }

    #[test]
    fn test_max_must_exceed_min() {
        assert!(parse_delay_bounds("5", "5").is_err());
        assert!(parse_delay_bounds("10", "2").is_err());
    }

    #[test]
    fn test_non_integer_input() {
        assert!(parse_delay_bounds("two", "10").is_err());
        assert!(parse_delay_bounds("2", "ten").is_err());
        assert!(parse_delay_bounds("-1", "10").is_err());
    }

    #[test]
    fn test_yes_no_parsing() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" N "), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
        assert_eq!(parse_yes_no(""), None);
    }
}
