//! Choice validation.
//!
//! Prompts until the player types one of the accepted tokens. Anything else
//! gets a retry message and another prompt; there is no retry limit.

use crate::error::QuestResult;
use crate::present::{Console, Tone};

/// Prompt until the answer exactly matches one of `tokens` (case-sensitive).
pub fn choose<'t, C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    tokens: &[&'t str],
) -> QuestResult<&'t str> {
    let retry = retry_message(tokens);
    loop {
        let answer = console.prompt(prompt)?;
        if let Some(token) = tokens.iter().copied().find(|t| *t == answer) {
            return Ok(token);
        }
        log::debug!("rejected input {answer:?}");
        console.display(&retry, Tone::Retry);
    }
}

/// Prompt for one of the numbers `1..=count` and return it.
pub fn choose_numbered<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    count: usize,
) -> QuestResult<usize> {
    let labels: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
    let tokens: Vec<&str> = labels.iter().map(String::as_str).collect();
    let picked = choose(console, prompt, &tokens)?;
    Ok(tokens.iter().position(|t| *t == picked).unwrap_or(0) + 1)
}

/// Prompt for `yes` or `no`, ignoring case and surrounding whitespace.
pub fn confirm<C: Console + ?Sized>(console: &mut C, prompt: &str) -> QuestResult<bool> {
    loop {
        let answer = console.prompt(prompt)?;
        match answer.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => console.display("Please enter yes or no.", Tone::Retry),
        }
    }
}

/// "Please enter 1 or 2." / "Please enter 1, 2, or 3."
fn retry_message(tokens: &[&str]) -> String {
    let list = match tokens {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
    };
    format!("Please enter {list}.")
}
