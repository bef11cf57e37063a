use std::io::BufRead;

use console::Term;
use topogen_common::error::parse_count;

/// Asks `question` on the terminal and parses the answer as a count.
///
/// Input that is not a whole number, or is negative, is an error.
pub fn ask_count(question: &str, field: &'static str) -> anyhow::Result<usize> {
    let term = Term::stdout();
    term.write_str(question)?;
    term.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    Ok(parse_count(field, &answer)?)
}
