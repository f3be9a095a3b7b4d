//! Line prompts for values not given as flags

use std::io::{self, BufRead, IsTerminal, Write};

/// Ask for one line on stderr and read it from stdin.
///
/// Fails with `UnexpectedEof` when stdin is closed.
pub fn prompt(label: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}: ", label)?;
    stderr.flush()?;
    read_answer(&mut io::stdin().lock(), label)
}

/// Ask for a password without echoing it.
///
/// Echo is only disabled on a terminal; piped input is read as a plain line.
pub fn prompt_password(label: &str) -> io::Result<String> {
    if io::stdin().is_terminal() {
        return rpassword::prompt_password(format!("{}: ", label));
    }
    prompt(label)
}

/// Use the flag value if present, otherwise prompt.
pub fn value_or_prompt(value: Option<String>, label: &str) -> io::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

fn read_answer(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no input for {}", label),
        ));
    }
    Ok(trim_line(&line))
}

fn trim_line(line: &str) -> String {
    line.trim_end_matches(['\r', '\n']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_trim_line_keeps_inner_spaces() {
        assert_eq!(trim_line("Jl. Sudirman 1\r\n"), "Jl. Sudirman 1");
        assert_eq!(trim_line("  secret  \n"), "  secret  ");
    }

    #[test]
    fn test_value_or_prompt_prefers_flag() {
        let value = value_or_prompt(Some("budi@example.com".into()), "Email").unwrap();
        assert_eq!(value, "budi@example.com");
    }

    #[test]
    fn test_read_answer_takes_one_line() {
        let mut input = Cursor::new("hunter2SECRET\nnext\n");
        assert_eq!(read_answer(&mut input, "Password").unwrap(), "hunter2SECRET");
        assert_eq!(read_answer(&mut input, "Password").unwrap(), "next");
    }

    #[test]
    fn test_read_answer_fails_on_closed_input() {
        let err = read_answer(&mut Cursor::new(""), "Old password").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(err.to_string().contains("Old password"));
    }
}
