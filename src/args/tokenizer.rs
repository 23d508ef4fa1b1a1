// src/args/tokenizer.rs

//! Native argv tokenizer.
//!
//! Splits a command line into arguments the way the MSVC C runtime does for
//! every argument after the program name:
//!
//! - spaces and tabs separate arguments outside a quoted region;
//! - `2n` backslashes followed by `"` produce `n` backslashes, and the quote
//!   opens or closes a quoted region;
//! - `2n + 1` backslashes followed by `"` produce `n` backslashes and a
//!   literal quote;
//! - backslashes not followed by a quote are literal;
//! - `""` inside a quoted region produces a literal quote.
//!
//! This is the inverse of [`StandardRenderer`](crate::args::StandardRenderer).

pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' if !in_quotes => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '\\' => {
                in_token = true;
                let mut backslashes = 1;
                while chars.peek() == Some(&'\\') {
                    chars.next();
                    backslashes += 1;
                }
                if chars.peek() == Some(&'"') {
                    current.extend(std::iter::repeat_n('\\', backslashes / 2));
                    if backslashes % 2 == 1 {
                        chars.next();
                        current.push('"');
                    }
                } else {
                    current.extend(std::iter::repeat_n('\\', backslashes));
                }
            }
            '"' => {
                in_token = true;
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            other => {
                in_token = true;
                current.push(other);
            }
        }
    }

    if in_token {
        args.push(current);
    }

    args
}
