//! Command-line tokenizer
//!
//! Splits a line on spaces. Double quotes group words and are dropped from
//! the output; `\"` yields a literal quote without toggling quoting. Every
//! space outside quotes ends a token, so repeated spaces produce empty
//! tokens, and the last token is always emitted.

pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => quoted = !quoted,
            ' ' if !quoted => tokens.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    tokens.push(current);
    tokens
}
