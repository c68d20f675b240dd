// SPDX-License-Identifier: MIT

//! Tokenizer for rule expressions
//!
//! Turns the source text into a flat token stream. Variable references are
//! lexed as tokens (`${name}` and bare identifiers both become
//! [`Token::Ident`]) and resolved later, at evaluation time, so variable
//! values can never be mistaken for operators or other variables' names.

use crate::error::EvalError;
use std::fmt;

/// A lexical token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
    /// Variable reference, from a bare identifier or `${name}`
    Ident(String),
    Or,
    And,
    Eq,
    NotEq,
    Gte,
    Lte,
    Gt,
    Lt,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "'{}'", s),
            Token::Bool(b) => write!(f, "{}", b),
            Token::Null => write!(f, "null"),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Or => write!(f, "||"),
            Token::And => write!(f, "&&"),
            Token::Eq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Gte => write!(f, ">="),
            Token::Lte => write!(f, "<="),
            Token::Gt => write!(f, ">"),
            Token::Lt => write!(f, "<"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Bang => write!(f, "!"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Tokenize an expression string
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '|' => {
                if chars.get(i + 1) == Some(&'|') {
                    tokens.push(Token::Or);
                    i += 2;
                } else {
                    return Err(EvalError::UnexpectedChar { ch: '|', pos: i });
                }
            }
            '&' => {
                if chars.get(i + 1) == Some(&'&') {
                    tokens.push(Token::And);
                    i += 2;
                } else {
                    return Err(EvalError::UnexpectedChar { ch: '&', pos: i });
                }
            }
            '=' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::Eq);
                    i += 2;
                } else {
                    return Err(EvalError::UnexpectedChar { ch: '=', pos: i });
                }
            }
            '!' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::NotEq);
                    i += 2;
                } else {
                    tokens.push(Token::Bang);
                    i += 1;
                }
            }
            '>' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::Gte);
                    i += 2;
                } else {
                    tokens.push(Token::Gt);
                    i += 1;
                }
            }
            '<' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::Lte);
                    i += 2;
                } else {
                    tokens.push(Token::Lt);
                    i += 1;
                }
            }
            '\'' | '"' => {
                let (token, next) = read_string(&chars, i)?;
                tokens.push(token);
                i = next;
            }
            '$' => {
                let (token, next) = read_var_ref(&chars, i)?;
                tokens.push(token);
                i = next;
            }
            c if c.is_ascii_digit() => {
                let (token, next) = read_number(&chars, i)?;
                tokens.push(token);
                i = next;
            }
            c if c.is_alphabetic() || c == '_' => {
                let (token, next) = read_word(&chars, i);
                tokens.push(token);
                i = next;
            }
            other => return Err(EvalError::UnexpectedChar { ch: other, pos: i }),
        }
    }

    Ok(tokens)
}

/// Read a quoted string starting at the opening quote
fn read_string(chars: &[char], start: usize) -> Result<(Token, usize), EvalError> {
    let quote = chars[start];
    let mut out = String::new();
    let mut i = start + 1;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let escaped = chars
                    .get(i + 1)
                    .ok_or(EvalError::UnterminatedString(start))?;
                out.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => *other,
                });
                i += 2;
            }
            c if c == quote => return Ok((Token::Str(out), i + 1)),
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    Err(EvalError::UnterminatedString(start))
}

/// Read a `${name}` variable reference starting at the `$`
fn read_var_ref(chars: &[char], start: usize) -> Result<(Token, usize), EvalError> {
    if chars.get(start + 1) != Some(&'{') {
        return Err(EvalError::UnexpectedChar { ch: '$', pos: start });
    }

    let mut i = start + 2;
    let mut name = String::new();
    while i < chars.len() {
        match chars[i] {
            '}' => {
                if name.is_empty() {
                    return Err(EvalError::UnexpectedChar { ch: '}', pos: i });
                }
                return Ok((Token::Ident(name), i + 1));
            }
            c if c.is_alphanumeric() || c == '_' => {
                name.push(c);
                i += 1;
            }
            other => return Err(EvalError::UnexpectedChar { ch: other, pos: i }),
        }
    }

    Err(EvalError::UnterminatedVariable(start))
}

/// Read a numeric literal
fn read_number(chars: &[char], start: usize) -> Result<(Token, usize), EvalError> {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }

    let text: String = chars[start..i].iter().collect();
    let n = text
        .parse::<f64>()
        .map_err(|_| EvalError::invalid_literal(&text))?;
    Ok((Token::Number(n), i))
}

/// Read an identifier or keyword
fn read_word(chars: &[char], start: usize) -> (Token, usize) {
    let mut i = start;
    while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
        i += 1;
    }

    let word: String = chars[start..i].iter().collect();
    let token = match word.as_str() {
        "true" => Token::Bool(true),
        "false" => Token::Bool(false),
        "null" => Token::Null,
        _ => Token::Ident(word),
    };
    (token, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_condition() {
        let tokens = tokenize("temperature > 25 && humidity < 60").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("temperature".to_string()),
                Token::Gt,
                Token::Number(25.0),
                Token::And,
                Token::Ident("humidity".to_string()),
                Token::Lt,
                Token::Number(60.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_var_ref() {
        let tokens = tokenize("${status} == 'active'").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("status".to_string()),
                Token::Eq,
                Token::Str("active".to_string()),
            ]
        );
    }

    #[test]
    fn test_two_char_operators_win_over_one_char() {
        let tokens = tokenize("a <= b >= c != d == e").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("a".to_string()),
                Token::Lte,
                Token::Ident("b".to_string()),
                Token::Gte,
                Token::Ident("c".to_string()),
                Token::NotEq,
                Token::Ident("d".to_string()),
                Token::Eq,
                Token::Ident("e".to_string()),
            ]
        );
    }

    #[test]
    fn test_operators_inside_quotes_stay_text() {
        let tokens = tokenize("name == 'a && b'").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("name".to_string()),
                Token::Eq,
                Token::Str("a && b".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        let tokens = tokenize(r#""line\none" 'it\'s'"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Str("line\none".to_string()),
                Token::Str("it's".to_string()),
            ]
        );
    }

    #[test]
    fn test_keywords() {
        let tokens = tokenize("true false null truthy").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Bool(true),
                Token::Bool(false),
                Token::Null,
                Token::Ident("truthy".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_number() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(err, EvalError::InvalidLiteral("1.2.3".to_string()));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("name == 'oops").unwrap_err();
        assert_eq!(err, EvalError::UnterminatedString(8));
    }

    #[test]
    fn test_unterminated_var_ref() {
        let err = tokenize("${status").unwrap_err();
        assert_eq!(err, EvalError::UnterminatedVariable(0));
    }

    #[test]
    fn test_single_ampersand_rejected() {
        let err = tokenize("a & b").unwrap_err();
        assert_eq!(err, EvalError::UnexpectedChar { ch: '&', pos: 2 });
    }

    #[test]
    fn test_single_equals_rejected() {
        let err = tokenize("a = b").unwrap_err();
        assert_eq!(err, EvalError::UnexpectedChar { ch: '=', pos: 2 });
    }
}
