//! Lexer (tokenizer) for filter query strings.

use std::iter::Peekable;
use std::str::Chars;

/// A token in a filter query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    /// A tag reference, stored with its `#` prefix.
    Tag(String),

    /// The `AND` keyword.
    And,

    /// The `OR` keyword.
    Or,

    /// The `NOT` keyword.
    Not,

    /// The `EMPTY` keyword (matches tasks with no tags).
    Empty,

    /// Opening parenthesis `(`.
    LParen,

    /// Closing parenthesis `)`.
    RParen,

    /// End of input. Returned forever once the input is exhausted.
    Eof,
}

/// Lexer for tokenizing filter queries.
///
/// Queries come from free-text column configuration, so the lexer never
/// fails: whitespace separates tokens and anything unrecognizable is skipped
/// silently. Keywords are matched case-insensitively; any other bare word is
/// sugar for a tag reference (`wip` reads as `#wip`).
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given query string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }

    /// Reads the run of tag characters following a `#`.
    fn read_tag_body(&mut self) -> String {
        let mut body = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '/' || c == '-' {
                body.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        body
    }

    /// Reads a maximal run of ASCII letters.
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphabetic() {
                word.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        word
    }

    /// Returns the next token, or [`FilterToken::Eof`] at end of input.
    pub fn next_token(&mut self) -> FilterToken {
        loop {
            self.skip_whitespace();
            let Some(&c) = self.chars.peek() else {
                return FilterToken::Eof;
            };
            match c {
                '(' => {
                    self.chars.next();
                    return FilterToken::LParen;
                }
                ')' => {
                    self.chars.next();
                    return FilterToken::RParen;
                }
                '#' => {
                    self.chars.next();
                    let body = self.read_tag_body();
                    return FilterToken::Tag(format!("#{body}"));
                }
                _ if c.is_ascii_alphabetic() => {
                    let word = self.read_word();
                    return match word.to_uppercase().as_str() {
                        "AND" => FilterToken::And,
                        "OR" => FilterToken::Or,
                        "NOT" => FilterToken::Not,
                        "EMPTY" => FilterToken::Empty,
                        _ => FilterToken::Tag(format!("#{}", word.to_lowercase())),
                    };
                }
                // Anything else is noise; drop it and keep scanning.
                _ => {
                    self.chars.next();
                }
            }
        }
    }

    /// Collects all tokens up to and excluding [`FilterToken::Eof`].
    #[cfg(test)]
    pub fn tokenize(mut self) -> Vec<FilterToken> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                FilterToken::Eof => return tokens,
                token => tokens.push(token),
            }
        }
    }
}
