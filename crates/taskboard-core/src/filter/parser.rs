//! Recursive descent parser for filter query strings.

use super::ast::FilterExpression;
use super::error::{FilterError, FilterResult};
use super::lexer::{FilterToken, Lexer};

/// Parser for board filter queries.
///
/// # Grammar
///
/// ```text
/// or      ::= and ("OR" and)*
/// and     ::= not ("AND" not)*
/// not     ::= "NOT" not | primary
/// primary ::= "(" or ")" | TAG | "EMPTY"
/// ```
///
/// `NOT` binds tightest and is right-associative (`NOT NOT #a` stacks);
/// `AND` binds tighter than `OR`. A single-child `and`/`or` production
/// collapses to the child itself, so `#a` parses to a bare tag node.
///
/// # Example
///
/// ```
/// use taskboard_core_rs::filter::{FilterExpression, FilterParser};
///
/// let expr = FilterParser::parse("#a AND NOT #b");
/// assert_eq!(
///     expr,
///     FilterExpression::and(vec![
///         FilterExpression::tag("#a"),
///         FilterExpression::negate(FilterExpression::tag("#b")),
///     ])
/// );
///
/// // Malformed queries match everything instead of failing.
/// assert!(FilterParser::parse("(#a OR").is_match_all());
/// ```
pub struct FilterParser<'a> {
    lexer: Lexer<'a>,
    lookahead: FilterToken,
}

impl<'a> FilterParser<'a> {
    /// Parses a query, degrading to the match-all expression on any failure.
    ///
    /// Queries are user-authored column configuration, so this entry point
    /// never fails: an empty or all-whitespace query is match-all by
    /// definition, and a malformed one (unmatched parenthesis, operator
    /// missing an operand) degrades to match-all rather than hiding every
    /// task behind an error.
    pub fn parse(input: &'a str) -> FilterExpression {
        Self::try_parse(input).unwrap_or_else(|_| FilterExpression::match_all())
    }

    /// Strict variant of [`parse`](Self::parse) that reports what went wrong.
    ///
    /// Used by `parse` internally and by diagnostics that want to warn about
    /// a query before it degrades. Tokens left over after a complete
    /// expression are ignored, not an error.
    pub fn try_parse(input: &'a str) -> FilterResult<FilterExpression> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(FilterExpression::match_all());
        }

        let mut lexer = Lexer::new(trimmed);
        let lookahead = lexer.next_token();
        let mut parser = Self { lexer, lookahead };
        parser.parse_or()
    }

    /// Consumes the current token, pulling the next one into the lookahead.
    fn advance(&mut self) -> FilterToken {
        std::mem::replace(&mut self.lookahead, self.lexer.next_token())
    }

    /// Parses `and ("OR" and)*`, collapsing a single disjunct to itself.
    fn parse_or(&mut self) -> FilterResult<FilterExpression> {
        let mut children = vec![self.parse_and()?];
        while self.lookahead == FilterToken::Or {
            self.advance();
            children.push(self.parse_and()?);
        }
        if children.len() > 1 {
            Ok(FilterExpression::or(children))
        } else {
            Ok(children.swap_remove(0))
        }
    }

    /// Parses `not ("AND" not)*`, collapsing a single conjunct to itself.
    fn parse_and(&mut self) -> FilterResult<FilterExpression> {
        let mut children = vec![self.parse_not()?];
        while self.lookahead == FilterToken::And {
            self.advance();
            children.push(self.parse_not()?);
        }
        if children.len() > 1 {
            Ok(FilterExpression::and(children))
        } else {
            Ok(children.swap_remove(0))
        }
    }

    /// Parses `"NOT" not | primary`; `NOT` is right-associative.
    fn parse_not(&mut self) -> FilterResult<FilterExpression> {
        if self.lookahead == FilterToken::Not {
            self.advance();
            let inner = self.parse_not()?;
            return Ok(FilterExpression::negate(inner));
        }
        self.parse_primary()
    }

    /// Parses `"(" or ")" | TAG | "EMPTY"`.
    fn parse_primary(&mut self) -> FilterResult<FilterExpression> {
        match self.advance() {
            FilterToken::LParen => {
                let inner = self.parse_or()?;
                if self.lookahead != FilterToken::RParen {
                    return Err(FilterError::UnmatchedParenthesis);
                }
                self.advance();
                Ok(inner)
            }
            FilterToken::Tag(value) => Ok(FilterExpression::tag(value)),
            FilterToken::Empty => Ok(FilterExpression::Empty),
            FilterToken::Eof => Err(FilterError::UnexpectedEndOfInput),
            token => Err(FilterError::unexpected_token(format!("{token:?}"))),
        }
    }
}
