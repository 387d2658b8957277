//! Expression tree for filter queries.

use serde::{Deserialize, Serialize};

/// A parsed filter expression.
///
/// The tree is immutable once parsed; evaluation never mutates it. The serde
/// representation is the persisted board-configuration shape,
/// `{"type": "...", "value"?, "children"?}`:
///
/// ```
/// use taskboard_core_rs::filter::FilterExpression;
///
/// let expr = FilterExpression::tag("#in/wip");
/// let json = serde_json::to_string(&expr).unwrap();
/// assert_eq!(json, r##"{"type":"tag","value":"#in/wip"}"##);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterExpression {
    /// True when every child matches; vacuously true with no children.
    And {
        /// Conjuncts, in query order.
        children: Vec<FilterExpression>,
    },

    /// True when any child matches. An empty child list matches everything;
    /// that form is the fallback for empty and malformed queries.
    Or {
        /// Disjuncts, in query order.
        children: Vec<FilterExpression>,
    },

    /// True when its single child does not match.
    Not {
        /// Exactly one child in well-formed trees.
        children: Vec<FilterExpression>,
    },

    /// True when the task carries this tag, `#` prefix included.
    Tag {
        /// The tag literal, e.g. `#in/wip`.
        value: String,
    },

    /// True when the task has no tags at all.
    Empty,

    /// Catch-all for expression kinds written by newer versions. Evaluates
    /// true so an unrecognized filter shows tasks instead of hiding them.
    #[serde(other)]
    Unknown,
}

impl FilterExpression {
    /// Creates an AND over `children`.
    pub fn and(children: Vec<FilterExpression>) -> Self {
        FilterExpression::And { children }
    }

    /// Creates an OR over `children`.
    pub fn or(children: Vec<FilterExpression>) -> Self {
        FilterExpression::Or { children }
    }

    /// Creates a NOT around `inner`.
    pub fn negate(inner: FilterExpression) -> Self {
        FilterExpression::Not {
            children: vec![inner],
        }
    }

    /// Creates a tag reference.
    pub fn tag(value: impl Into<String>) -> Self {
        FilterExpression::Tag {
            value: value.into(),
        }
    }

    /// The expression every empty or malformed query degrades to.
    pub fn match_all() -> Self {
        FilterExpression::Or {
            children: Vec::new(),
        }
    }

    /// True for the childless-OR match-all form.
    pub fn is_match_all(&self) -> bool {
        matches!(self, FilterExpression::Or { children } if children.is_empty())
    }

    /// Renders the canonical query string for this expression.
    ///
    /// Re-parsing the rendering of a parser-produced tree yields a
    /// structurally equal tree. The match-all expression renders as the
    /// empty string, as do forms the parser cannot produce (childless
    /// `and`/`not`, [`FilterExpression::Unknown`]).
    pub fn query_string(&self) -> String {
        let mut out = String::new();
        self.write_query(&mut out);
        out
    }

    /// Binding strength, tighter binds higher.
    fn precedence(&self) -> u8 {
        match self {
            FilterExpression::Or { .. } => 1,
            FilterExpression::And { .. } => 2,
            FilterExpression::Not { .. } => 3,
            FilterExpression::Tag { .. } | FilterExpression::Empty | FilterExpression::Unknown => 4,
        }
    }

    fn write_query(&self, out: &mut String) {
        match self {
            FilterExpression::Or { children } => {
                Self::write_join(children, " OR ", self.precedence(), out);
            }
            FilterExpression::And { children } => {
                Self::write_join(children, " AND ", self.precedence(), out);
            }
            FilterExpression::Not { children } => {
                if let Some(child) = children.first() {
                    out.push_str("NOT ");
                    // NOT chains without parens; weaker operators need them.
                    Self::write_child(child, child.precedence() < 3, out);
                }
            }
            FilterExpression::Tag { value } => out.push_str(value),
            FilterExpression::Empty => out.push_str("EMPTY"),
            FilterExpression::Unknown => {}
        }
    }

    fn write_join(children: &[FilterExpression], sep: &str, prec: u8, out: &mut String) {
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            // Same-strength children were parenthesized in the source;
            // keep them grouped so the rendering re-parses identically.
            Self::write_child(child, child.precedence() <= prec, out);
        }
    }

    fn write_child(child: &FilterExpression, parens: bool, out: &mut String) {
        if parens {
            out.push('(');
            child.write_query(out);
            out.push(')');
        } else {
            child.write_query(out);
        }
    }
}
