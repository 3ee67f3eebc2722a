//! Numeric filter parsing
//!
//! Parses the compact comparison syntax used by `numericFilters`:
//!
//! ```text
//! expression := clause ("," clause)*
//! clause     := field operator value
//! operator   := ">" | ">=" | "=" | "<" | "<="
//! ```
//!
//! A clause that does not parse is dropped on its own; the remaining clauses
//! still apply.

use std::fmt;

use thiserror::Error;

use super::types::{FilterPredicate, NumberOp, NumericField};

/// One `field operator value` comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericFilter {
    pub field: NumericField,
    pub operator: NumberOp,
    pub value: f64,
}

impl From<NumericFilter> for FilterPredicate {
    fn from(filter: NumericFilter) -> Self {
        FilterPredicate::Numeric {
            field: filter.field,
            operator: filter.operator,
            value: filter.value,
        }
    }
}

/// Why a clause was dropped
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClauseError {
    #[error("Malformed numeric filter clause: '{0}'")]
    Malformed(String),

    #[error("Field '{0}' does not support numeric filters")]
    UnknownField(String),

    #[error("Invalid numeric value '{value}' for {field}")]
    InvalidNumber { field: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Text(&'a str),
    Operator(NumberOp),
    Comma,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Comma => f.write_str(","),
        }
    }
}

/// Split input into text runs, operators and commas.
///
/// Two-character operators win over their one-character prefixes.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (token, width) = match bytes[i] {
            b',' => (Token::Comma, 1),
            b'>' if bytes.get(i + 1) == Some(&b'=') => (Token::Operator(NumberOp::Gte), 2),
            b'<' if bytes.get(i + 1) == Some(&b'=') => (Token::Operator(NumberOp::Lte), 2),
            b'>' => (Token::Operator(NumberOp::Gt), 1),
            b'<' => (Token::Operator(NumberOp::Lt), 1),
            b'=' => (Token::Operator(NumberOp::Eq), 1),
            _ => {
                i += 1;
                continue;
            }
        };
        // Delimiters are ASCII, so `i` is always a char boundary here
        if text_start < i {
            tokens.push(Token::Text(&input[text_start..i]));
        }
        tokens.push(token);
        i += width;
        text_start = i;
    }

    if text_start < bytes.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

fn parse_clause(tokens: &[Token<'_>]) -> Result<NumericFilter, ClauseError> {
    let [Token::Text(field), Token::Operator(operator), Token::Text(value)] = tokens else {
        let clause: String = tokens.iter().map(ToString::to_string).collect();
        return Err(ClauseError::Malformed(clause));
    };

    let field_name = field.trim();
    let field = NumericField::from_name(field_name)
        .ok_or_else(|| ClauseError::UnknownField(field_name.to_string()))?;

    let value_text = value.trim();
    let value = value_text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ClauseError::InvalidNumber {
            field: field_name.to_string(),
            value: value_text.to_string(),
        })?;

    Ok(NumericFilter {
        field,
        operator: *operator,
        value,
    })
}

/// Parse every clause, keeping the outcome of each one in input order
pub fn parse_clauses(input: &str) -> Vec<Result<NumericFilter, ClauseError>> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    tokenize(input)
        .split(|token| *token == Token::Comma)
        .map(parse_clause)
        .collect()
}

/// Parse a `numericFilters` expression, dropping clauses that fail
pub fn parse_numeric_filters(input: &str) -> Vec<NumericFilter> {
    parse_clauses(input)
        .into_iter()
        .filter_map(|clause| match clause {
            Ok(filter) => Some(filter),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping numeric filter clause");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(field: NumericField, operator: NumberOp, value: f64) -> NumericFilter {
        NumericFilter {
            field,
            operator,
            value,
        }
    }

    #[test]
    fn tokenize_prefers_two_char_operators() {
        assert_eq!(
            tokenize("price>=5"),
            vec![
                Token::Text("price"),
                Token::Operator(NumberOp::Gte),
                Token::Text("5")
            ]
        );
        assert_eq!(
            tokenize("rating<=4"),
            vec![
                Token::Text("rating"),
                Token::Operator(NumberOp::Lte),
                Token::Text("4")
            ]
        );
    }

    #[test]
    fn tokenize_splits_on_commas() {
        assert_eq!(
            tokenize("a=1,b<2"),
            vec![
                Token::Text("a"),
                Token::Operator(NumberOp::Eq),
                Token::Text("1"),
                Token::Comma,
                Token::Text("b"),
                Token::Operator(NumberOp::Lt),
                Token::Text("2"),
            ]
        );
    }

    #[test]
    fn parse_two_clauses() {
        assert_eq!(
            parse_numeric_filters("price>50,rating<=4"),
            vec![
                filter(NumericField::Price, NumberOp::Gt, 50.0),
                filter(NumericField::Rating, NumberOp::Lte, 4.0),
            ]
        );
    }

    #[test]
    fn parse_every_operator() {
        let cases = [
            ("price>1", NumberOp::Gt),
            ("price>=1", NumberOp::Gte),
            ("price=1", NumberOp::Eq),
            ("price<1", NumberOp::Lt),
            ("price<=1", NumberOp::Lte),
        ];
        for (input, op) in cases {
            assert_eq!(
                parse_numeric_filters(input),
                vec![filter(NumericField::Price, op, 1.0)],
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn empty_expression_yields_nothing() {
        assert!(parse_clauses("").is_empty());
        assert!(parse_clauses("   ").is_empty());
    }

    #[test]
    fn unknown_field_is_dropped() {
        assert!(parse_numeric_filters("bogus>10").is_empty());
        assert_eq!(
            parse_clauses("bogus>10"),
            vec![Err(ClauseError::UnknownField("bogus".to_string()))]
        );
    }

    #[test]
    fn invalid_number_drops_only_that_clause() {
        assert_eq!(
            parse_clauses("price>abc,rating>3"),
            vec![
                Err(ClauseError::InvalidNumber {
                    field: "price".to_string(),
                    value: "abc".to_string()
                }),
                Ok(filter(NumericField::Rating, NumberOp::Gt, 3.0)),
            ]
        );
    }

    #[test]
    fn non_finite_and_empty_values_are_invalid() {
        assert!(parse_numeric_filters("price>NaN").is_empty());
        assert!(parse_numeric_filters("price<inf").is_empty());
        assert!(parse_numeric_filters("price>").is_empty());
    }

    #[test]
    fn malformed_clauses_do_not_abort_parsing() {
        let clauses = parse_clauses("price,rating>>3,price==2,price>10");
        assert_eq!(clauses.len(), 4);
        assert_eq!(clauses[0], Err(ClauseError::Malformed("price".to_string())));
        assert_eq!(
            clauses[1],
            Err(ClauseError::Malformed("rating>>3".to_string()))
        );
        assert_eq!(
            clauses[2],
            Err(ClauseError::Malformed("price==2".to_string()))
        );
        assert_eq!(
            clauses[3],
            Ok(filter(NumericField::Price, NumberOp::Gt, 10.0))
        );
    }

    #[test]
    fn trailing_comma_is_a_dropped_empty_clause() {
        assert_eq!(
            parse_numeric_filters("price>10,"),
            vec![filter(NumericField::Price, NumberOp::Gt, 10.0)]
        );
    }

    #[test]
    fn same_field_clauses_are_kept_independently() {
        assert_eq!(
            parse_numeric_filters("price>=10,price<=50"),
            vec![
                filter(NumericField::Price, NumberOp::Gte, 10.0),
                filter(NumericField::Price, NumberOp::Lte, 50.0),
            ]
        );
    }

    #[test]
    fn whitespace_and_signs_are_accepted() {
        assert_eq!(
            parse_numeric_filters(" price > -5 , rating = 4.5 "),
            vec![
                filter(NumericField::Price, NumberOp::Gt, -5.0),
                filter(NumericField::Rating, NumberOp::Eq, 4.5),
            ]
        );
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert!(parse_numeric_filters("Price>5").is_empty());
    }

    #[test]
    fn numeric_filter_converts_to_predicate() {
        let predicate: FilterPredicate = filter(NumericField::Rating, NumberOp::Lt, 3.0).into();
        assert_eq!(
            predicate,
            FilterPredicate::Numeric {
                field: NumericField::Rating,
                operator: NumberOp::Lt,
                value: 3.0
            }
        );
    }
}
