// Built-in validators

use crate::annotation::parse_int;
use crate::rules::Bound;
use crate::{FailureKind, Scalar};

/// Character count of a text value.
fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn len_as_i128(len: usize) -> i128 {
    i128::try_from(len).unwrap_or(i128::MAX)
}

/// `max` / `min`: compares integers directly and text by character count.
pub fn check_bound(value: Scalar<'_>, args: &[&str], direction: Bound) -> Result<(), FailureKind> {
    let [token] = args else {
        return Err(FailureKind::InvalidSyntax);
    };
    let bound = parse_int(token)?;

    match value {
        Scalar::Integer(actual) if direction.is_violated_by(actual, bound) => {
            Err(FailureKind::IntegerOutOfBounds {
                value: actual,
                bound,
                direction,
            })
        }
        Scalar::Text(text) => {
            let length = char_len(text);
            if direction.is_violated_by(len_as_i128(length), bound) {
                Err(FailureKind::LengthOutOfBounds {
                    value: text.to_string(),
                    length,
                    bound,
                    direction,
                })
            } else {
                Ok(())
            }
        }
        Scalar::Integer(_) => Ok(()),
    }
}

/// `in`: the value must equal one of the candidates.
///
/// For integers every candidate is parsed. A candidate that does not parse
/// never matches, and its syntax error is only reported when no other
/// candidate matched.
pub fn check_membership(value: Scalar<'_>, args: &[&str]) -> Result<(), FailureKind> {
    match value {
        Scalar::Integer(actual) => {
            let mut parse_error = None;
            for token in args {
                match parse_int(token) {
                    Ok(candidate) if i128::from(candidate) == actual => return Ok(()),
                    Ok(_) => {}
                    Err(e) => {
                        parse_error.get_or_insert(e);
                    }
                }
            }
            Err(parse_error.unwrap_or(FailureKind::NotFound))
        }
        Scalar::Text(text) => {
            if args.contains(&text) {
                Ok(())
            } else {
                Err(FailureKind::NotFound)
            }
        }
    }
}

/// `len`: exact character count. Only the first argument is used.
pub fn check_length(value: Scalar<'_>, args: &[&str]) -> Result<(), FailureKind> {
    let token = args.first().ok_or(FailureKind::InvalidSyntax)?;
    let expected = parse_int(token)?;

    match value {
        Scalar::Integer(_) => Err(FailureKind::UnsupportedValidator),
        Scalar::Text(text) => {
            let length = char_len(text);
            if len_as_i128(length) == i128::from(expected) {
                Ok(())
            } else {
                Err(FailureKind::LengthMismatch {
                    value: text.to_string(),
                    length,
                    expected,
                })
            }
        }
    }
}
