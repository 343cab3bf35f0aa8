// Rule names and dispatch

use crate::validators::{check_bound, check_length, check_membership};
use crate::{FailureKind, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// `in:a,b,c` - value must be one of the candidates
    In,
    /// `max:n` - inclusive upper bound
    Max,
    /// `min:n` - inclusive lower bound
    Min,
    /// `len:n` - exact text length
    Len,
}

impl Rule {
    /// All rules, in the order they are documented.
    pub const ALL: [Rule; 4] = [Rule::In, Rule::Max, Rule::Min, Rule::Len];

    /// Rule name as written in annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::In => "in",
            Rule::Max => "max",
            Rule::Min => "min",
            Rule::Len => "len",
        }
    }

    /// Evaluate this rule against a scalar value.
    pub fn evaluate(&self, value: Scalar<'_>, args: &[&str]) -> Result<(), FailureKind> {
        match self {
            Rule::In => check_membership(value, args),
            Rule::Max => check_bound(value, args, Bound::Upper),
            Rule::Min => check_bound(value, args, Bound::Lower),
            Rule::Len => check_length(value, args),
        }
    }
}

impl FromStr for Rule {
    type Err = FailureKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Rule::In),
            "max" => Ok(Rule::Max),
            "min" => Ok(Rule::Min),
            "len" => Ok(Rule::Len),
            _ => Err(FailureKind::UnsupportedValidator),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a `max`/`min` bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    Upper,
    Lower,
}

impl Bound {
    /// Word used in failure messages.
    pub fn relation(&self) -> &'static str {
        match self {
            Bound::Upper => "greater",
            Bound::Lower => "less",
        }
    }

    /// Whether `actual` lies outside the bound. Equality is inside.
    pub fn is_violated_by(&self, actual: i128, bound: i64) -> bool {
        let bound = i128::from(bound);
        match self {
            Bound::Upper => actual > bound,
            Bound::Lower => actual < bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(rule.as_str().parse::<Rule>(), Ok(rule));
        }
    }

    #[test]
    fn test_unknown_rule() {
        assert_eq!("foo".parse::<Rule>(), Err(FailureKind::UnsupportedValidator));
        assert_eq!("MAX".parse::<Rule>(), Err(FailureKind::UnsupportedValidator));
        assert_eq!("".parse::<Rule>(), Err(FailureKind::UnsupportedValidator));
    }

    #[test]
    fn test_bound_is_inclusive() {
        assert!(!Bound::Upper.is_violated_by(10, 10));
        assert!(Bound::Upper.is_violated_by(11, 10));
        assert!(!Bound::Lower.is_violated_by(5, 5));
        assert!(Bound::Lower.is_violated_by(4, 5));
    }

    #[test]
    fn test_dispatch() {
        assert!(Rule::Max.evaluate(Scalar::Integer(3), &["5"]).is_ok());
        assert!(Rule::Min.evaluate(Scalar::Integer(3), &["5"]).is_err());
        assert!(Rule::Len.evaluate(Scalar::Text("abc"), &["3"]).is_ok());
        assert!(Rule::In.evaluate(Scalar::Text("b"), &["a", "b"]).is_ok());
    }
}
