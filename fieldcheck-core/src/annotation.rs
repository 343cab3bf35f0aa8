// Annotation parsing

use crate::FailureKind;

/// Separator between the rule name and its arguments.
pub const RULE_SEPARATOR: char = ':';

/// Separator between arguments.
pub const ARG_SEPARATOR: char = ',';

/// A parsed `rule:arg1,arg2,...` annotation.
///
/// Arguments are kept verbatim and in declaration order. Numeric rules trim
/// surrounding whitespace when they parse a token; membership on text does not.
///
/// ```
/// use fieldcheck_core::Annotation;
///
/// let annotation = Annotation::parse("in:admin,user").unwrap();
/// assert_eq!(annotation.rule(), "in");
/// assert_eq!(annotation.args(), ["admin", "user"]);
///
/// // The rule name ends at the first colon
/// let annotation = Annotation::parse("in:a:b,c").unwrap();
/// assert_eq!(annotation.args(), ["a:b", "c"]);
///
/// assert!(Annotation::parse("max").is_err());
/// assert!(Annotation::parse("max:").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    rule: &'a str,
    args: Vec<&'a str>,
}

impl<'a> Annotation<'a> {
    /// Parse a raw annotation string.
    pub fn parse(raw: &'a str) -> Result<Self, FailureKind> {
        let (rule, blob) = raw
            .split_once(RULE_SEPARATOR)
            .ok_or(FailureKind::InvalidSyntax)?;

        if blob.is_empty() {
            return Err(FailureKind::InvalidSyntax);
        }

        Ok(Self {
            rule,
            args: blob.split(ARG_SEPARATOR).collect(),
        })
    }

    /// Rule name, as written.
    pub fn rule(&self) -> &'a str {
        self.rule
    }

    /// Argument tokens in declaration order. Never empty.
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }
}

/// Parse an integer argument token.
pub(crate) fn parse_int(token: &str) -> Result<i64, FailureKind> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| FailureKind::InvalidSyntax)
}
