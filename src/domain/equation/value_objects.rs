use derive_more::Constructor;

/// Value Object - coefficients of `a·x² + b·x + c`
///
/// No `a ≠ 0` invariant: a zero leading coefficient is allowed and its
/// IEEE-754 consequences (±∞, NaN) flow through evaluation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0 }
    }
}

impl Coefficients {
    /// Build coefficients from raw text fields.
    ///
    /// An empty or malformed `a` becomes 1, an empty or malformed `b`/`c`
    /// becomes 0. Whitespace-only text reads as 0 in every field.
    pub fn from_inputs(a: &str, b: &str, c: &str) -> Self {
        Self {
            a: parse_field(a).unwrap_or(1.0),
            b: parse_field(b).unwrap_or(0.0),
            c: parse_field(c).unwrap_or(0.0),
        }
    }

    /// Value of the polynomial at `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

/// Parse one numeric field, accepting a comma as decimal separator.
///
/// `None` for empty or malformed text; non-finite results count as
/// malformed. Whitespace-only text is `Some(0.0)`, as JavaScript's `Number(" ")`.
pub fn parse_field(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Value Object - the two real roots `r ≤ s` (when `a > 0`)
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct Roots {
    pub r: f64,
    pub s: f64,
}

impl Roots {
    pub fn is_repeated(&self) -> bool {
        self.r == self.s
    }
}

/// Real solution set of `a·x² + b·x + c = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolutionSet {
    Empty,
    Single(f64),
    Pair(f64, f64),
}

impl From<Option<Roots>> for SolutionSet {
    fn from(roots: Option<Roots>) -> Self {
        match roots {
            None => SolutionSet::Empty,
            Some(roots) if roots.is_repeated() => SolutionSet::Single(roots.r),
            Some(roots) => SolutionSet::Pair(roots.r, roots.s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_fall_back_to_defaults() {
        assert_eq!(Coefficients::from_inputs("", "", ""), Coefficients::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn malformed_inputs_fall_back_to_defaults() {
        assert_eq!(Coefficients::from_inputs("abc", "-", "1e999"), Coefficients::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn whitespace_only_reads_as_zero() {
        assert_eq!(parse_field("  "), Some(0.0));
        assert_eq!(parse_field(""), None);
        assert_eq!(Coefficients::from_inputs(" ", "\t", " "), Coefficients::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn explicit_zero_leading_coefficient_is_kept() {
        assert_eq!(Coefficients::from_inputs("0", "2", "3").a, 0.0);
    }

    #[test]
    fn comma_decimal_is_accepted() {
        assert_eq!(parse_field(" 1,5 "), Some(1.5));
    }

    #[test]
    fn solution_set_from_roots() {
        assert_eq!(SolutionSet::from(None), SolutionSet::Empty);
        assert_eq!(SolutionSet::from(Some(Roots::new(2.0, 2.0))), SolutionSet::Single(2.0));
        assert_eq!(SolutionSet::from(Some(Roots::new(1.0, 2.0))), SolutionSet::Pair(1.0, 2.0));
    }
}
