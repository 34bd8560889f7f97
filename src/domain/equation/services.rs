use super::value_objects::{Coefficients, Roots, SolutionSet};
use crate::domain::logging::LogComponent;
use crate::log_trace;

/// Everything derived from one set of coefficients.
///
/// Fields may hold ±∞ or NaN when `a = 0`; `d` and `roots` are only `Some`
/// for finite real values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    pub coefficients: Coefficients,
    /// `b / a`
    pub b1: f64,
    /// `c / a`
    pub c1: f64,
    /// Vertex x coordinate, `−b1 / 2`
    pub m: f64,
    pub m_squared: f64,
    /// `m² − c1`
    pub discriminant: f64,
    /// Polynomial value at the vertex
    pub vertex_value: f64,
    /// Half-distance between the roots
    pub d: Option<f64>,
    pub roots: Option<Roots>,
}

impl DerivedQuantities {
    pub fn solution_set(&self) -> SolutionSet {
        SolutionSet::from(self.roots)
    }
}

/// Domain service: completes the square for `a·x² + b·x + c`.
pub fn evaluate(coefficients: Coefficients) -> DerivedQuantities {
    let Coefficients { a, b, c } = coefficients;
    let b1 = b / a;
    let c1 = c / a;
    let m = -b1 / 2.0;
    let m_squared = m * m;
    let discriminant = m_squared - c1;

    let d = (discriminant.is_finite() && discriminant >= 0.0).then(|| discriminant.sqrt());
    let roots = d
        .map(|d| Roots::new(m - d, m + d))
        .filter(|roots| roots.r.is_finite() && roots.s.is_finite());

    log_trace!(
        LogComponent::Domain("Equation"),
        "evaluate a={} b={} c={} -> m={} discriminant={}",
        a,
        b,
        c,
        m,
        discriminant
    );

    DerivedQuantities {
        coefficients,
        b1,
        c1,
        m,
        m_squared,
        discriminant,
        vertex_value: coefficients.value_at(m),
        d,
        roots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monic_square_has_repeated_root_at_origin() {
        let q = evaluate(Coefficients::new(1.0, 0.0, 0.0));
        assert_eq!(q.m, 0.0);
        assert_eq!(q.d, Some(0.0));
        assert_eq!(q.roots, Some(Roots::new(0.0, 0.0)));
        assert_eq!(q.solution_set(), SolutionSet::Single(0.0));
    }

    #[test]
    fn negative_discriminant_has_no_roots() {
        let q = evaluate(Coefficients::new(1.0, 0.0, 1.0));
        assert_eq!(q.discriminant, -1.0);
        assert_eq!(q.d, None);
        assert_eq!(q.solution_set(), SolutionSet::Empty);
    }

    #[test]
    fn two_distinct_roots() {
        let q = evaluate(Coefficients::new(1.0, -3.0, 2.0));
        assert_eq!(q.m, 1.5);
        assert_eq!(q.d, Some(0.5));
        assert_eq!(q.roots, Some(Roots::new(1.0, 2.0)));
        assert_eq!(q.vertex_value, -0.25);
    }

    #[test]
    fn non_monic_is_normalised() {
        let q = evaluate(Coefficients::new(2.0, -4.0, -6.0));
        assert_eq!(q.b1, -2.0);
        assert_eq!(q.c1, -3.0);
        assert_eq!(q.roots, Some(Roots::new(-1.0, 3.0)));
    }

    #[test]
    fn zero_leading_coefficient_propagates_without_roots() {
        for (b, c) in [(0.0, 0.0), (2.0, 0.0), (2.0, 3.0), (2.0, -3.0)] {
            let q = evaluate(Coefficients::new(0.0, b, c));
            assert_eq!(q.d, None, "b={b} c={c}");
            assert!(q.roots.is_none(), "b={b} c={c}");
        }
    }
}
