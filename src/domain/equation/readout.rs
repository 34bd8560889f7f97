use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

use super::formatting::{
    format_coefficient, format_decimal_or, format_solution_set, sign_prefix, EMPTY_SET, NO_REAL_ROOT, NO_ROOT,
};
use super::services::DerivedQuantities;

/// View-model with the display text of every value in the formula breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationReadout {
    pub a: String,
    pub b: String,
    pub c: String,
    pub b1: String,
    pub neg_b1: String,
    pub c1: String,
    pub sign_b1: String,
    pub sign_c1: String,
    pub m: String,
    pub m_squared: String,
    pub discriminant: String,
    pub d: String,
    pub d_symbol: String,
    pub r: String,
    pub s: String,
    pub solution_set: String,
}

impl From<&DerivedQuantities> for EquationReadout {
    fn from(q: &DerivedQuantities) -> Self {
        let (r, s) = match q.roots {
            Some(roots) => (roots.r, roots.s),
            None => (f64::NAN, f64::NAN),
        };
        let d = q.d.unwrap_or(f64::NAN);

        Self {
            a: format_coefficient(q.coefficients.a),
            b: format_coefficient(q.coefficients.b),
            c: format_coefficient(q.coefficients.c),
            b1: format_decimal_or(q.b1, EMPTY_SET),
            neg_b1: format_decimal_or(-q.b1, EMPTY_SET),
            c1: format_decimal_or(q.c1, EMPTY_SET),
            sign_b1: sign_prefix(q.b1).to_string(),
            sign_c1: sign_prefix(q.c1).to_string(),
            m: format_decimal_or(q.m, EMPTY_SET),
            m_squared: format_decimal_or(q.m_squared, EMPTY_SET),
            discriminant: format_decimal_or(q.discriminant, EMPTY_SET),
            d: format_decimal_or(d, NO_REAL_ROOT),
            d_symbol: format_decimal_or(d, EMPTY_SET),
            r: format_decimal_or(r, EMPTY_SET),
            s: format_decimal_or(s, EMPTY_SET),
            solution_set: format_solution_set(q.solution_set()),
        }
    }
}

/// Typed binding key for one readout value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum ReadoutField {
    #[strum(serialize = "a")]
    A,
    #[strum(serialize = "b")]
    B,
    #[strum(serialize = "c")]
    C,
    #[strum(serialize = "b/a")]
    B1,
    #[strum(serialize = "-b/a")]
    NegB1,
    #[strum(serialize = "c/a")]
    C1,
    #[strum(serialize = "m")]
    M,
    #[strum(serialize = "m²")]
    MSquared,
    #[strum(serialize = "d²")]
    Discriminant,
    #[strum(serialize = "d")]
    D,
    #[strum(serialize = "r")]
    R,
    #[strum(serialize = "s")]
    S,
    #[strum(serialize = "S")]
    SolutionSet,
}

impl ReadoutField {
    /// Label shown next to the value.
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn value(self, readout: &EquationReadout) -> &str {
        match self {
            ReadoutField::A => &readout.a,
            ReadoutField::B => &readout.b,
            ReadoutField::C => &readout.c,
            ReadoutField::B1 => &readout.b1,
            ReadoutField::NegB1 => &readout.neg_b1,
            ReadoutField::C1 => &readout.c1,
            ReadoutField::M => &readout.m,
            ReadoutField::MSquared => &readout.m_squared,
            ReadoutField::Discriminant => &readout.discriminant,
            ReadoutField::D => &readout.d,
            ReadoutField::R => &readout.r,
            ReadoutField::S => &readout.s,
            ReadoutField::SolutionSet => &readout.solution_set,
        }
    }
}

/// The four summary lines printed in the canvas corner.
pub fn canvas_summary(q: &DerivedQuantities) -> [String; 4] {
    let (r, s) = match q.roots {
        Some(roots) => (roots.r, roots.s),
        None => (f64::NAN, f64::NAN),
    };
    let d = q.d.unwrap_or(f64::NAN);
    [
        format!("m = {}", format_decimal_or(q.m, NO_ROOT)),
        format!("d = {}", format_decimal_or(d, NO_ROOT)),
        format!("r = {}", format_decimal_or(r, NO_ROOT)),
        format!("s = {}", format_decimal_or(s, NO_ROOT)),
    ]
}
