use crate::catalog::Unit;
use serde::Serialize;

/// Numeric transform attached to a conversion pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transform {
    /// value * factor
    Scale { factor: f64 },
    /// ((value + offset_in) * numerator / denominator) + offset_out
    ///
    /// Kept as a ratio instead of a single factor so that 9/5 and 5/9 are
    /// evaluated in the same order as the published formulas.
    Affine {
        offset_in: f64,
        numerator: f64,
        denominator: f64,
        offset_out: f64,
    },
}

impl Transform {
    pub const fn scale(factor: f64) -> Self {
        Transform::Scale { factor }
    }

    pub const fn affine(offset_in: f64, numerator: f64, denominator: f64, offset_out: f64) -> Self {
        Transform::Affine {
            offset_in,
            numerator,
            denominator,
            offset_out,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Transform::Scale { factor } => value * factor,
            Transform::Affine {
                offset_in,
                numerator,
                denominator,
                offset_out,
            } => {
                let shifted = if offset_in == 0.0 {
                    value
                } else {
                    value + offset_in
                };
                let scaled = if numerator == denominator {
                    shifted
                } else {
                    shifted * numerator / denominator
                };
                if offset_out == 0.0 {
                    scaled
                } else {
                    scaled + offset_out
                }
            }
        }
    }

    /// Human readable formula in terms of `x`
    pub fn describe(&self) -> String {
        match *self {
            Transform::Scale { factor } => format!("x * {}", factor),
            Transform::Affine {
                offset_in,
                numerator,
                denominator,
                offset_out,
            } => {
                let mut expr = if offset_in == 0.0 {
                    "x".to_string()
                } else if offset_in < 0.0 {
                    format!("(x - {})", -offset_in)
                } else {
                    format!("(x + {})", offset_in)
                };
                if numerator != denominator {
                    expr = format!("{} * {} / {}", expr, numerator, denominator);
                }
                if offset_out < 0.0 {
                    expr = format!("{} - {}", expr, -offset_out);
                } else if offset_out > 0.0 {
                    expr = format!("{} + {}", expr, offset_out);
                }
                expr
            }
        }
    }
}

/// One entry of the conversion table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rule {
    pub from: Unit,
    pub to: Unit,
    pub transform: Transform,
}

impl Rule {
    pub const fn new(from: Unit, to: Unit, transform: Transform) -> Self {
        Self {
            from,
            to,
            transform,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        self.transform.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_apply() {
        assert_eq!(Transform::scale(12.0).apply(2.0), 24.0);
    }

    #[test]
    fn test_affine_apply_matches_formula_order() {
        let c_to_f = Transform::affine(0.0, 9.0, 5.0, 32.0);
        assert_eq!(c_to_f.apply(37.0), (37.0 * 9.0 / 5.0) + 32.0);

        let f_to_k = Transform::affine(-32.0, 5.0, 9.0, 273.15);
        assert_eq!(f_to_k.apply(98.6), ((98.6 - 32.0) * 5.0 / 9.0) + 273.15);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Transform::scale(3.281).describe(), "x * 3.281");
        assert_eq!(
            Transform::affine(-32.0, 5.0, 9.0, 0.0).describe(),
            "(x - 32) * 5 / 9"
        );
        assert_eq!(
            Transform::affine(0.0, 1.0, 1.0, 273.15).describe(),
            "x + 273.15"
        );
    }
}
