//! REM conditions: `field operator value` compiled once, evaluated per figure.
//!
//! Field names resolve case-insensitively through a fixed alias table. A
//! condition on a shape-specific field never matches a figure whose shape
//! lacks that field; this holds for every operator, `!=` included.
use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::error::CommandError;
use crate::figure::{Figure, GeometryField};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Owner,
    Density,
    Geometry(GeometryField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

#[derive(Debug, Clone, PartialEq)]
enum Test {
    OwnerEquals(String),
    OwnerDiffers(String),
    /// needle is stored lower-cased
    OwnerContains(String),
    Density(Comparison, f64),
    Geometry(GeometryField, Comparison, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    test: Test,
}

/// lower-cased name → field
static FIELD_NAMES: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
    HashMap::from([
        ("owner", Field::Owner),
        ("density", Field::Density),
        ("radius", Field::Geometry(GeometryField::Radius)),
        ("height", Field::Geometry(GeometryField::Height)),
        ("rebro1", Field::Geometry(GeometryField::EdgeA)),
        ("edgea", Field::Geometry(GeometryField::EdgeA)),
        ("rebro2", Field::Geometry(GeometryField::EdgeB)),
        ("edgeb", Field::Geometry(GeometryField::EdgeB)),
        ("rebro3", Field::Geometry(GeometryField::EdgeC)),
        ("edgec", Field::Geometry(GeometryField::EdgeC)),
    ])
});

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Field {
    pub fn resolve(name: &str) -> Option<Self> {
        FIELD_NAMES.get(name.to_lowercase().as_str()).copied()
    }
    pub fn name(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Density => "density",
            Self::Geometry(g) => g.name(),
        }
    }
}

impl Comparison {
    pub fn parse(operator: &str) -> Option<Self> {
        match operator {
            "=" | "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            _ => None,
        }
    }
    /// Plain IEEE comparison; `Eq`/`Ne` are exact.
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Gt => lhs > rhs,
            Self::Ge => lhs >= rhs,
            Self::Lt => lhs < rhs,
            Self::Le => lhs <= rhs,
        }
    }
}

impl Condition {
    pub fn compile(field: &str, operator: &str, value: &str) -> Result<Self, CommandError> {
        let resolved = Field::resolve(field)
            .ok_or_else(|| CommandError::UnknownField(field.to_string()))?;
        let invalid_operator = || CommandError::InvalidOperator {
            field: resolved.name(),
            operator: operator.to_string(),
        };

        let test = match resolved {
            Field::Owner => match operator {
                "=" | "==" => Test::OwnerEquals(value.to_string()),
                "!=" => Test::OwnerDiffers(value.to_string()),
                op if op.eq_ignore_ascii_case("contains") => {
                    Test::OwnerContains(value.to_lowercase())
                }
                _ => return Err(invalid_operator()),
            },
            Field::Density | Field::Geometry(_) => {
                // value is checked before the operator
                let number = value.trim().parse::<f64>().map_err(|_| CommandError::InvalidValue {
                    field: resolved.name(),
                    value: value.to_string(),
                })?;
                let cmp = Comparison::parse(operator).ok_or_else(invalid_operator)?;
                match resolved {
                    Field::Geometry(g) => Test::Geometry(g, cmp, number),
                    _ => Test::Density(cmp, number),
                }
            }
        };
        Ok(Self { test })
    }

    pub fn matches(&self, figure: &Figure) -> bool {
        match &self.test {
            Test::OwnerEquals(v) => figure.owner() == v,
            Test::OwnerDiffers(v) => figure.owner() != v,
            Test::OwnerContains(needle) => figure.owner().to_lowercase().contains(needle.as_str()),
            Test::Density(cmp, v) => cmp.apply(figure.density(), *v),
            Test::Geometry(field, cmp, v) => figure
                .field_value(*field)
                .is_some_and(|x| cmp.apply(x, *v)),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Point;

    const NUMERIC_OPS: [&str; 7] = ["=", "==", "!=", ">", ">=", "<", "<="];

    fn ball() -> Figure {
        Figure::sphere(5, "Alice", 2.5)
    }
    fn cylinder() -> Figure {
        Figure::cylinder(Point { x: 0.0, y: 0.0 }, 3.0, 10.0, "Bob", 1.0)
    }
    fn cuboid() -> Figure {
        Figure::parallelepiped([2, 3, 4], "Carl", 1.5)
    }

    fn check(field: &str, op: &str, value: &str, figure: &Figure) -> bool {
        Condition::compile(field, op, value).unwrap().matches(figure)
    }

    #[test]
    fn field_names_resolve_case_insensitively_with_aliases() {
        assert_eq!(Field::resolve("OWNER"), Some(Field::Owner));
        assert_eq!(Field::resolve("Density"), Some(Field::Density));
        for (a, b) in [("rebro1", "edgeA"), ("REBRO2", "edgeb"), ("Rebro3", "EDGEC")] {
            assert!(Field::resolve(a).is_some());
            assert_eq!(Field::resolve(a), Field::resolve(b));
        }
        assert_eq!(Field::resolve("volume"), None);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Condition::compile("colour", "==", "red").unwrap_err();
        assert_eq!(err, CommandError::UnknownField("colour".into()));
    }

    #[test]
    fn owner_operators() {
        assert!(check("owner", "=", "Alice", &ball()));
        assert!(check("owner", "==", "Alice", &ball()));
        assert!(!check("owner", "==", "alice", &ball()));
        assert!(check("owner", "!=", "Alice", &cylinder()));
        assert!(!check("owner", "!=", "Alice", &ball()));
        assert!(check("owner", "contains", "ob", &cylinder()));
        assert!(check("owner", "CONTAINS", "OB", &cylinder()));
        assert!(!check("owner", "contains", "zz", &cylinder()));
        // shared field: applies to every shape
        assert!(check("owner", "contains", "a", &cuboid()));
    }

    #[test]
    fn owner_rejects_ordering_operators() {
        for op in [">", ">=", "<", "<=", "like"] {
            let err = Condition::compile("owner", op, "x").unwrap_err();
            assert!(matches!(err, CommandError::InvalidOperator { field: "owner", .. }), "{op}");
        }
    }

    #[test]
    fn numeric_fields_require_a_number() {
        for field in ["density", "radius", "height", "edgea", "rebro2", "edgeC"] {
            let err = Condition::compile(field, ">", "ten").unwrap_err();
            assert!(matches!(err, CommandError::InvalidValue { .. }), "{field}");
        }
    }

    #[test]
    fn numeric_fields_reject_unknown_operators() {
        let err = Condition::compile("density", "contains", "1").unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidOperator { field: "density", operator: "contains".into() }
        );
        let err = Condition::compile("height", "=>", "1").unwrap_err();
        assert!(matches!(err, CommandError::InvalidOperator { field: "height", .. }));
    }

    #[test]
    fn density_strict_greater_than() {
        let at = |d: f64| Figure::sphere(1, "x", d);
        assert!(!check("density", ">", "10.0", &at(10.0)));
        assert!(check("density", ">", "10.0", &at(10.0001)));
        assert!(!check("density", ">", "10.0", &at(9.9999)));
    }

    #[test]
    fn comparison_truth_table() {
        let f = ball(); // radius 5
        let expect = [
            ("=", "5", true), ("==", "4", false), ("!=", "4", true), ("!=", "5", false),
            (">", "4", true), (">", "5", false), (">=", "5", true), (">=", "6", false),
            ("<", "6", true), ("<", "5", false), ("<=", "5", true), ("<=", "4", false),
        ];
        for (op, value, want) in expect {
            assert_eq!(check("radius", op, value, &f), want, "radius {op} {value}");
        }
    }

    #[test]
    fn edges_and_height_match_their_shapes() {
        assert!(check("edgeb", ">", "2", &cuboid()));
        assert!(check("rebro3", "==", "4", &cuboid()));
        assert!(!check("edgea", ">", "2", &cuboid()));
        assert!(check("height", "==", "10", &cylinder()));
        assert!(check("height", "<=", "10.5", &cylinder()));
    }

    #[test]
    fn absent_fields_never_match() {
        let scoped: [(&str, Vec<Figure>); 5] = [
            ("radius", vec![cylinder(), cuboid()]),
            ("height", vec![ball(), cuboid()]),
            ("edgeA", vec![ball(), cylinder()]),
            ("rebro2", vec![ball(), cylinder()]),
            ("edgec", vec![ball(), cylinder()]),
        ];
        for (field, others) in &scoped {
            for figure in others {
                for op in NUMERIC_OPS {
                    for value in ["-1e9", "0", "3", "10", "1e9"] {
                        assert!(
                            !check(field, op, value, figure),
                            "{field} {op} {value} on {}",
                            figure.shape().kind()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn density_applies_to_every_shape() {
        assert!(check("density", "<", "3", &ball()));
        assert!(check("density", "<", "3", &cylinder()));
        assert!(check("density", "<", "3", &cuboid()));
    }
}
