//! Figure records: shared owner/density attributes plus exactly one shape.
use std::fmt;
use serde::Serialize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Attributes every figure carries regardless of shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attributes {
    pub density: f64,
    pub owner: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sphere {
    pub radius: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cylinder {
    pub center: Point,
    pub radius: f64,
    pub height: f64,
}

/// Rectangular box given by its three edge lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parallelepiped {
    pub edge_a: i64,
    pub edge_b: i64,
    pub edge_c: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Parallelepiped(Parallelepiped),
}

/// Shape-specific numeric fields reachable from a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryField {
    Radius,
    Height,
    EdgeA,
    EdgeB,
    EdgeC,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    #[serde(flatten)]
    attributes: Attributes,
    #[serde(flatten)]
    shape: Shape,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Cylinder(_) => "cylinder",
            Self::Parallelepiped(_) => "parallelepiped",
        }
    }
}

impl GeometryField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Height => "height",
            Self::EdgeA => "edgeA",
            Self::EdgeB => "edgeB",
            Self::EdgeC => "edgeC",
        }
    }
}

impl Figure {
    pub fn new(shape: Shape, owner: impl Into<String>, density: f64) -> Self {
        Self { attributes: Attributes { density, owner: owner.into() }, shape }
    }
    pub fn sphere(radius: i64, owner: impl Into<String>, density: f64) -> Self {
        Self::new(Shape::Sphere(Sphere { radius }), owner, density)
    }
    pub fn cylinder(
        center: Point,
        radius: f64,
        height: f64,
        owner: impl Into<String>,
        density: f64,
    ) -> Self {
        Self::new(Shape::Cylinder(Cylinder { center, radius, height }), owner, density)
    }
    pub fn parallelepiped(
        edges: [i64; 3],
        owner: impl Into<String>,
        density: f64,
    ) -> Self {
        let [edge_a, edge_b, edge_c] = edges;
        Self::new(Shape::Parallelepiped(Parallelepiped { edge_a, edge_b, edge_c }), owner, density)
    }

    // Each setter replaces both the shape and the shared attributes.

    pub fn set_sphere(&mut self, radius: i64, owner: impl Into<String>, density: f64) {
        *self = Self::sphere(radius, owner, density);
    }
    pub fn set_cylinder(
        &mut self,
        center: Point,
        radius: f64,
        height: f64,
        owner: impl Into<String>,
        density: f64,
    ) {
        *self = Self::cylinder(center, radius, height, owner, density);
    }
    pub fn set_parallelepiped(&mut self, edges: [i64; 3], owner: impl Into<String>, density: f64) {
        *self = Self::parallelepiped(edges, owner, density);
    }

    pub fn density(&self) -> f64 {
        self.attributes.density
    }
    pub fn owner(&self) -> &str {
        &self.attributes.owner
    }
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn as_sphere(&self) -> Option<&Sphere> {
        match &self.shape {
            Shape::Sphere(x) => Some(x),
            _ => None,
        }
    }
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match &self.shape {
            Shape::Cylinder(x) => Some(x),
            _ => None,
        }
    }
    pub fn as_parallelepiped(&self) -> Option<&Parallelepiped> {
        match &self.shape {
            Shape::Parallelepiped(x) => Some(x),
            _ => None,
        }
    }

    /// Shape-scoped numeric lookup; `None` when the active shape does not
    /// expose `field`. `radius` is only exposed by spheres.
    pub fn field_value(&self, field: GeometryField) -> Option<f64> {
        match (&self.shape, field) {
            (Shape::Sphere(s), GeometryField::Radius) => Some(s.radius as f64),
            (Shape::Cylinder(c), GeometryField::Height) => Some(c.height),
            (Shape::Parallelepiped(p), GeometryField::EdgeA) => Some(p.edge_a as f64),
            (Shape::Parallelepiped(p), GeometryField::EdgeB) => Some(p.edge_b as f64),
            (Shape::Parallelepiped(p), GeometryField::EdgeC) => Some(p.edge_c as f64),
            _ => None,
        }
    }

    /// Multi-line, human-readable block. Pure; printing is the caller's job.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = match self.shape {
            Shape::Sphere(_) => ("=Ball=", "====="),
            Shape::Cylinder(_) => ("=== Cylinder ===", "================"),
            Shape::Parallelepiped(_) => ("=Parallelepiped=", "====="),
        };
        writeln!(f, "{}", banner.0)?;
        writeln!(f, "Density: {}", self.attributes.density)?;
        writeln!(f, "Owner: {}", self.attributes.owner)?;
        match &self.shape {
            Shape::Sphere(s) => {
                writeln!(f, "Radius  {}", s.radius)?;
            }
            Shape::Cylinder(c) => {
                writeln!(f, "Center: ({:.2}, {:.2})", c.center.x, c.center.y)?;
                writeln!(f, "Radius: {:.2}", c.radius)?;
                writeln!(f, "Height: {:.2}", c.height)?;
            }
            Shape::Parallelepiped(p) => {
                writeln!(f, "Rebro1  {}", p.edge_a)?;
                writeln!(f, "Rebro2  {}", p.edge_b)?;
                writeln!(f, "Rebro3  {}", p.edge_c)?;
            }
        }
        writeln!(f, "{}", banner.1)
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(f: &Figure) -> usize {
        [f.as_sphere().is_some(), f.as_cylinder().is_some(), f.as_parallelepiped().is_some()]
            .iter()
            .filter(|x| **x)
            .count()
    }

    #[test]
    fn setters_replace_shape_and_attributes() {
        let mut f = Figure::sphere(5, "Alice", 2.5);
        f.set_cylinder(Point { x: 1.0, y: 2.0 }, 3.0, 10.0, "Bob", 1.0);
        assert_eq!(populated(&f), 1);
        assert!(f.as_sphere().is_none());
        assert_eq!(f.as_cylinder().map(|c| c.height), Some(10.0));
        assert_eq!(f.owner(), "Bob");
        assert_eq!(f.density(), 1.0);

        f.set_parallelepiped([2, 3, 4], "Carl", 1.5);
        assert_eq!(populated(&f), 1);
        assert_eq!(f.as_parallelepiped().map(|p| p.edge_b), Some(3));

        f.set_sphere(7, "Dana", 0.0);
        assert_eq!(populated(&f), 1);
        assert_eq!(f.as_sphere().map(|s| s.radius), Some(7));
        assert_eq!(f.owner(), "Dana");
    }

    #[test]
    fn field_value_is_shape_scoped() {
        let ball = Figure::sphere(5, "a", 1.0);
        let cyl = Figure::cylinder(Point { x: 0.0, y: 0.0 }, 3.0, 10.0, "b", 1.0);
        let bx = Figure::parallelepiped([2, 3, 4], "c", 1.0);

        assert_eq!(ball.field_value(GeometryField::Radius), Some(5.0));
        assert_eq!(ball.field_value(GeometryField::Height), None);
        assert_eq!(cyl.field_value(GeometryField::Height), Some(10.0));
        assert_eq!(cyl.field_value(GeometryField::Radius), None);
        assert_eq!(cyl.field_value(GeometryField::EdgeA), None);
        assert_eq!(bx.field_value(GeometryField::EdgeA), Some(2.0));
        assert_eq!(bx.field_value(GeometryField::EdgeB), Some(3.0));
        assert_eq!(bx.field_value(GeometryField::EdgeC), Some(4.0));
        assert_eq!(bx.field_value(GeometryField::Radius), None);
    }

    #[test]
    fn render_matches_report_layout() {
        let ball = Figure::sphere(5, "Alice", 2.5);
        assert_eq!(ball.render(), "=Ball=\nDensity: 2.5\nOwner: Alice\nRadius  5\n=====\n");

        let cyl = Figure::cylinder(Point { x: 0.0, y: 1.5 }, 3.0, 10.0, "Bob", 1.0);
        assert_eq!(
            cyl.render(),
            "=== Cylinder ===\nDensity: 1\nOwner: Bob\nCenter: (0.00, 1.50)\n\
             Radius: 3.00\nHeight: 10.00\n================\n"
        );

        let bx = Figure::parallelepiped([2, 3, 4], "Carl", 1.5);
        assert!(bx.render().starts_with("=Parallelepiped=\n"));
        assert!(bx.render().contains("Rebro2  3\n"));
    }

    #[test]
    fn serializes_flat_with_kind_tag() {
        let bx = Figure::parallelepiped([2, 3, 4], "Carl", 1.5);
        let json = serde_json::to_value(&bx).unwrap();
        assert_eq!(json["kind"], "parallelepiped");
        assert_eq!(json["owner"], "Carl");
        assert_eq!(json["edge_c"], 4);
    }
}
