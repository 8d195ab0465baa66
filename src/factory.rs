//! ADD parameter parsing: positional tokens → [`Figure`].
//!
//! Arity is a minimum. The owner is the single token at its position; any
//! tokens after it are ignored (logged at debug).
use std::str::FromStr;

use crate::error::ParseError;
use crate::figure::{Figure, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureType {
    Ball,
    Cylinder,
    Parallelepiped,
}

impl FigureType {
    /// Case-insensitive; accepts `SPHERE` and `BOX` as aliases.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        match token.to_uppercase().as_str() {
            "BALL" | "SPHERE" => Ok(Self::Ball),
            "CYLINDER" => Ok(Self::Cylinder),
            "PARALLELEPIPED" | "BOX" => Ok(Self::Parallelepiped),
            _ => Err(ParseError::UnknownFigureType(token.to_string())),
        }
    }
    fn label(self) -> &'static str {
        match self {
            Self::Ball => "BALL",
            Self::Cylinder => "CYLINDER",
            Self::Parallelepiped => "PARALLELEPIPED",
        }
    }
    fn usage(self) -> &'static str {
        match self {
            Self::Ball => "radius density owner",
            Self::Cylinder => "centerX centerY radius height density owner",
            Self::Parallelepiped => "edgeA edgeB edgeC density owner",
        }
    }
    fn arity(self) -> usize {
        match self {
            Self::Ball => 3,
            Self::Cylinder => 6,
            Self::Parallelepiped => 5,
        }
    }
}

pub fn create(kind: FigureType, params: &[&str]) -> Result<Figure, ParseError> {
    let arity = kind.arity();
    if params.len() < arity {
        return Err(ParseError::Arity { kind: kind.label(), usage: kind.usage() });
    }
    if params.len() > arity {
        tracing::debug!(
            figure = kind.label(),
            ignored = ?&params[arity..],
            "ignoring tokens after owner"
        );
    }
    let figure = match kind {
        FigureType::Ball => {
            let radius = number::<i64>("radius", params[0])?;
            let density = number::<f64>("density", params[1])?;
            Figure::sphere(radius, params[2], density)
        }
        FigureType::Cylinder => {
            let x = number::<f64>("centerX", params[0])?;
            let y = number::<f64>("centerY", params[1])?;
            let radius = number::<f64>("radius", params[2])?;
            let height = number::<f64>("height", params[3])?;
            let density = number::<f64>("density", params[4])?;
            Figure::cylinder(Point { x, y }, radius, height, params[5], density)
        }
        FigureType::Parallelepiped => {
            let edge_a = number::<i64>("edgeA", params[0])?;
            let edge_b = number::<i64>("edgeB", params[1])?;
            let edge_c = number::<i64>("edgeC", params[2])?;
            let density = number::<f64>("density", params[3])?;
            Figure::parallelepiped([edge_a, edge_b, edge_c], params[4], density)
        }
    };
    Ok(figure)
}

fn number<T: FromStr>(param: &'static str, token: &str) -> Result<T, ParseError> {
    token.parse::<T>().map_err(|_| ParseError::Number { param, token: token.to_string() })
}

// ------------------------------- Tests ------------------------------------ //
