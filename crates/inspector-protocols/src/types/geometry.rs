//! Viewport geometry: points and bounding boxes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"`.
impl FromStr for Point {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ProtocolError::InvalidPoint(s.to_string()))?;
        let x = x
            .trim()
            .parse::<f64>()
            .map_err(|_| ProtocolError::InvalidPoint(s.to_string()))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|_| ProtocolError::InvalidPoint(s.to_string()))?;
        Ok(Self { x, y })
    }
}

/// Bounding box for an element.
///
/// `x` is the left edge and `y` the top edge, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this bounding box. Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Surface of the box, `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
