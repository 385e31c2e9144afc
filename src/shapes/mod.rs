pub mod common;
pub mod dispatch;
pub mod multipoint;
pub mod point;
pub mod polyline;
pub mod polyline_m;

use std::sync::Arc;

use crate::attributes::Attributes;
use crate::shp::header::ShapeType;

pub use common::{Point, Rectangle};
pub use dispatch::parse_shape;
pub use multipoint::MultiPoint;
pub use polyline::{PolyLine, Polygon};
pub use polyline_m::PolyLineM;

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Null,
    Point(Point),
    MultiPoint(MultiPoint),
    PolyLine(PolyLine),
    PolyLineM(PolyLineM),
    Polygon(Polygon),
}

impl Geometry {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Geometry::Null => ShapeType::Null,
            Geometry::Point(_) => ShapeType::Point,
            Geometry::MultiPoint(_) => ShapeType::MultiPoint,
            Geometry::PolyLine(_) => ShapeType::PolyLine,
            Geometry::PolyLineM(_) => ShapeType::PolyLineM,
            Geometry::Polygon(_) => ShapeType::Polygon,
        }
    }

    pub fn bounding_box(&self) -> Option<Rectangle> {
        match self {
            Geometry::Null | Geometry::Point(_) => None,
            Geometry::MultiPoint(multipoint) => Some(multipoint.bounding_box),
            Geometry::PolyLine(line) => Some(line.bounding_box),
            Geometry::PolyLineM(line) => Some(line.bounding_box),
            Geometry::Polygon(polygon) => Some(polygon.bounding_box),
        }
    }

    pub fn parts(&self) -> Vec<Vec<Point>> {
        match self {
            Geometry::Null => Vec::new(),
            Geometry::Point(point) => vec![vec![*point]],
            Geometry::MultiPoint(multipoint) => vec![multipoint.points.clone()],
            Geometry::PolyLine(line) => line.parts.clone(),
            Geometry::PolyLineM(line) => line.parts.clone(),
            Geometry::Polygon(polygon) => polygon.parts.clone(),
        }
    }

    pub fn measures(&self) -> Option<&[f64]> {
        match self {
            Geometry::PolyLineM(line) => Some(&line.measures),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub record_number: i32,
    pub geometry: Geometry,
    attributes: Option<Arc<Attributes>>,
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        self.geometry.shape_type()
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_deref()
    }

    // Case-insensitive attribute lookup. `None` means the column does not
    // exist; an empty field is `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_deref().and_then(|attrs| attrs.get(name))
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes
            .as_deref()
            .map(|attrs| attrs.names().collect())
            .unwrap_or_default()
    }
}
