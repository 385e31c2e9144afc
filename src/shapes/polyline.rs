use crate::core::result::Result;
use crate::shapes::common::{ensure_exact_len, parse_parts, parse_parts_prefix, Point, Rectangle};

#[derive(Debug, Clone, PartialEq)]
pub struct PolyLine {
    pub bounding_box: Rectangle,
    pub parts: Vec<Vec<Point>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub bounding_box: Rectangle,
    pub parts: Vec<Vec<Point>>,
}

pub fn parse_polyline(bytes: &[u8]) -> Result<PolyLine> {
    let (bounding_box, parts) = parse_multipart(bytes, "polyline")?;
    Ok(PolyLine {
        bounding_box,
        parts,
    })
}

pub fn parse_polygon(bytes: &[u8]) -> Result<Polygon> {
    let (bounding_box, parts) = parse_multipart(bytes, "polygon")?;
    Ok(Polygon {
        bounding_box,
        parts,
    })
}

fn parse_multipart(bytes: &[u8], layout: &str) -> Result<(Rectangle, Vec<Vec<Point>>)> {
    let prefix = parse_parts_prefix(bytes)?;
    ensure_exact_len(bytes, prefix.parts_base() + prefix.points_len(), layout)?;
    let parts = parse_parts(bytes, &prefix, 0)?;
    Ok((prefix.bounding_box, parts))
}
