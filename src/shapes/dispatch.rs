use std::sync::Arc;

use crate::attributes::Attributes;
use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;
use crate::io::{read_i32, ByteOrder};
use crate::shapes::{multipoint, point, polyline, polyline_m, Geometry, Shape};
use crate::shp::header::ShapeType;
use crate::shp::index::RECORD_HEADER_LENGTH;

const MIN_RECORD_LENGTH: usize = 12;

pub fn parse_shape(record: &[u8], attributes: Option<Arc<Attributes>>) -> Result<Shape> {
    if record.len() < MIN_RECORD_LENGTH {
        return Err(ShpError::new(
            ErrorKind::TooShort,
            format!(
                "shape record must be at least {MIN_RECORD_LENGTH} bytes long, got {}",
                record.len()
            ),
        ));
    }

    let record_number = read_i32(record, 0, ByteOrder::Big)?;
    let content_length_words = read_i32(record, 4, ByteOrder::Big)?;
    let type_code = read_i32(record, 8, ByteOrder::Little)?;

    let expected = i64::from(content_length_words) * 2 + RECORD_HEADER_LENGTH as i64;
    if record.len() as i64 != expected {
        return Err(ShpError::new(
            ErrorKind::StructuralMismatch,
            format!(
                "record {record_number} is {} bytes, header declares {expected}",
                record.len()
            ),
        )
        .with_offset(4));
    }

    let geometry = match ShapeType::from_code(type_code) {
        ShapeType::Null => Geometry::Null,
        ShapeType::Point => Geometry::Point(point::parse_point(record)?),
        ShapeType::MultiPoint => Geometry::MultiPoint(multipoint::parse_multipoint(record)?),
        ShapeType::PolyLine => Geometry::PolyLine(polyline::parse_polyline(record)?),
        ShapeType::PolyLineM => Geometry::PolyLineM(polyline_m::parse_polyline_m(record)?),
        ShapeType::Polygon => Geometry::Polygon(polyline::parse_polygon(record)?),
        _ => return Err(ShpError::unsupported_shape_type(type_code)),
    };

    Ok(Shape {
        record_number,
        geometry,
        attributes,
    })
}
