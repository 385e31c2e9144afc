use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;
use crate::io::{ByteOrder, ByteReader};

pub const POINT_SIZE: usize = 16;
pub(crate) const BOUNDING_BOX_OFFSET: usize = 12;
const NUM_PARTS_OFFSET: usize = 44;
const NUM_POINTS_OFFSET: usize = 48;
const PART_INDICES_OFFSET: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Bounding box in file order: `left`/`top`/`right`/`bottom` hold
// Xmin/Ymin/Xmax/Ymax. The names are positional, `top` is not the larger Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rectangle {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

pub(crate) fn parse_bounding_box(bytes: &[u8], offset: usize) -> Result<Rectangle> {
    let mut reader = ByteReader::at(bytes, offset);
    Ok(Rectangle::new(
        reader.read_f64(ByteOrder::Little)?,
        reader.read_f64(ByteOrder::Little)?,
        reader.read_f64(ByteOrder::Little)?,
        reader.read_f64(ByteOrder::Little)?,
    ))
}

pub(crate) fn read_point(reader: &mut ByteReader<'_>) -> Result<Point> {
    let x = reader.read_f64(ByteOrder::Little)?;
    let y = reader.read_f64(ByteOrder::Little)?;
    Ok(Point::new(x, y))
}

pub(crate) fn read_count(bytes: &[u8], offset: usize, what: &str) -> Result<usize> {
    let mut reader = ByteReader::at(bytes, offset);
    let value = reader.read_i32(ByteOrder::Little)?;
    usize::try_from(value).map_err(|_| {
        invalid_shape_data(format!("negative {what} count {value}")).with_offset(offset as u64)
    })
}

pub(crate) fn invalid_shape_data(message: impl Into<String>) -> ShpError {
    ShpError::new(ErrorKind::InvalidShapeData, message)
}

pub(crate) fn ensure_exact_len(bytes: &[u8], expected: u64, layout: &str) -> Result<()> {
    if bytes.len() as u64 != expected {
        return Err(invalid_shape_data(format!(
            "{layout} record is {} bytes, counts imply {expected}",
            bytes.len()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PartsPrefix {
    pub bounding_box: Rectangle,
    pub num_parts: usize,
    pub num_points: usize,
}

impl PartsPrefix {
    pub fn parts_base(&self) -> u64 {
        PART_INDICES_OFFSET as u64 + 4 * self.num_parts as u64
    }

    pub fn points_len(&self) -> u64 {
        POINT_SIZE as u64 * self.num_points as u64
    }
}

pub(crate) fn parse_parts_prefix(bytes: &[u8]) -> Result<PartsPrefix> {
    if bytes.len() < NUM_PARTS_OFFSET {
        return Err(invalid_shape_data(format!(
            "multi-part record needs at least {NUM_PARTS_OFFSET} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(PartsPrefix {
        bounding_box: parse_bounding_box(bytes, BOUNDING_BOX_OFFSET)?,
        num_parts: read_count(bytes, NUM_PARTS_OFFSET, "part")?,
        num_points: read_count(bytes, NUM_POINTS_OFFSET, "point")?,
    })
}

// Each index points into the flat point array. A part runs to the next
// part's start, the last one to the end of the record minus
// `trailing_bytes` (the M block of a PolyLineM).
pub(crate) fn parse_parts(
    bytes: &[u8],
    prefix: &PartsPrefix,
    trailing_bytes: usize,
) -> Result<Vec<Vec<Point>>> {
    let parts_base = prefix.parts_base() as usize;
    let mut indices = ByteReader::at(bytes, PART_INDICES_OFFSET);
    let mut starts = Vec::with_capacity(prefix.num_parts);
    for part in 0..prefix.num_parts {
        let index = indices.read_i32(ByteOrder::Little)?;
        let start = usize::try_from(index)
            .ok()
            .filter(|start| *start <= prefix.num_points)
            .ok_or_else(|| {
                invalid_shape_data(format!(
                    "part {part} starts at point {index}, record has {} points",
                    prefix.num_points
                ))
                .with_offset((PART_INDICES_OFFSET + 4 * part) as u64)
            })?;
        starts.push(start * POINT_SIZE + parts_base);
    }

    let points_end = bytes.len().checked_sub(trailing_bytes).ok_or_else(|| {
        invalid_shape_data("trailing block is larger than the record")
    })?;

    let mut parts = Vec::with_capacity(prefix.num_parts);
    for (part, start) in starts.iter().copied().enumerate() {
        let end = starts.get(part + 1).copied().unwrap_or(points_end);
        let num_bytes = end.checked_sub(start).ok_or_else(|| {
            invalid_shape_data(format!("part {part} starts after part {}", part + 1))
                .with_offset(start as u64)
        })?;

        let mut reader = ByteReader::at(bytes, start);
        let mut points = Vec::with_capacity(num_bytes / POINT_SIZE);
        for _ in 0..num_bytes / POINT_SIZE {
            points.push(read_point(&mut reader)?);
        }
        parts.push(points);
    }
    Ok(parts)
}
