use crate::core::result::Result;
use crate::io::{ByteOrder, ByteReader};
use crate::shapes::common::{ensure_exact_len, parse_parts, parse_parts_prefix, Point, Rectangle};

const MEASURE_SIZE: u64 = 8;
const MEASURE_RANGE_SIZE: u64 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct PolyLineM {
    pub bounding_box: Rectangle,
    pub parts: Vec<Vec<Point>>,
    pub m_min: f64,
    pub m_max: f64,
    // One value per point, in flat point order across all parts.
    pub measures: Vec<f64>,
}

pub fn parse_polyline_m(bytes: &[u8]) -> Result<PolyLineM> {
    let prefix = parse_parts_prefix(bytes)?;
    let points_end = prefix.parts_base() + prefix.points_len();
    let measure_block = MEASURE_RANGE_SIZE + MEASURE_SIZE * prefix.num_points as u64;
    ensure_exact_len(bytes, points_end + measure_block, "polyline-m")?;

    let parts = parse_parts(bytes, &prefix, measure_block as usize)?;

    let mut reader = ByteReader::at(bytes, points_end as usize);
    let m_min = reader.read_f64(ByteOrder::Little)?;
    let m_max = reader.read_f64(ByteOrder::Little)?;
    let mut measures = Vec::with_capacity(prefix.num_points);
    for _ in 0..prefix.num_points {
        measures.push(reader.read_f64(ByteOrder::Little)?);
    }

    Ok(PolyLineM {
        bounding_box: prefix.bounding_box,
        parts,
        m_min,
        m_max,
        measures,
    })
}
