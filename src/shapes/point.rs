use crate::core::result::Result;
use crate::io::ByteReader;
use crate::shapes::common::{invalid_shape_data, read_point, Point};

const POINT_RECORD_LENGTH: usize = 28;
const X_OFFSET: usize = 12;

pub fn parse_point(bytes: &[u8]) -> Result<Point> {
    if bytes.len() != POINT_RECORD_LENGTH {
        return Err(invalid_shape_data(format!(
            "point record must be {POINT_RECORD_LENGTH} bytes long, got {}",
            bytes.len()
        )));
    }
    read_point(&mut ByteReader::at(bytes, X_OFFSET))
}
