use crate::core::result::Result;
use crate::io::ByteReader;
use crate::shapes::common::{
    ensure_exact_len, invalid_shape_data, parse_bounding_box, read_count, read_point, Point,
    Rectangle, BOUNDING_BOX_OFFSET, POINT_SIZE,
};

const NUM_POINTS_OFFSET: usize = 44;
const POINTS_OFFSET: usize = 48;

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub bounding_box: Rectangle,
    pub points: Vec<Point>,
}

pub fn parse_multipoint(bytes: &[u8]) -> Result<MultiPoint> {
    if bytes.len() < POINTS_OFFSET {
        return Err(invalid_shape_data(format!(
            "multipoint record needs at least {POINTS_OFFSET} bytes, got {}",
            bytes.len()
        )));
    }

    let bounding_box = parse_bounding_box(bytes, BOUNDING_BOX_OFFSET)?;
    let num_points = read_count(bytes, NUM_POINTS_OFFSET, "point")?;
    ensure_exact_len(
        bytes,
        POINTS_OFFSET as u64 + POINT_SIZE as u64 * num_points as u64,
        "multipoint",
    )?;

    let mut reader = ByteReader::at(bytes, POINTS_OFFSET);
    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        points.push(read_point(&mut reader)?);
    }
    Ok(MultiPoint {
        bounding_box,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_multipoint;
    use crate::core::error::ErrorKind;
    use crate::shapes::{Point, Rectangle};
    use crate::testing::{encode_multipoint, shape_record};

    #[test]
    fn decodes_points_in_file_order() {
        let points = vec![Point::new(3.0, 1.0), Point::new(-1.0, 4.0), Point::new(2.0, 2.0)];
        let record = shape_record(2, &encode_multipoint(&points));
        assert_eq!(record.len(), 48 + 16 * 3);

        let multipoint = parse_multipoint(&record).expect("multipoint");
        assert_eq!(multipoint.points, points);
        assert_eq!(
            multipoint.bounding_box,
            Rectangle::new(-1.0, 1.0, 3.0, 4.0)
        );
    }

    #[test]
    fn accepts_empty_multipoint() {
        let record = shape_record(2, &encode_multipoint(&[]));
        let multipoint = parse_multipoint(&record).expect("empty multipoint");
        assert!(multipoint.points.is_empty());
    }

    #[test]
    fn rejects_count_that_disagrees_with_length() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let mut record = shape_record(2, &encode_multipoint(&points));
        record[44..48].copy_from_slice(&3i32.to_le_bytes());
        let err = parse_multipoint(&record).expect_err("count mismatch");
        assert_eq!(err.kind, ErrorKind::InvalidShapeData);

        let err = parse_multipoint(&record[..47]).expect_err("short");
        assert_eq!(err.kind, ErrorKind::InvalidShapeData);
    }
}
