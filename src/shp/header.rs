use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;
use crate::io::{ByteOrder, ByteReader};
use crate::shapes::Rectangle;

pub const HEADER_LENGTH: usize = 100;
pub const FILE_CODE: i32 = 9994;
pub const VERSION: i32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Null,
    Point,
    PolyLine,
    Polygon,
    MultiPoint,
    PointZ,
    PolyLineZ,
    PolygonZ,
    MultiPointZ,
    PointM,
    PolyLineM,
    PolygonM,
    MultiPointM,
    MultiPatch,
    Unknown(i32),
}

impl ShapeType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ShapeType::Null,
            1 => ShapeType::Point,
            3 => ShapeType::PolyLine,
            5 => ShapeType::Polygon,
            8 => ShapeType::MultiPoint,
            11 => ShapeType::PointZ,
            13 => ShapeType::PolyLineZ,
            15 => ShapeType::PolygonZ,
            18 => ShapeType::MultiPointZ,
            21 => ShapeType::PointM,
            23 => ShapeType::PolyLineM,
            25 => ShapeType::PolygonM,
            28 => ShapeType::MultiPointM,
            31 => ShapeType::MultiPatch,
            other => ShapeType::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ShapeType::Null => 0,
            ShapeType::Point => 1,
            ShapeType::PolyLine => 3,
            ShapeType::Polygon => 5,
            ShapeType::MultiPoint => 8,
            ShapeType::PointZ => 11,
            ShapeType::PolyLineZ => 13,
            ShapeType::PolygonZ => 15,
            ShapeType::MultiPointZ => 18,
            ShapeType::PointM => 21,
            ShapeType::PolyLineM => 23,
            ShapeType::PolygonM => 25,
            ShapeType::MultiPointM => 28,
            ShapeType::MultiPatch => 31,
            ShapeType::Unknown(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Null => "Null",
            ShapeType::Point => "Point",
            ShapeType::PolyLine => "PolyLine",
            ShapeType::Polygon => "Polygon",
            ShapeType::MultiPoint => "MultiPoint",
            ShapeType::PointZ => "PointZ",
            ShapeType::PolyLineZ => "PolyLineZ",
            ShapeType::PolygonZ => "PolygonZ",
            ShapeType::MultiPointZ => "MultiPointZ",
            ShapeType::PointM => "PointM",
            ShapeType::PolyLineM => "PolyLineM",
            ShapeType::PolygonM => "PolygonM",
            ShapeType::MultiPointM => "MultiPointM",
            ShapeType::MultiPatch => "MultiPatch",
            ShapeType::Unknown(_) => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub file_code: i32,
    // Total file length in 16-bit words, header included.
    pub file_length: i32,
    pub version: i32,
    pub shape_type: ShapeType,
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub m_min: f64,
    pub m_max: f64,
}

impl Header {
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    pub fn file_length_bytes(&self) -> i64 {
        i64::from(self.file_length) * 2
    }

    pub fn index_record_count(&self) -> usize {
        let words = i64::from(self.file_length) - (HEADER_LENGTH as i64 / 2);
        usize::try_from(words / 4).unwrap_or(0)
    }
}

pub fn parse_header(bytes: &[u8]) -> Result<Header> {
    if bytes.len() != HEADER_LENGTH {
        return Err(ShpError::new(
            ErrorKind::InvalidLength,
            format!(
                "header must be {HEADER_LENGTH} bytes long, got {}",
                bytes.len()
            ),
        ));
    }

    let mut reader = ByteReader::new(bytes);
    let file_code = reader.read_i32(ByteOrder::Big)?;
    if file_code != FILE_CODE {
        return Err(ShpError::new(
            ErrorKind::BadFileCode,
            format!("header file code is {file_code}, expected {FILE_CODE}"),
        )
        .with_offset(0));
    }

    // five unused big-endian words
    reader.seek(24);
    let file_length = reader.read_i32(ByteOrder::Big)?;
    let version = reader.read_i32(ByteOrder::Little)?;
    if version != VERSION {
        return Err(ShpError::new(
            ErrorKind::BadVersion,
            format!("header version is {version}, expected {VERSION}"),
        )
        .with_offset(28));
    }

    let shape_type = ShapeType::from_code(reader.read_i32(ByteOrder::Little)?);
    Ok(Header {
        file_code,
        file_length,
        version,
        shape_type,
        x_min: reader.read_f64(ByteOrder::Little)?,
        y_min: reader.read_f64(ByteOrder::Little)?,
        x_max: reader.read_f64(ByteOrder::Little)?,
        y_max: reader.read_f64(ByteOrder::Little)?,
        z_min: reader.read_f64(ByteOrder::Little)?,
        z_max: reader.read_f64(ByteOrder::Little)?,
        m_min: reader.read_f64(ByteOrder::Little)?,
        m_max: reader.read_f64(ByteOrder::Little)?,
    })
}
