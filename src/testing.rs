use std::path::{Path, PathBuf};

use crate::io::{ByteOrder, ByteWriter};
use crate::shapes::{Point, Rectangle};
use crate::shp::header::{Header, ShapeType, HEADER_LENGTH};

#[derive(Debug, Clone, Copy)]
pub enum ShapeCode {
    Null,
    Point,
    PolyLine,
    Polygon,
    MultiPoint,
    PolyLineM,
}

impl ShapeCode {
    pub fn code(self) -> i32 {
        match self {
            ShapeCode::Null => 0,
            ShapeCode::Point => 1,
            ShapeCode::PolyLine => 3,
            ShapeCode::Polygon => 5,
            ShapeCode::MultiPoint => 8,
            ShapeCode::PolyLineM => 23,
        }
    }
}

pub fn encode_header(header: &Header) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_i32(ByteOrder::Big, header.file_code);
    for _ in 0..5 {
        writer.write_i32(ByteOrder::Big, 0);
    }
    writer
        .write_i32(ByteOrder::Big, header.file_length)
        .write_i32(ByteOrder::Little, header.version)
        .write_i32(ByteOrder::Little, header.shape_type.code());
    for value in [
        header.x_min,
        header.y_min,
        header.x_max,
        header.y_max,
        header.z_min,
        header.z_max,
        header.m_min,
        header.m_max,
    ] {
        writer.write_f64(ByteOrder::Little, value);
    }
    writer.into_bytes()
}

pub fn file_header(shape_type: ShapeType, file_length_words: i32, bbox: Rectangle) -> Header {
    Header {
        file_code: 9994,
        file_length: file_length_words,
        version: 1000,
        shape_type,
        x_min: bbox.left,
        y_min: bbox.top,
        x_max: bbox.right,
        y_max: bbox.bottom,
        z_min: 0.0,
        z_max: 0.0,
        m_min: 0.0,
        m_max: 0.0,
    }
}

pub fn shape_record(record_number: i32, body: &[u8]) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer
        .write_i32(ByteOrder::Big, record_number)
        .write_i32(ByteOrder::Big, (body.len() / 2) as i32)
        .write_bytes(body);
    writer.into_bytes()
}

pub fn encode_null() -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_i32(ByteOrder::Little, ShapeCode::Null.code());
    writer.into_bytes()
}

pub fn encode_point(x: f64, y: f64) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer
        .write_i32(ByteOrder::Little, ShapeCode::Point.code())
        .write_f64(ByteOrder::Little, x)
        .write_f64(ByteOrder::Little, y);
    writer.into_bytes()
}

pub fn encode_multipoint(points: &[Point]) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_i32(ByteOrder::Little, ShapeCode::MultiPoint.code());
    write_bbox(&mut writer, bounds(points));
    writer.write_i32(ByteOrder::Little, points.len() as i32);
    write_points(&mut writer, points);
    writer.into_bytes()
}

pub fn encode_multipart(
    code: ShapeCode,
    part_starts: &[i32],
    points: &[Point],
    measures: Option<((f64, f64), &[f64])>,
) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_i32(ByteOrder::Little, code.code());
    write_bbox(&mut writer, bounds(points));
    writer
        .write_i32(ByteOrder::Little, part_starts.len() as i32)
        .write_i32(ByteOrder::Little, points.len() as i32);
    for start in part_starts {
        writer.write_i32(ByteOrder::Little, *start);
    }
    write_points(&mut writer, points);
    if let Some(((m_min, m_max), values)) = measures {
        writer
            .write_f64(ByteOrder::Little, m_min)
            .write_f64(ByteOrder::Little, m_max);
        for value in values {
            writer.write_f64(ByteOrder::Little, *value);
        }
    }
    writer.into_bytes()
}

pub fn bounds(points: &[Point]) -> Rectangle {
    if points.is_empty() {
        return Rectangle::new(0.0, 0.0, 0.0, 0.0);
    }
    let mut bbox = Rectangle::new(points[0].x, points[0].y, points[0].x, points[0].y);
    for point in points {
        bbox.left = bbox.left.min(point.x);
        bbox.top = bbox.top.min(point.y);
        bbox.right = bbox.right.max(point.x);
        bbox.bottom = bbox.bottom.max(point.y);
    }
    bbox
}

fn write_bbox(writer: &mut ByteWriter, bbox: Rectangle) {
    writer
        .write_f64(ByteOrder::Little, bbox.left)
        .write_f64(ByteOrder::Little, bbox.top)
        .write_f64(ByteOrder::Little, bbox.right)
        .write_f64(ByteOrder::Little, bbox.bottom);
}

fn write_points(writer: &mut ByteWriter, points: &[Point]) {
    for point in points {
        writer
            .write_f64(ByteOrder::Little, point.x)
            .write_f64(ByteOrder::Little, point.y);
    }
}

pub fn encode_shapefile(shape_type: ShapeType, bodies: &[Vec<u8>]) -> (Vec<u8>, Vec<u8>) {
    let mut records = ByteWriter::new();
    let mut entries = ByteWriter::new();
    let mut offset_words = (HEADER_LENGTH / 2) as i32;
    for (idx, body) in bodies.iter().enumerate() {
        let record = shape_record(idx as i32 + 1, body);
        entries
            .write_i32(ByteOrder::Big, offset_words)
            .write_i32(ByteOrder::Big, (body.len() / 2) as i32);
        offset_words += (record.len() / 2) as i32;
        records.write_bytes(&record);
    }

    let bbox = Rectangle::new(-180.0, -90.0, 180.0, 90.0);
    let main_words = offset_words;
    let index_words = (HEADER_LENGTH / 2 + entries.len() / 2) as i32;

    let mut main = encode_header(&file_header(shape_type, main_words, bbox));
    main.extend_from_slice(&records.into_bytes());
    let mut index = encode_header(&file_header(shape_type, index_words, bbox));
    index.extend_from_slice(&entries.into_bytes());
    (main, index)
}

pub fn write_shapefile(
    dir: &Path,
    stem: &str,
    shape_type: ShapeType,
    bodies: &[Vec<u8>],
) -> PathBuf {
    let (main, index) = encode_shapefile(shape_type, bodies);
    let main_path = dir.join(format!("{stem}.shp"));
    std::fs::write(&main_path, main).expect("write .shp");
    std::fs::write(dir.join(format!("{stem}.shx")), index).expect("write .shx");
    main_path
}

#[derive(Debug, Clone)]
pub struct DbfColumn {
    pub name: &'static str,
    pub field_type: u8,
    pub length: u8,
}

impl DbfColumn {
    pub fn character(name: &'static str, length: u8) -> Self {
        Self {
            name,
            field_type: b'C',
            length,
        }
    }

    pub fn numeric(name: &'static str, length: u8) -> Self {
        Self {
            name,
            field_type: b'N',
            length,
        }
    }
}

pub fn encode_dbf(columns: &[DbfColumn], rows: &[&[&str]], language_driver: u8) -> Vec<u8> {
    let header_length = 32 + 32 * columns.len() + 1;
    let record_length = 1 + columns.iter().map(|c| c.length as usize).sum::<usize>();

    let mut writer = ByteWriter::new();
    writer
        .write_u8(0x03)
        .write_bytes(&[124, 1, 1])
        .write_u32_le(rows.len() as u32)
        .write_u16_le(header_length as u16)
        .write_u16_le(record_length as u16)
        .pad_to(29, 0)
        .write_u8(language_driver)
        .pad_to(32, 0);

    for column in columns {
        let start = writer.len();
        let mut name = [0u8; 11];
        name[..column.name.len()].copy_from_slice(column.name.as_bytes());
        writer
            .write_bytes(&name)
            .write_u8(column.field_type)
            .pad_to(start + 16, 0)
            .write_u8(column.length)
            .write_u8(0)
            .pad_to(start + 32, 0);
    }
    writer.write_u8(0x0D);

    for row in rows {
        writer.write_u8(b' ');
        for (column, value) in columns.iter().zip(row.iter()) {
            let width = column.length as usize;
            let text = if column.field_type == b'N' {
                format!("{value:>width$}")
            } else {
                format!("{value:<width$}")
            };
            writer.write_bytes(&text.as_bytes()[..width]);
        }
    }
    writer.write_u8(0x1A);
    writer.into_bytes()
}
