use encoding_rs::Encoding;

use crate::attributes::{AttributeSource, Attributes};
use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;
use crate::io::{ByteReader, ByteSource};

const TABLE_HEADER_LENGTH: usize = 32;
const FIELD_DESCRIPTOR_LENGTH: usize = 32;
const FIELD_NAME_LENGTH: usize = 11;
const DESCRIPTOR_TERMINATOR: u8 = 0x0D;
const LANGUAGE_DRIVER_OFFSET: usize = 29;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfField {
    pub name: String,
    pub field_type: char,
    pub length: u8,
    pub decimal_count: u8,
    offset: usize,
}

// Rows flagged as deleted are still returned so row `i` always pairs with
// shape record `i`.
#[derive(Debug)]
pub struct DbfTable<S> {
    source: S,
    fields: Vec<DbfField>,
    record_count: usize,
    header_length: u64,
    record_length: usize,
    encoding: &'static Encoding,
}

impl<S: ByteSource> DbfTable<S> {
    pub fn new(mut source: S, encoding: Option<&'static Encoding>) -> Result<Self> {
        let header = source.read_range(0, TABLE_HEADER_LENGTH)?;
        let mut reader = ByteReader::at(&header, 4);
        let record_count = reader.read_u32_le()? as usize;
        let header_length = reader.read_u16_le()? as usize;
        let record_length = reader.read_u16_le()? as usize;
        let language_driver = header[LANGUAGE_DRIVER_OFFSET];

        if header_length < TABLE_HEADER_LENGTH + 1 {
            return Err(attribute_error(format!(
                "table header length {header_length} is too small"
            )));
        }
        let descriptors = source.read_range(
            TABLE_HEADER_LENGTH as u64,
            header_length - TABLE_HEADER_LENGTH,
        )?;
        let fields = parse_field_descriptors(&descriptors, record_length)?;

        let encoding = encoding
            .or_else(|| encoding_for_language_driver(language_driver))
            .unwrap_or(encoding_rs::UTF_8);

        Ok(Self {
            source,
            fields,
            record_count,
            header_length: header_length as u64,
            record_length,
            encoding,
        })
    }

    pub fn fields(&self) -> &[DbfField] {
        &self.fields
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    fn decode_field(&self, raw: &[u8]) -> String {
        let (text, _had_errors) = self.encoding.decode_without_bom_handling(raw);
        text.trim_matches(|c| c == ' ' || c == '\0').to_string()
    }
}

impl<S: ByteSource> AttributeSource for DbfTable<S> {
    fn record_count(&self) -> usize {
        self.record_count
    }

    fn read_record(&mut self, index: usize) -> Result<Option<Attributes>> {
        if index >= self.record_count {
            return Ok(None);
        }
        let offset = self.header_length + (index as u64) * (self.record_length as u64);
        let row = self.source.read_range(offset, self.record_length)?;

        let mut attributes = Attributes::new();
        for field in &self.fields {
            let raw = &row[field.offset..field.offset + field.length as usize];
            attributes.insert(&field.name, self.decode_field(raw));
        }
        Ok(Some(attributes))
    }
}

fn parse_field_descriptors(bytes: &[u8], record_length: usize) -> Result<Vec<DbfField>> {
    let mut fields = Vec::new();
    // byte 0 of every record is the deletion flag
    let mut offset = 1usize;
    let mut reader = ByteReader::new(bytes);

    loop {
        if reader.remaining() == 0 {
            break;
        }
        let start = reader.tell();
        let first = reader.read_u8()?;
        if first == DESCRIPTOR_TERMINATOR {
            break;
        }
        if reader.remaining() < FIELD_DESCRIPTOR_LENGTH - 1 {
            return Err(attribute_error("truncated field descriptor")
                .with_offset(TABLE_HEADER_LENGTH as u64 + start));
        }
        reader.seek(start as usize);
        let descriptor = reader.read_bytes(FIELD_DESCRIPTOR_LENGTH)?;

        let name_end = descriptor[..FIELD_NAME_LENGTH]
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(FIELD_NAME_LENGTH);
        let name = String::from_utf8_lossy(&descriptor[..name_end])
            .trim()
            .to_string();
        let length = descriptor[16];
        fields.push(DbfField {
            name,
            field_type: descriptor[11] as char,
            length,
            decimal_count: descriptor[17],
            offset,
        });
        offset += length as usize;
    }

    if offset > record_length {
        return Err(attribute_error(format!(
            "fields span {offset} bytes but records are {record_length} bytes long"
        )));
    }
    Ok(fields)
}

fn attribute_error(message: impl Into<String>) -> ShpError {
    ShpError::new(ErrorKind::Attribute, message)
}

pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
        return Some(encoding);
    }
    if let Some(part) = label.strip_prefix("8859") {
        return Encoding::for_label(format!("iso-8859-{part}").as_bytes());
    }
    if label.chars().all(|c| c.is_ascii_digit()) {
        return Encoding::for_label(format!("windows-{label}").as_bytes())
            .or_else(|| Encoding::for_label(format!("cp{label}").as_bytes()));
    }
    None
}

pub fn encoding_for_language_driver(id: u8) -> Option<&'static Encoding> {
    match id {
        0x03 | 0x57 | 0x58 | 0x59 => Some(encoding_rs::WINDOWS_1252),
        0x13 => Some(encoding_rs::SHIFT_JIS),
        0x4D | 0x7A => Some(encoding_rs::GBK),
        0x65 => Some(encoding_rs::IBM866),
        0x78 => Some(encoding_rs::BIG5),
        0x79 => Some(encoding_rs::EUC_KR),
        0x7D => Some(encoding_rs::WINDOWS_1255),
        0x7E => Some(encoding_rs::WINDOWS_1256),
        0xC8 => Some(encoding_rs::WINDOWS_1250),
        0xC9 => Some(encoding_rs::WINDOWS_1251),
        0xCA => Some(encoding_rs::WINDOWS_1254),
        0xCB => Some(encoding_rs::WINDOWS_1253),
        0xCC => Some(encoding_rs::WINDOWS_1257),
        _ => None,
    }
}
