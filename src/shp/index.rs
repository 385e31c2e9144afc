use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;
use crate::io::{ByteOrder, ByteReader};
use crate::shp::header::HEADER_LENGTH;

pub const INDEX_RECORD_LENGTH: usize = 8;
pub const RECORD_HEADER_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRecord {
    // Offset of the record header in the main file, in 16-bit words.
    pub offset_words: i32,
    // Record content length in 16-bit words, excluding the record header.
    pub content_length_words: i32,
}

impl IndexRecord {
    pub fn byte_offset(&self) -> Result<u64> {
        u64::try_from(self.offset_words)
            .map(|words| words * 2)
            .map_err(|_| {
                ShpError::new(
                    ErrorKind::InvalidShapeData,
                    format!("negative record offset {} in index", self.offset_words),
                )
            })
    }

    pub fn record_len(&self) -> Result<u64> {
        u64::try_from(self.content_length_words)
            .map(|words| words * 2 + RECORD_HEADER_LENGTH as u64)
            .map_err(|_| {
                ShpError::new(
                    ErrorKind::InvalidShapeData,
                    format!(
                        "negative content length {} in index",
                        self.content_length_words
                    ),
                )
            })
    }
}

pub fn index_entry_offset(index: usize) -> u64 {
    (HEADER_LENGTH + index * INDEX_RECORD_LENGTH) as u64
}

pub fn parse_index_record(bytes: &[u8]) -> Result<IndexRecord> {
    if bytes.len() != INDEX_RECORD_LENGTH {
        return Err(ShpError::new(
            ErrorKind::InvalidLength,
            format!(
                "index record must be {INDEX_RECORD_LENGTH} bytes long, got {}",
                bytes.len()
            ),
        ));
    }
    let mut reader = ByteReader::new(bytes);
    Ok(IndexRecord {
        offset_words: reader.read_i32(ByteOrder::Big)?,
        content_length_words: reader.read_i32(ByteOrder::Big)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{index_entry_offset, parse_index_record, IndexRecord};
    use crate::core::error::ErrorKind;

    #[test]
    fn parses_big_endian_word_fields() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&50i32.to_be_bytes());
        bytes.extend_from_slice(&10i32.to_be_bytes());
        let record = parse_index_record(&bytes).expect("index record");
        assert_eq!(
            record,
            IndexRecord {
                offset_words: 50,
                content_length_words: 10,
            }
        );
        assert_eq!(record.byte_offset().unwrap(), 100);
        assert_eq!(record.record_len().unwrap(), 28);
    }

    #[test]
    fn rejects_negative_fields_and_bad_lengths() {
        let record = IndexRecord {
            offset_words: -1,
            content_length_words: -4,
        };
        assert_eq!(
            record.byte_offset().expect_err("offset").kind,
            ErrorKind::InvalidShapeData
        );
        assert_eq!(
            record.record_len().expect_err("length").kind,
            ErrorKind::InvalidShapeData
        );
        let err = parse_index_record(&[0u8; 7]).expect_err("short");
        assert_eq!(err.kind, ErrorKind::InvalidLength);
    }

    #[test]
    fn entries_follow_the_file_header() {
        assert_eq!(index_entry_offset(0), 100);
        assert_eq!(index_entry_offset(3), 124);
    }
}
