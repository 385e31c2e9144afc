use std::io::{Read, Seek, SeekFrom};

use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;

pub trait ByteSource {
    fn byte_len(&mut self) -> Result<u64>;

    fn read_range(&mut self, offset: u64, len: usize) -> Result<Vec<u8>>;
}

impl<R: Read + Seek> ByteSource for R {
    fn byte_len(&mut self) -> Result<u64> {
        let current = self.stream_position()?;
        let end = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(current))?;
        Ok(end)
    }

    fn read_range(&mut self, offset: u64, len: usize) -> Result<Vec<u8>> {
        self.seek(SeekFrom::Start(offset))?;
        let mut data = vec![0u8; len];
        self.read_exact(&mut data).map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                ShpError::new(
                    ErrorKind::BufferTooSmall,
                    format!("source ends before {len} bytes could be read"),
                )
                .with_offset(offset)
            } else {
                err.into()
            }
        })?;
        Ok(data)
    }
}
