use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;
}

pub fn read_i32(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<i32> {
    let window: [u8; 4] = take(bytes, offset)?;
    Ok(match order {
        ByteOrder::Big => i32::from_be_bytes(window),
        ByteOrder::Little => i32::from_le_bytes(window),
    })
}

pub fn read_f64(bytes: &[u8], offset: usize, order: ByteOrder) -> Result<f64> {
    let window: [u8; 8] = take(bytes, offset)?;
    Ok(match order {
        ByteOrder::Big => f64::from_be_bytes(window),
        ByteOrder::Little => f64::from_le_bytes(window),
    })
}

fn take<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| bytes.get(offset..end))
        .and_then(|window| window.try_into().ok())
        .ok_or_else(|| {
            ShpError::new(
                ErrorKind::BufferTooSmall,
                format!(
                    "cannot read {N} bytes at offset {offset} from a {} byte buffer",
                    bytes.len()
                ),
            )
            .with_offset(offset as u64)
        })
}
