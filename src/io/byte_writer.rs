use crate::io::ByteOrder;

#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    data: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn write_i32(&mut self, order: ByteOrder, value: i32) -> &mut Self {
        match order {
            ByteOrder::Big => self.data.extend_from_slice(&value.to_be_bytes()),
            ByteOrder::Little => self.data.extend_from_slice(&value.to_le_bytes()),
        }
        self
    }

    pub fn write_f64(&mut self, order: ByteOrder, value: f64) -> &mut Self {
        match order {
            ByteOrder::Big => self.data.extend_from_slice(&value.to_be_bytes()),
            ByteOrder::Little => self.data.extend_from_slice(&value.to_le_bytes()),
        }
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.data.push(value);
        self
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_u32_le(&mut self, value: u32) -> &mut Self {
        self.data.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn pad_to(&mut self, len: usize, fill: u8) -> &mut Self {
        if self.data.len() < len {
            self.data.resize(len, fill);
        }
        self
    }

    pub fn patch_i32(&mut self, offset: usize, order: ByteOrder, value: i32) -> &mut Self {
        let bytes = match order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        };
        self.data[offset..offset + 4].copy_from_slice(&bytes);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::ByteWriter;
    use crate::io::{ByteOrder, ByteReader};

    #[test]
    fn writes_values_readable_by_byte_reader() {
        let mut writer = ByteWriter::new();
        writer
            .write_i32(ByteOrder::Big, 9994)
            .write_i32(ByteOrder::Little, -5)
            .write_f64(ByteOrder::Little, 1.25)
            .write_u16_le(513);
        writer.patch_i32(4, ByteOrder::Little, 12);
        let bytes = writer.into_bytes();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_i32(ByteOrder::Big).unwrap(), 9994);
        assert_eq!(reader.read_i32(ByteOrder::Little).unwrap(), 12);
        assert_eq!(reader.read_f64(ByteOrder::Little).unwrap(), 1.25);
        assert_eq!(reader.read_u16_le().unwrap(), 513);
    }
}
