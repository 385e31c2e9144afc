pub mod byte_reader;
pub mod byte_source;
#[cfg(test)]
pub mod byte_writer;
pub mod endian;

pub use byte_reader::ByteReader;
pub use byte_source::ByteSource;
#[cfg(test)]
pub use byte_writer::ByteWriter;
pub use endian::{read_f64, read_i32, ByteOrder};
