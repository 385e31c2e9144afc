use encoding_rs::Encoding;

#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub strict: bool,
    pub max_record_bytes: u64,
    pub max_shapes: u32,
    pub attribute_encoding: Option<&'static Encoding>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strict: true,
            max_record_bytes: 64 * 1024 * 1024,
            max_shapes: 50_000_000,
            attribute_encoding: None,
        }
    }
}
