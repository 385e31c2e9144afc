use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    InvalidLength,
    BadFileCode,
    BadVersion,
    TooShort,
    StructuralMismatch,
    InvalidShapeData,
    UnsupportedShapeType(i32),
    BufferTooSmall,
    Attribute,
    LimitExceeded,
    OutOfRange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::InvalidLength => "invalid length",
            ErrorKind::BadFileCode => "bad file code",
            ErrorKind::BadVersion => "bad version",
            ErrorKind::TooShort => "record too short",
            ErrorKind::StructuralMismatch => "structural mismatch",
            ErrorKind::InvalidShapeData => "invalid shape data",
            ErrorKind::UnsupportedShapeType(_) => "unsupported shape type",
            ErrorKind::BufferTooSmall => "buffer too small",
            ErrorKind::Attribute => "attribute table",
            ErrorKind::LimitExceeded => "limit exceeded",
            ErrorKind::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}{}", OffsetSuffix(.offset))]
pub struct ShpError {
    pub kind: ErrorKind,
    pub message: String,
    pub offset: Option<u64>,
}

impl ShpError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            offset: None,
        }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn unsupported_shape_type(code: i32) -> Self {
        Self::new(
            ErrorKind::UnsupportedShapeType(code),
            format!("shape type {code} is not implemented"),
        )
    }
}

impl From<std::io::Error> for ShpError {
    fn from(err: std::io::Error) -> Self {
        ShpError::new(ErrorKind::Io, err.to_string())
    }
}

struct OffsetSuffix<'a>(&'a Option<u64>);

impl fmt::Display for OffsetSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(offset) => write!(f, " (at byte {offset})"),
            None => Ok(()),
        }
    }
}
