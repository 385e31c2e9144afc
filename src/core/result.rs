use crate::core::error::ShpError;

pub type Result<T> = std::result::Result<T, ShpError>;
