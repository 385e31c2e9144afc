use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::core::result::Result;
use crate::io::ByteSource;
use crate::shp::header::HEADER_LENGTH;

pub const MAIN_EXTENSION: &str = "shp";
pub const INDEX_EXTENSION: &str = "shx";
pub const DBASE_EXTENSION: &str = "dbf";
pub const CODEPAGE_EXTENSION: &str = "cpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapefilePaths {
    pub main: PathBuf,
    pub index: PathBuf,
    pub dbase: PathBuf,
    pub codepage: PathBuf,
}

impl ShapefilePaths {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            main: path.with_extension(MAIN_EXTENSION),
            index: path.with_extension(INDEX_EXTENSION),
            dbase: path.with_extension(DBASE_EXTENSION),
            codepage: path.with_extension(CODEPAGE_EXTENSION),
        }
    }
}

pub fn open_source(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path.as_ref())?;
    Ok(BufReader::new(file))
}

pub fn read_header_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let mut source = open_source(path)?;
    source.read_range(0, HEADER_LENGTH)
}

pub fn read_codepage_label(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read(path)?;
    let label = String::from_utf8_lossy(&raw).trim().to_string();
    Ok((!label.is_empty()).then_some(label))
}
