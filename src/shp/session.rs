use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::attributes::dbf::encoding_for_label;
use crate::attributes::{AttributeSource, Attributes, DbfTable};
use crate::core::config::ParseConfig;
use crate::core::error::{ErrorKind, ShpError};
use crate::core::result::Result;
use crate::io::ByteSource;
use crate::shapes::{parse_shape, Rectangle, Shape};
use crate::shp::file_open::{open_source, read_codepage_label, ShapefilePaths};
use crate::shp::header::{parse_header, Header, ShapeType, HEADER_LENGTH};
use crate::shp::index::{index_entry_offset, parse_index_record, IndexRecord, INDEX_RECORD_LENGTH};

pub type FileSource = BufReader<File>;

const MAX_PREALLOCATED_SHAPES: usize = 4096;

// Reading moves the stream positions of the underlying sources, so every
// read takes `&mut self` and a session has one active reader at a time.
#[derive(Debug)]
pub struct Shapefile<S = FileSource, A = DbfTable<FileSource>> {
    main: S,
    index: S,
    attributes: Option<A>,
    main_header: Header,
    index_header: Header,
    count: usize,
    config: ParseConfig,
}

impl Shapefile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, ParseConfig::default())
    }

    pub fn open_with_config(path: impl AsRef<Path>, config: ParseConfig) -> Result<Self> {
        let paths = ShapefilePaths::from_path(path);
        let main = open_named(&paths.main)?;
        let index = open_named(&paths.index)?;

        let attributes = open_attribute_table(&paths, &config)?;
        Self::from_sources(main, index, attributes, config)
    }
}

pub fn open_attribute_table(
    paths: &ShapefilePaths,
    config: &ParseConfig,
) -> Result<Option<DbfTable<FileSource>>> {
    if !paths.dbase.exists() {
        debug!(path = %paths.dbase.display(), "no attribute table");
        return Ok(None);
    }
    let encoding = match config.attribute_encoding {
        Some(encoding) => Some(encoding),
        None => read_codepage_label(&paths.codepage)?
            .as_deref()
            .and_then(encoding_for_label),
    };
    Ok(Some(DbfTable::new(open_named(&paths.dbase)?, encoding)?))
}

impl<S: ByteSource, A: AttributeSource> Shapefile<S, A> {
    pub fn from_sources(
        mut main: S,
        mut index: S,
        attributes: Option<A>,
        config: ParseConfig,
    ) -> Result<Self> {
        let main_header = read_file_header(&mut main, "main")?;
        let index_header = read_file_header(&mut index, "index")?;

        let count = index_header.index_record_count();
        if count > config.max_shapes as usize {
            return Err(ShpError::new(
                ErrorKind::LimitExceeded,
                format!("index lists {count} shapes, limit is {}", config.max_shapes),
            ));
        }
        let index_len = index.byte_len()?;
        let listed = index_len.saturating_sub(HEADER_LENGTH as u64) / INDEX_RECORD_LENGTH as u64;
        if listed < count as u64 {
            return Err(ShpError::new(
                ErrorKind::StructuralMismatch,
                format!("index header declares {count} records but the file holds {listed}"),
            ));
        }
        if let Some(table) = &attributes {
            if table.record_count() < count {
                debug!(
                    rows = table.record_count(),
                    shapes = count,
                    "attribute table is shorter than the index"
                );
            }
        }

        debug!(
            shape_type = main_header.shape_type.as_str(),
            count,
            has_attributes = attributes.is_some(),
            "opened shapefile"
        );

        Ok(Self {
            main,
            index,
            attributes,
            main_header,
            index_header,
            count,
            config,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn shape_type(&self) -> ShapeType {
        self.main_header.shape_type
    }

    pub fn bounding_box(&self) -> Rectangle {
        self.main_header.bounding_box()
    }

    pub fn main_header(&self) -> &Header {
        &self.main_header
    }

    pub fn index_header(&self) -> &Header {
        &self.index_header
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn has_attributes(&self) -> bool {
        self.attributes.is_some()
    }

    pub fn index_record(&mut self, index: usize) -> Result<IndexRecord> {
        if index >= self.count {
            return Err(ShpError::new(
                ErrorKind::OutOfRange,
                format!("record index {index} out of range, file has {}", self.count),
            ));
        }
        let bytes = self
            .index
            .read_range(index_entry_offset(index), INDEX_RECORD_LENGTH)?;
        parse_index_record(&bytes)
    }

    pub fn read_record_bytes(&mut self, index: usize) -> Result<Vec<u8>> {
        let entry = self.index_record(index)?;
        let len = entry.record_len()?;
        if len > self.config.max_record_bytes {
            return Err(ShpError::new(
                ErrorKind::LimitExceeded,
                format!(
                    "record {index} is {len} bytes, limit is {}",
                    self.config.max_record_bytes
                ),
            ));
        }
        self.main.read_range(entry.byte_offset()?, len as usize)
    }

    pub fn read_attributes(&mut self, index: usize) -> Result<Option<Arc<Attributes>>> {
        match self.attributes.as_mut() {
            Some(table) => Ok(table.read_record(index)?.map(Arc::new)),
            None => Ok(None),
        }
    }

    pub fn read_shape(&mut self, index: usize) -> Result<Shape> {
        let shape = self.read_record_bytes(index).and_then(|record| {
            let attributes = self.read_attributes(index)?;
            parse_shape(&record, attributes)
        });
        shape.map_err(|mut err| {
            err.message = format!("record index {index}: {}", err.message);
            err
        })
    }

    pub fn shapes(&mut self) -> Shapes<'_, S, A> {
        Shapes {
            file: self,
            next: 0,
        }
    }

    pub fn read_all(&mut self) -> Result<Vec<Shape>> {
        self.read_first(self.count)
    }

    pub fn read_first(&mut self, limit: usize) -> Result<Vec<Shape>> {
        let strict = self.config.strict;
        let mut shapes = Vec::with_capacity(limit.min(self.count).min(MAX_PREALLOCATED_SHAPES));
        for (index, shape) in self.shapes().take(limit).enumerate() {
            match shape {
                Ok(shape) => shapes.push(shape),
                Err(err) if !strict && !matches!(err.kind, ErrorKind::Io) => {
                    warn!(index, error = %err, "skipping malformed record");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(shapes)
    }
}

#[derive(Debug)]
pub struct Shapes<'a, S, A> {
    file: &'a mut Shapefile<S, A>,
    next: usize,
}

impl<S: ByteSource, A: AttributeSource> Iterator for Shapes<'_, S, A> {
    type Item = Result<Shape>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.file.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.file.read_shape(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.file.count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<S: ByteSource, A: AttributeSource> ExactSizeIterator for Shapes<'_, S, A> {}

fn open_named(path: &Path) -> Result<FileSource> {
    open_source(path).map_err(|mut err| {
        err.message = format!("{}: {}", path.display(), err.message);
        err
    })
}

fn read_file_header<S: ByteSource>(source: &mut S, role: &str) -> Result<Header> {
    let len = source.byte_len()?;
    if len < HEADER_LENGTH as u64 {
        return Err(ShpError::new(
            ErrorKind::InvalidLength,
            format!("{role} file is {len} bytes and does not contain a valid header"),
        ));
    }
    let bytes = source.read_range(0, HEADER_LENGTH)?;
    parse_header(&bytes)
}
