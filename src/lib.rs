pub mod attributes;
pub mod core;
pub mod io;
pub mod shapes;
pub mod shp;

#[cfg(feature = "python")]
mod api;
#[cfg(test)]
mod testing;

pub use crate::attributes::{AttributeSource, Attributes, DbfTable};
pub use crate::core::config::ParseConfig;
pub use crate::core::error::{ErrorKind, ShpError};
pub use crate::core::result::Result;
pub use crate::io::{read_f64, read_i32, ByteOrder, ByteSource};
pub use crate::shapes::{
    parse_shape, Geometry, MultiPoint, Point, PolyLine, PolyLineM, Polygon, Rectangle, Shape,
};
pub use crate::shp::header::{parse_header, Header, ShapeType};
pub use crate::shp::index::{parse_index_record, IndexRecord};
pub use crate::shp::session::{Shapefile, Shapes};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _core(module: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register(module)
}
