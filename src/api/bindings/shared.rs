use pyo3::exceptions::{PyIOError, PyNotImplementedError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::attributes::{AttributeSource, Attributes};
use crate::core::config::ParseConfig;
use crate::core::error::{ErrorKind, ShpError};
use crate::shapes::{Point, Rectangle, Shape};
use crate::shp::file_open::{self, ShapefilePaths};
use crate::shp::header::{self, Header};
use crate::shp::session::{self, Shapefile};

type Point2 = (f64, f64);
type BoundsRow = (f64, f64, f64, f64);
type RangeRow = (f64, f64);

type HeaderRow = (i32, i32, i32, String, BoundsRow, RangeRow, RangeRow);
type IndexRecordRow = (i32, i32);
type AttributeRow = HashMap<String, String>;
type ShapeRow = (
    i32,
    String,
    Option<BoundsRow>,
    Vec<Vec<Point2>>,
    Option<Vec<f64>>,
    Option<AttributeRow>,
);
