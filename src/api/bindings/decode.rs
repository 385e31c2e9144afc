#[pyfunction]
pub fn read_header(path: &str) -> PyResult<HeaderRow> {
    let bytes = file_open::read_header_bytes(path).map_err(to_py_err)?;
    let header = header::parse_header(&bytes).map_err(to_py_err)?;
    Ok(header_row(&header))
}

#[pyfunction]
pub fn shape_count(path: &str) -> PyResult<usize> {
    let file = Shapefile::open(path).map_err(to_py_err)?;
    Ok(file.count())
}

#[pyfunction(signature = (path, limit=None))]
pub fn list_index_records(path: &str, limit: Option<usize>) -> PyResult<Vec<IndexRecordRow>> {
    let mut file = Shapefile::open(path).map_err(to_py_err)?;
    let count = limit.map_or(file.count(), |limit| limit.min(file.count()));
    let mut rows = Vec::with_capacity(count);
    for index in 0..count {
        let record = file.index_record(index).map_err(to_py_err)?;
        rows.push((record.offset_words, record.content_length_words));
    }
    Ok(rows)
}

#[pyfunction(signature = (path, limit=None, strict=true))]
pub fn decode_shapes(path: &str, limit: Option<usize>, strict: bool) -> PyResult<Vec<ShapeRow>> {
    let config = ParseConfig {
        strict,
        ..ParseConfig::default()
    };
    let mut file = Shapefile::open_with_config(path, config).map_err(to_py_err)?;
    let shapes = match limit {
        Some(limit) => file.read_first(limit).map_err(to_py_err)?,
        None => file.read_all().map_err(to_py_err)?,
    };
    Ok(shapes.iter().map(shape_row).collect())
}

#[pyfunction(signature = (path, limit=None))]
pub fn read_attributes(path: &str, limit: Option<usize>) -> PyResult<Vec<AttributeRow>> {
    let paths = ShapefilePaths::from_path(path);
    let Some(mut table) =
        session::open_attribute_table(&paths, &ParseConfig::default()).map_err(to_py_err)?
    else {
        return Ok(Vec::new());
    };
    let count = limit.map_or(table.record_count(), |limit| {
        limit.min(table.record_count())
    });
    let mut rows = Vec::with_capacity(count);
    for index in 0..count {
        if let Some(record) = table.read_record(index).map_err(to_py_err)? {
            rows.push(attributes_row(&record));
        }
    }
    Ok(rows)
}
