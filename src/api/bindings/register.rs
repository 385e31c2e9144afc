pub fn register(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(read_header, module)?)?;
    module.add_function(wrap_pyfunction!(shape_count, module)?)?;
    module.add_function(wrap_pyfunction!(list_index_records, module)?)?;
    module.add_function(wrap_pyfunction!(decode_shapes, module)?)?;
    module.add_function(wrap_pyfunction!(read_attributes, module)?)?;
    Ok(())
}
