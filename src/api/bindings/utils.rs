fn header_row(header: &Header) -> HeaderRow {
    (
        header.file_code,
        header.file_length,
        header.version,
        header.shape_type.as_str().to_string(),
        bounds_row(&header.bounding_box()),
        (header.z_min, header.z_max),
        (header.m_min, header.m_max),
    )
}

fn bounds_row(bbox: &Rectangle) -> BoundsRow {
    (bbox.left, bbox.top, bbox.right, bbox.bottom)
}

fn point_row(point: &Point) -> Point2 {
    (point.x, point.y)
}

fn attributes_row(attributes: &Attributes) -> AttributeRow {
    attributes
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn shape_row(shape: &Shape) -> ShapeRow {
    let parts: Vec<Vec<Point2>> = shape
        .geometry
        .parts()
        .iter()
        .map(|part| part.iter().map(point_row).collect())
        .collect();
    (
        shape.record_number,
        shape.shape_type().as_str().to_string(),
        shape.geometry.bounding_box().as_ref().map(bounds_row),
        parts,
        shape.geometry.measures().map(<[f64]>::to_vec),
        shape.attributes().map(attributes_row),
    )
}

fn to_py_err(err: ShpError) -> PyErr {
    let message = err.to_string();
    match err.kind {
        ErrorKind::Io => PyIOError::new_err(message),
        ErrorKind::UnsupportedShapeType(_) => PyNotImplementedError::new_err(message),
        _ => PyValueError::new_err(message),
    }
}
