//! Structured, transformable path model
//!
//! A [`Path`] is the high-level side's own record of path geometry: built
//! element by element, or copied out of engine state and decoded from the
//! flat record buffer. Rendering always replays the elements as primitive
//! drawing calls; the engine is never asked to append a path object, so
//! there is no second, engine-owned representation to drift from this one.

use smallvec::SmallVec;

use cairn_geom::{Matrix, Rect, Vector};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::ffi;
use crate::status::Status;

/// One structured path-construction instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    MoveTo(Vector),
    LineTo(Vector),
    CurveTo(Vector, Vector, Vector),
    Close,
}

impl Element {
    fn name(&self) -> &'static str {
        match self {
            Element::MoveTo(_) => "move-to",
            Element::LineTo(_) => "line-to",
            Element::CurveTo(..) => "curve-to",
            Element::Close => "close",
        }
    }

    fn transformed(&self, m: &Matrix) -> Element {
        match *self {
            Element::MoveTo(p) => Element::MoveTo(m.map(p)),
            Element::LineTo(p) => Element::LineTo(m.map(p)),
            Element::CurveTo(p1, p2, p3) => Element::CurveTo(m.map(p1), m.map(p2), m.map(p3)),
            Element::Close => Element::Close,
        }
    }
}

/// A run of raw control-point geometry: one subpath's points and whether
/// it was closed. This is the natural view of a flattened engine copy,
/// where every element is a straight line.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub points: Vec<Vector>,
    pub closed: bool,
}

/// An immutable ordered sequence of [`Element`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: SmallVec<[Element; 8]>,
}

impl Path {
    /// Builds a path from elements, validating that every drawing element
    /// has a current point to continue from (the first drawing element
    /// must be a move-to; a close returns to the most recent move-to
    /// point, which remains current).
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Result<Self> {
        let elements: SmallVec<[Element; 8]> = elements.into_iter().collect();
        let mut has_current = false;
        for (index, element) in elements.iter().enumerate() {
            match element {
                Element::MoveTo(_) => has_current = true,
                _ if !has_current => {
                    return Err(Error::MalformedPath { index, found: element.name() });
                }
                _ => {}
            }
        }
        Ok(Path { elements })
    }

    /// Rebuilds a path from the raw control-point view: each segment
    /// becomes a move-to, line-tos through its remaining points, and a
    /// close if the segment was closed. Empty segments are malformed.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Result<Self> {
        let mut elements = SmallVec::new();
        for (index, segment) in segments.into_iter().enumerate() {
            let mut points = segment.points.iter();
            let first = points
                .next()
                .ok_or(Error::MalformedPath { index, found: "empty segment" })?;
            elements.push(Element::MoveTo(*first));
            elements.extend(points.map(|p| Element::LineTo(*p)));
            if segment.closed {
                elements.push(Element::Close);
            }
        }
        Ok(Path { elements })
    }

    /// Takes ownership of a foreign path buffer, decodes it, and releases
    /// it, in that order, so the buffer is freed even when decoding
    /// fails.
    ///
    /// # Safety
    ///
    /// `raw` must be a buffer returned by `cairo_copy_path` or
    /// `cairo_copy_path_flat` that no one else will destroy.
    pub(crate) unsafe fn take_foreign(
        raw: *mut ffi::cairo_path_t,
        call: &'static str,
    ) -> Result<Self> {
        if raw.is_null() {
            return Err(Error::Foreign { call, status: Status::NULL_POINTER });
        }
        struct OwnedBuffer(*mut ffi::cairo_path_t);
        impl Drop for OwnedBuffer {
            fn drop(&mut self) {
                unsafe { ffi::cairo_path_destroy(self.0) };
            }
        }
        let buffer = OwnedBuffer(raw);
        let path = &*buffer.0;
        crate::error::check(call, Status(path.status))?;
        let records = if path.num_data > 0 {
            std::slice::from_raw_parts(path.data, path.num_data as usize)
        } else {
            &[]
        };
        Ok(Path { elements: decode(records)? })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// A new path with every control point mapped through `matrix`.
    /// Element structure and count are preserved exactly.
    pub fn transformed(&self, matrix: &Matrix) -> Self {
        Path {
            elements: self.elements.iter().map(|e| e.transformed(matrix)).collect(),
        }
    }

    /// Re-issues the path into a drawing context as primitive calls, in
    /// element order.
    pub fn replay_onto(&self, ctx: &mut Context) -> Result<()> {
        for element in &self.elements {
            match *element {
                Element::MoveTo(p) => ctx.move_to(p)?,
                Element::LineTo(p) => ctx.line_to(p)?,
                Element::CurveTo(p1, p2, p3) => ctx.curve_to(p1, p2, p3)?,
                Element::Close => ctx.close_path()?,
            };
        }
        Ok(())
    }

    /// Groups the elements into subpath runs of raw control points.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        for element in &self.elements {
            match *element {
                Element::MoveTo(p) => {
                    segments.push(Segment { points: vec![p], closed: false })
                }
                Element::LineTo(p) => {
                    if let Some(current) = segments.last_mut() {
                        current.points.push(p);
                    }
                }
                Element::CurveTo(p1, p2, p3) => {
                    if let Some(current) = segments.last_mut() {
                        current.points.extend([p1, p2, p3]);
                    }
                }
                Element::Close => {
                    if let Some(current) = segments.last_mut() {
                        current.closed = true;
                    }
                }
            }
        }
        segments
    }

    /// The bounding rectangle of the control points, or `None` for an
    /// empty path. Curve control points count, so this can overestimate
    /// the inked extent.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.elements.iter().flat_map(|e| match *e {
            Element::MoveTo(p) | Element::LineTo(p) => vec![p],
            Element::CurveTo(p1, p2, p3) => vec![p1, p2, p3],
            Element::Close => vec![],
        });
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Vector::new(min.x.min(p.x), min.y.min(p.y)),
                Vector::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::from_corners(min, max))
    }
}

/// Number of control points per tag, per the engine's record format.
fn control_points(tag: u32) -> Result<usize> {
    match tag {
        ffi::CAIRO_PATH_MOVE_TO | ffi::CAIRO_PATH_LINE_TO => Ok(1),
        ffi::CAIRO_PATH_CURVE_TO => Ok(3),
        ffi::CAIRO_PATH_CLOSE_PATH => Ok(0),
        tag => Err(Error::UnknownPathTag { tag }),
    }
}

/// Decodes the engine's flat record buffer: each element is a header
/// record (tag + total record count) followed by its point records;
/// advancing by `header.length` skips any trailing records an unknown
/// future layout might add, but short headers are rejected.
fn decode(records: &[ffi::cairo_path_data_t]) -> Result<SmallVec<[Element; 8]>> {
    let mut elements = SmallVec::new();
    let mut i = 0usize;
    while i < records.len() {
        let header = unsafe { records[i].header };
        let tag = header.data_type;
        let needed = control_points(tag)?;
        let length = header.length;
        if length < needed as i32 + 1 || i + length as usize > records.len() {
            return Err(Error::InvalidPathData { tag, length });
        }
        let point = |at: usize| -> Vector {
            let p = unsafe { records[i + 1 + at].point };
            Vector::new(p.x, p.y)
        };
        elements.push(match tag {
            ffi::CAIRO_PATH_MOVE_TO => Element::MoveTo(point(0)),
            ffi::CAIRO_PATH_LINE_TO => Element::LineTo(point(0)),
            ffi::CAIRO_PATH_CURVE_TO => Element::CurveTo(point(0), point(1), point(2)),
            _ => Element::Close,
        });
        i += length as usize;
    }
    Ok(elements)
}

/// Chainable builder for paths that are valid by construction.
pub struct PathBuilder {
    elements: SmallVec<[Element; 8]>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { elements: SmallVec::new() }
    }

    pub fn move_to(mut self, p: impl Into<Vector>) -> Self {
        self.elements.push(Element::MoveTo(p.into()));
        self
    }

    pub fn line_to(mut self, p: impl Into<Vector>) -> Self {
        self.elements.push(Element::LineTo(p.into()));
        self
    }

    pub fn curve_to(
        mut self,
        p1: impl Into<Vector>,
        p2: impl Into<Vector>,
        p3: impl Into<Vector>,
    ) -> Self {
        self.elements
            .push(Element::CurveTo(p1.into(), p2.into(), p3.into()));
        self
    }

    pub fn close(mut self) -> Self {
        self.elements.push(Element::Close);
        self
    }

    /// Validates the accumulated elements into a [`Path`].
    pub fn build(self) -> Result<Path> {
        Path::from_elements(self.elements)
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(tag: u32, length: i32) -> ffi::cairo_path_data_t {
        ffi::cairo_path_data_t {
            header: ffi::cairo_path_data_header { data_type: tag, length },
        }
    }

    fn point(x: f64, y: f64) -> ffi::cairo_path_data_t {
        ffi::cairo_path_data_t {
            point: ffi::cairo_path_data_point { x, y },
        }
    }

    #[test]
    fn leading_line_to_is_malformed() {
        let err = Path::from_elements([Element::LineTo(Vector::new(1.0, 1.0))]).unwrap_err();
        assert_eq!(err, Error::MalformedPath { index: 0, found: "line-to" });
    }

    #[test]
    fn leading_curve_to_is_malformed() {
        let err = Path::from_elements([Element::CurveTo(
            Vector::new(1.0, 0.0),
            Vector::new(2.0, 0.0),
            Vector::new(3.0, 0.0),
        )])
        .unwrap_err();
        assert_eq!(err, Error::MalformedPath { index: 0, found: "curve-to" });
    }

    #[test]
    fn leading_close_is_malformed() {
        let err = Path::from_elements([Element::Close]).unwrap_err();
        assert_eq!(err, Error::MalformedPath { index: 0, found: "close" });
    }

    #[test]
    fn close_keeps_current_point() {
        // drawing may continue after a close without a fresh move-to
        let path = Path::from_elements([
            Element::MoveTo(Vector::ZERO),
            Element::LineTo(Vector::new(10.0, 0.0)),
            Element::Close,
            Element::LineTo(Vector::new(0.0, 10.0)),
        ])
        .unwrap();
        assert_eq!(path.elements().len(), 4);
    }

    #[test]
    fn builder_round_trip() {
        let path = PathBuilder::new()
            .move_to((0.0, 0.0))
            .line_to((10.0, 0.0))
            .curve_to((10.0, 5.0), (5.0, 10.0), (0.0, 10.0))
            .close()
            .build()
            .unwrap();
        assert_eq!(path.elements().len(), 4);
        assert_eq!(path.elements()[0], Element::MoveTo(Vector::ZERO));
    }

    #[test]
    fn transform_preserves_structure() {
        let path = PathBuilder::new()
            .move_to((0.0, 0.0))
            .line_to((10.0, 0.0))
            .close()
            .build()
            .unwrap();
        let moved = path.transformed(&Matrix::translation((5.0, 5.0)));
        assert_eq!(
            moved.elements(),
            &[
                Element::MoveTo(Vector::new(5.0, 5.0)),
                Element::LineTo(Vector::new(15.0, 5.0)),
                Element::Close,
            ]
        );
    }

    #[test]
    fn decode_flat_buffer() {
        let records = [
            header(ffi::CAIRO_PATH_MOVE_TO, 2),
            point(1.0, 2.0),
            header(ffi::CAIRO_PATH_CURVE_TO, 4),
            point(3.0, 4.0),
            point(5.0, 6.0),
            point(7.0, 8.0),
            header(ffi::CAIRO_PATH_CLOSE_PATH, 1),
        ];
        let elements = decode(&records).unwrap();
        assert_eq!(
            &elements[..],
            &[
                Element::MoveTo(Vector::new(1.0, 2.0)),
                Element::CurveTo(
                    Vector::new(3.0, 4.0),
                    Vector::new(5.0, 6.0),
                    Vector::new(7.0, 8.0)
                ),
                Element::Close,
            ]
        );
    }

    #[test]
    fn decode_rejects_unknown_tag() {
        let records = [header(42, 1)];
        assert_eq!(decode(&records).unwrap_err(), Error::UnknownPathTag { tag: 42 });
    }

    #[test]
    fn decode_rejects_short_header() {
        // a line-to must announce at least its own record plus one point
        let records = [header(ffi::CAIRO_PATH_LINE_TO, 1)];
        assert_eq!(
            decode(&records).unwrap_err(),
            Error::InvalidPathData { tag: ffi::CAIRO_PATH_LINE_TO, length: 1 }
        );
    }

    #[test]
    fn decode_rejects_truncated_buffer() {
        let records = [header(ffi::CAIRO_PATH_CURVE_TO, 4), point(0.0, 0.0)];
        assert!(matches!(
            decode(&records).unwrap_err(),
            Error::InvalidPathData { .. }
        ));
    }

    #[test]
    fn decode_skips_extra_records_per_header_length() {
        // forward-compatible layouts may carry extra records; length wins
        let records = [
            header(ffi::CAIRO_PATH_MOVE_TO, 3),
            point(1.0, 1.0),
            point(9.0, 9.0),
            header(ffi::CAIRO_PATH_CLOSE_PATH, 1),
        ];
        let elements = decode(&records).unwrap();
        assert_eq!(
            &elements[..],
            &[Element::MoveTo(Vector::new(1.0, 1.0)), Element::Close]
        );
    }

    #[test]
    fn segments_group_subpaths() {
        let path = PathBuilder::new()
            .move_to((0.0, 0.0))
            .line_to((1.0, 0.0))
            .close()
            .move_to((5.0, 5.0))
            .line_to((6.0, 5.0))
            .build()
            .unwrap();
        let segments = path.segments();
        assert_eq!(segments.len(), 2);
        assert!(segments[0].closed);
        assert!(!segments[1].closed);
        assert_eq!(segments[1].points, vec![Vector::new(5.0, 5.0), Vector::new(6.0, 5.0)]);

        let rebuilt = Path::from_segments(&segments).unwrap();
        assert_eq!(rebuilt.elements(), path.elements());
    }

    #[test]
    fn bounds_cover_control_points() {
        let path = PathBuilder::new()
            .move_to((2.0, 3.0))
            .line_to((-1.0, 8.0))
            .build()
            .unwrap();
        assert_eq!(path.bounds(), Some(Rect::from_corners((-1.0, 3.0), (2.0, 8.0))));
        assert_eq!(Path::default().bounds(), None);
    }
}
