/// Axis-aligned vector in the complex plane; carries the viewport's extents
/// and per-cell step size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneVec {
    pub x: f64,
    pub y: f64,
}
