/// Numeric conversion helpers.
///
/// Conversions between `f64` and `usize` used for counts, lengths and
/// indices. The checked variants return the caller's error when a value is not
/// exactly representable; the saturating variant clamps.
pub mod num;
