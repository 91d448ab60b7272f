//! Default sizes and settings.

/// Device units per EMU: 96 px per inch over 914400 EMU per inch.
pub const SCALE: f64 = 96.0 / 914_400.0;
/// Decimal places kept in serialized path data.
pub const PRECISION: usize = 3;
/// Hundred-thousandths: the unit of proportional adjustments.
pub const ADJ_UNIT: f64 = 100_000.0;
/// Sixty-thousandths of a degree per degree.
pub const ANGLE_UNIT: f64 = 60_000.0;
/// Reference path space of the legacy-style presets (flowchart, cloud, seals).
pub const LEGACY_SPACE: f64 = 21_600.0;

/// Inner radius of a gear relative to its outer radius.
pub const GEAR_INNER_RATIO: f64 = 0.75;

/// Overlay opacities for shaded contours.
pub const LIGHTEN_OPACITY: f64 = 0.4;
pub const LIGHTEN_LESS_OPACITY: f64 = 0.2;
pub const DARKEN_OPACITY: f64 = 0.4;
pub const DARKEN_LESS_OPACITY: f64 = 0.2;

/// Line-end marker size multipliers of the stroke width, indexed sm/med/lg.
pub const MARKER_SIZES: [f64; 3] = [2.0, 3.0, 5.0];

/// Side of a preset pattern tile in device units.
pub const PATTERN_TILE: f64 = 8.0;

/// Stroke width assumed when a border has none.
pub const STROKE_WIDTH: f64 = 1.0;
