/// Minimum pixel count (w*h) to use row-level Rayon parallelism when
/// converting between raster layouts.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Lower bound of the user zoom factor.
pub const MIN_SCALE: f32 = 0.5;

/// Upper bound of the user zoom factor.
pub const MAX_SCALE: f32 = 2.0;

/// Zoom step applied by the zoom-in/zoom-out buttons.
pub const SCALE_STEP: f32 = 0.1;

/// Rotation step (degrees) applied by the rotate-left/rotate-right buttons.
pub const ROTATION_STEP_DEGREES: f32 = 15.0;

/// Rotation wraps with a truncating remainder, so the stored angle keeps the
/// sign of the input and stays within (-360, 360).
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Diameter of the interactive preview circle, in preview pixels.
pub const DEFAULT_PREVIEW_DIAMETER: f32 = 240.0;

/// Diameter of the photo cutout on the exported badge, in template pixels.
pub const DEFAULT_EXPORT_DIAMETER: f32 = 400.0;

/// Template canvas size used until the real template reports its dimensions.
pub const DEFAULT_TEMPLATE_SIZE: u32 = 1080;

/// Horizontal position of the cutout center as a fraction of template width.
pub const DEFAULT_CENTER_X_FRACTION: f32 = 0.5;

/// Vertical position of the cutout center as a fraction of template height.
pub const DEFAULT_CENTER_Y_FRACTION: f32 = 0.6;

/// Gap between the cutout edge and the decorative ring's center line.
pub const DEFAULT_RING_GAP: f32 = 8.0;

/// Stroke width of the decorative ring.
pub const DEFAULT_RING_WIDTH: f32 = 15.0;
