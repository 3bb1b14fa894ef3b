// Numeric tuning shared by the CPU evaluators and mirrored in the WGSL shaders.
// Keep the two in sync when changing anything here.

// Escape-time (2D)
pub const MAX_ITERATIONS: u32 = 256;
pub const ESCAPE_RADIUS_SQ: f32 = 4.0;
pub const PLANE_SCALE: f32 = 4.0; // uv span mapped onto the complex plane at zoom 1
pub const PLANE_OFFSET_X: f32 = -1.5; // centres the cardioid at rotation 0

// Distance field (3D)
pub const BULB_ITERATIONS: u32 = 12;
pub const BULB_BAILOUT: f32 = 2.0;
pub const POWER_WOBBLE: f32 = 1.5; // amplitude of the rotation/time power modulation
pub const ANGLE_WOBBLE: f32 = 0.2; // amplitude of the theta/phi perturbation

// Ray marching
pub const MAX_STEPS: u32 = 64;
pub const MIN_DIST: f32 = 0.001;
pub const MAX_DIST: f32 = 50.0;
pub const NORMAL_EPSILON: f32 = 0.001;

// Shading
pub const COLOR_TIME_SCALE: f32 = 0.2;
pub const AMBIENT: f32 = 0.15;
pub const RIM_STRENGTH: f32 = 0.5;
pub const RIM_EXPONENT: f32 = 1.5;
pub const SPECULAR_STRENGTH: f32 = 0.3;
pub const SPECULAR_EXPONENT: f32 = 8.0;
pub const SURFACE_PULSE: f32 = 0.1;
pub const FOG_DENSITY: f32 = 0.08;
pub const CYCLE_BLEND: f32 = 0.2;

// Camera: a 2x2 plane at z=0 seen from z=1 through a 75 degree vertical FOV
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_DISTANCE: f32 = 1.0;
pub const PLANE_HALF_EXTENT: f32 = 1.0;
pub const ORBIT_RADIUS: f32 = 2.5;
pub const ORBIT_DRIFT: f32 = 0.1; // radians per second of automatic orbit
pub const HEX_CELL: [f32; 2] = [1.0, 1.73];
pub const HEX_WOBBLE: f32 = 0.01;

// View state
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_DEFAULT: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.1; // per wheel tick
pub const ZOOM_SMOOTHING: f32 = 0.1; // fraction of the remaining gap closed per frame
pub const ROTATION_DRAG_GAIN: f32 = 2.0; // radians per viewport-width of drag
