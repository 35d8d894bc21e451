// DOM and surface constants for the web frontend

// Id given to the canvas the effect attaches inside its host container
pub const CANVAS_ID: &str = "heart-canvas";

// Overlay the host container without intercepting clicks on the page
pub const CANVAS_STYLE: &str =
    "position:absolute;inset:0;width:100%;height:100%;pointer-events:none;";

// Transparent clear so the page background shows through the glow
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Vertices per particle quad (two triangles)
pub const QUAD_VERTICES: u32 = 6;

// Bytes per particle in the position and color instance buffers (3 x f32)
pub const INSTANCE_STRIDE: u64 = 12;

// Swapchain latency hint
pub const MAX_FRAME_LATENCY: u32 = 2;

// Mount id reported by a handle whose activation was skipped
pub const INERT_MOUNT_ID: u64 = 0;
