mod clock;
mod controller;
mod gpu_context;
mod input_adapter;
mod timer;
mod window;

pub use clock::{Clock, MAX_FRAME_DELTA};
pub use controller::{Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::{scroll_lines, WinitController, PIXELS_PER_SCROLL_LINE};
pub use timer::{FpsCounter, FPS_UPDATE_INTERVAL};
pub use window::WindowDimensions;
