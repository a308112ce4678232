pub mod animator;
pub mod canvas;
pub mod map_paint;
pub mod palette;

pub use animator::{AnimationLoop, CancelToken, FrameOutcome, FrameScheduler};
pub use canvas::{Canvas, PainterCanvas};
pub use palette::{Mood, Palette};
