pub mod animation;
pub mod animations;
pub mod compose;
pub mod error;
pub mod frame;
pub mod multiline;

pub use animation::{bind, Animation, Bound, FrameFunction};
pub use animations::{builtin, default_frames, Builtin, BUILTINS};
pub use compose::{cycle, repeat_filler, restart_cycle, zip_join};
pub use error::{FrameError, Result};
pub use frame::{CursorBackup, Frame, FrameShape, FrameStream, BACKLINE, BACKSPACE};
pub use multiline::{stack, stack_shared, Stacked};
