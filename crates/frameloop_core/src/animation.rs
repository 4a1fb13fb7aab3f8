//! Animation engine: turns a frame function into an endless, self-backing-up
//! sequence of frames.
//!
//! Every composed frame is the plain frame followed by its cursor backup, so
//! each write leaves the cursor where the frame started. The backup is
//! measured once from the first frame; frame functions must keep a constant
//! shape, otherwise the output drifts.

use std::sync::Arc;

use crate::compose::{restart_cycle, zip_join, RestartCycle, ZipJoin};
use crate::error::{FrameError, Result};
use crate::frame::{CursorBackup, Frame, FrameShape, FrameStream};

/// A repeatable producer of an animation's frames. Each call to `frames`
/// must return a fresh, independent sequence.
pub trait FrameFunction: Send + Sync {
    fn frames(&self) -> FrameStream;
}

impl<F, I> FrameFunction for F
where
    F: Fn() -> I + Send + Sync,
    I: IntoIterator<Item = Frame>,
    I::IntoIter: Send + 'static,
{
    fn frames(&self) -> FrameStream {
        Box::new(self().into_iter())
    }
}

/// A frame function together with the arguments it is invoked with.
#[derive(Debug, Clone)]
pub struct Bound<F, A> {
    func: F,
    args: A,
}

pub fn bind<F, A>(func: F, args: A) -> Bound<F, A> {
    Bound { func, args }
}

impl<F, A> Bound<F, A> {
    pub fn args(&self) -> &A {
        &self.args
    }
}

impl<F, A, I> FrameFunction for Bound<F, A>
where
    F: Fn(&A) -> I + Send + Sync,
    A: Send + Sync,
    I: IntoIterator<Item = Frame>,
    I::IntoIter: Send + 'static,
{
    fn frames(&self) -> FrameStream {
        Box::new((self.func)(&self.args).into_iter())
    }
}

type ComposeFn = Box<dyn FnMut() -> ZipJoin + Send>;

pub struct Animation {
    source: Arc<dyn FrameFunction>,
    backup: CursorBackup,
    composed: RestartCycle<ComposeFn, ZipJoin>,
    /// Plain frame (no backup) most recently handed out.
    last_frame: Option<Frame>,
}

impl Animation {
    pub fn instantiate<F: FrameFunction + 'static>(source: F) -> Result<Self> {
        Self::from_shared(Arc::new(source))
    }

    /// Binds `func` to `args` and instantiates the result.
    pub fn with_args<F, A, I>(func: F, args: A) -> Result<Self>
    where
        F: Fn(&A) -> I + Send + Sync + 'static,
        A: Send + Sync + 'static,
        I: IntoIterator<Item = Frame>,
        I::IntoIter: Send + 'static,
    {
        Self::instantiate(bind(func, args))
    }

    pub fn from_shared(source: Arc<dyn FrameFunction>) -> Result<Self> {
        let backup = measure(source.as_ref())?;
        let composed = compose(&source, &backup);
        Ok(Self {
            source,
            backup,
            composed,
            last_frame: None,
        })
    }

    /// Advances the animation and returns the frame with its backup appended.
    pub fn next_frame(&mut self) -> Result<Frame> {
        let composed = self.composed.next().ok_or_else(|| {
            FrameError::MalformedFrame("frame function stopped producing frames".to_string())
        })?;
        let plain = composed
            .strip_suffix(self.backup.as_str())
            .unwrap_or(&composed)
            .to_string();
        self.last_frame = Some(plain);
        Ok(composed)
    }

    /// Rebuilds the sequence from a fresh invocation of the frame function.
    pub fn reset(&mut self) -> Result<()> {
        self.backup = measure(self.source.as_ref())?;
        self.composed = compose(&self.source, &self.backup);
        self.last_frame = None;
        Ok(())
    }

    /// Whitespace covering the last drawn frame, followed by its backup.
    /// `None` until a frame has been drawn.
    pub fn erase_frame(&self) -> Option<String> {
        let last = self.last_frame.as_deref()?;
        Some(CursorBackup::for_shape(FrameShape::measure(last)).erase())
    }

    pub fn shape(&self) -> FrameShape {
        self.backup.shape()
    }

    pub fn backup(&self) -> &CursorBackup {
        &self.backup
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("shape", &self.backup.shape())
            .field("last_frame", &self.last_frame)
            .finish()
    }
}

fn measure(source: &dyn FrameFunction) -> Result<CursorBackup> {
    let first = source.frames().next().ok_or_else(|| {
        FrameError::MalformedFrame("frame function produced no frames".to_string())
    })?;
    Ok(CursorBackup::for_shape(FrameShape::measure(&first)))
}

fn compose(source: &Arc<dyn FrameFunction>, backup: &CursorBackup) -> RestartCycle<ComposeFn, ZipJoin> {
    let source = Arc::clone(source);
    let backup = backup.clone();
    let factory: ComposeFn = Box::new(move || {
        let filler: FrameStream = Box::new(backup.filler());
        zip_join(vec![source.frames(), filler], "")
    });
    restart_cycle(factory)
}
