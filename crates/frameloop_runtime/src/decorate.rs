//! Wrapping named units of work with a supervisor.
//!
//! ```no_run
//! use frameloop_runtime::{animate, AnimateConfig, Supervisor, Work};
//!
//! let supervisor = Supervisor::with_default_animation(AnimateConfig::default())?;
//! let build = Work::new("build", |target: &'static str| format!("built {}", target));
//! let build = animate(build, supervisor)?;
//! assert_eq!(build.call("release"), "built release");
//! # Ok::<(), frameloop_runtime::ConfigError>(())
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::annotate::Annotate;
use crate::error::ConfigError;
use crate::supervisor::Supervisor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    Sync,
    Async,
}

/// The outermost wrapper applied to a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    #[default]
    Plain,
    Animated,
    Annotated,
}

/// Identity that survives wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkMeta {
    pub name: String,
    pub doc: Option<String>,
}

impl WorkMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }
}

/// A unit of work that [`animate`] and [`Annotate::wrap`] can wrap.
pub trait Decorate: Sized {
    fn kind(&self) -> WorkKind;

    fn meta(&self) -> &WorkMeta;

    fn decoration(&self) -> Decoration;

    /// Same work, each call run under `supervisor`.
    fn supervised(self, supervisor: Arc<Supervisor>) -> Self;

    /// Same work, each call surrounded by `annotate`'s messages.
    fn annotated(self, annotate: Arc<Annotate>) -> Self;
}

/// Makes every call of `work` run under `supervisor`.
///
/// Annotation has to wrap animation: animating annotated work fails with
/// [`ConfigError::DecorationOrder`].
pub fn animate<W: Decorate>(work: W, supervisor: Supervisor) -> Result<W, ConfigError> {
    animate_shared(work, Arc::new(supervisor))
}

/// [`animate`] with a supervisor shared between several units of work.
pub fn animate_shared<W: Decorate>(work: W, supervisor: Arc<Supervisor>) -> Result<W, ConfigError> {
    match work.decoration() {
        Decoration::Annotated => Err(ConfigError::DecorationOrder {
            name: work.meta().name.clone(),
        }),
        Decoration::Animated => Err(ConfigError::AlreadyAnimated {
            name: work.meta().name.clone(),
        }),
        Decoration::Plain => {
            tracing::debug!(work = %work.meta().name, kind = ?work.kind(), "Animating work");
            Ok(work.supervised(supervisor))
        }
    }
}

type SyncFn<A, T> = Arc<dyn Fn(A) -> T + Send + Sync>;
type AsyncFn<A, T> = Arc<dyn Fn(A) -> BoxFuture<'static, T> + Send + Sync>;

/// Synchronous unit of work taking `A` and returning `T`.
pub struct Work<A, T> {
    func: SyncFn<A, T>,
    meta: WorkMeta,
    decoration: Decoration,
}

impl<A: 'static, T: 'static> Work<A, T> {
    pub fn new(name: impl Into<String>, func: impl Fn(A) -> T + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
            meta: WorkMeta::new(name),
            decoration: Decoration::Plain,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.meta.doc = Some(doc.into());
        self
    }

    pub fn call(&self, args: A) -> T {
        (self.func)(args)
    }

    fn rewrap(self, func: SyncFn<A, T>, decoration: Decoration) -> Self {
        Self {
            func,
            meta: self.meta,
            decoration,
        }
    }
}

impl<A, T> Clone for Work<A, T> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            meta: self.meta.clone(),
            decoration: self.decoration,
        }
    }
}

impl<A, T> std::fmt::Debug for Work<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Work")
            .field("meta", &self.meta)
            .field("decoration", &self.decoration)
            .finish_non_exhaustive()
    }
}

impl<A: 'static, T: 'static> Decorate for Work<A, T> {
    fn kind(&self) -> WorkKind {
        WorkKind::Sync
    }

    fn meta(&self) -> &WorkMeta {
        &self.meta
    }

    fn decoration(&self) -> Decoration {
        self.decoration
    }

    fn supervised(self, supervisor: Arc<Supervisor>) -> Self {
        let inner = Arc::clone(&self.func);
        let func: SyncFn<A, T> = Arc::new(move |args: A| supervisor.run(|| inner(args)));
        self.rewrap(func, Decoration::Animated)
    }

    fn annotated(self, annotate: Arc<Annotate>) -> Self {
        let inner = Arc::clone(&self.func);
        let func: SyncFn<A, T> = Arc::new(move |args: A| {
            annotate.write_start();
            let value = inner(args);
            annotate.write_end();
            value
        });
        self.rewrap(func, Decoration::Annotated)
    }
}

/// Asynchronous unit of work taking `A` and resolving to `T`.
pub struct AsyncWork<A, T> {
    func: AsyncFn<A, T>,
    meta: WorkMeta,
    decoration: Decoration,
}

impl<A: Send + 'static, T: Send + 'static> AsyncWork<A, T> {
    pub fn new<F, Fut>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self {
            func: Arc::new(move |args: A| func(args).boxed()),
            meta: WorkMeta::new(name),
            decoration: Decoration::Plain,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.meta.doc = Some(doc.into());
        self
    }

    pub async fn call(&self, args: A) -> T {
        (self.func)(args).await
    }

    fn rewrap(self, func: AsyncFn<A, T>, decoration: Decoration) -> Self {
        Self {
            func,
            meta: self.meta,
            decoration,
        }
    }
}

impl<A, T> Clone for AsyncWork<A, T> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            meta: self.meta.clone(),
            decoration: self.decoration,
        }
    }
}

impl<A, T> std::fmt::Debug for AsyncWork<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncWork")
            .field("meta", &self.meta)
            .field("decoration", &self.decoration)
            .finish_non_exhaustive()
    }
}

impl<A: Send + 'static, T: Send + 'static> Decorate for AsyncWork<A, T> {
    fn kind(&self) -> WorkKind {
        WorkKind::Async
    }

    fn meta(&self) -> &WorkMeta {
        &self.meta
    }

    fn decoration(&self) -> Decoration {
        self.decoration
    }

    fn supervised(self, supervisor: Arc<Supervisor>) -> Self {
        let inner = Arc::clone(&self.func);
        let func: AsyncFn<A, T> = Arc::new(move |args: A| {
            let inner = Arc::clone(&inner);
            let supervisor = Arc::clone(&supervisor);
            async move { supervisor.run_async(move || inner(args)).await }.boxed()
        });
        self.rewrap(func, Decoration::Animated)
    }

    fn annotated(self, annotate: Arc<Annotate>) -> Self {
        let inner = Arc::clone(&self.func);
        let func: AsyncFn<A, T> = Arc::new(move |args: A| {
            let inner = Arc::clone(&inner);
            let annotate = Arc::clone(&annotate);
            async move {
                annotate.write_start();
                let value = inner(args).await;
                annotate.write_end();
                value
            }
            .boxed()
        });
        self.rewrap(func, Decoration::Annotated)
    }
}
