mod supervisor;

use std::time::Duration;

use frameloop_core::{animations, Animation};

use crate::{AnimateConfig, Output, SharedBuffer, Supervisor};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

/// Supervisor drawing `bar(width)` into a fresh buffer every 10ms.
fn buffered_supervisor(width: usize) -> (Supervisor, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let config = AnimateConfig::new()
        .with_step(Duration::from_millis(10))
        .with_output(Output::Buffer(buffer.clone()));
    let animation = Animation::instantiate(animations::bar(width)).unwrap();
    (Supervisor::new(animation, config).unwrap(), buffer)
}
