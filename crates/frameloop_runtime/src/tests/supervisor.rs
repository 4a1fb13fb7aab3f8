use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use frameloop_core::{animations, Animation, BACKSPACE};

use super::{buffered_supervisor, runtime};
use crate::{AnimateConfig, LoopState, Output, SharedBuffer, Supervisor, WriterFactory};

#[test]
fn test_run_returns_work_value() {
    let (supervisor, buffer) = buffered_supervisor(4);
    let value = supervisor.run(|| {
        thread::sleep(Duration::from_millis(30));
        21 * 2
    });
    assert_eq!(value, 42);

    let report = supervisor.last_report().unwrap();
    assert_eq!(report.state, LoopState::Stopped);
    assert!(buffer.contents().ends_with(&format!("    {}", BACKSPACE.repeat(4))));
}

#[test]
fn test_run_draws_several_frames() {
    let (supervisor, _buffer) = buffered_supervisor(5);
    supervisor.run(|| thread::sleep(Duration::from_millis(50)));
    assert!(supervisor.last_report().unwrap().frames_drawn >= 2);
}

#[test]
fn test_fast_work_still_draws_once() {
    let (supervisor, buffer) = buffered_supervisor(3);
    supervisor.run(|| ());
    assert_eq!(supervisor.last_report().unwrap().frames_drawn, 1);
    assert!(!buffer.is_empty());
}

#[test]
fn test_work_error_passes_through_after_stop() {
    let (supervisor, buffer) = buffered_supervisor(3);
    let result: Result<(), String> = supervisor.run(|| {
        thread::sleep(Duration::from_millis(20));
        Err("E".to_string())
    });
    assert_eq!(result, Err("E".to_string()));
    assert_eq!(supervisor.last_report().unwrap().state, LoopState::Stopped);
    assert!(buffer.contents().ends_with(&format!("   {}", BACKSPACE.repeat(3))));
}

#[test]
fn test_panic_resumes_after_stop() {
    let (supervisor, buffer) = buffered_supervisor(3);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        supervisor.run(|| -> () { panic!("work exploded") })
    }));

    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"work exploded"));
    assert_eq!(supervisor.last_report().unwrap().state, LoopState::Stopped);
    assert!(buffer.contents().ends_with(&format!("   {}", BACKSPACE.repeat(3))));
}

#[test]
fn test_runs_restart_from_first_frame() {
    let (supervisor, buffer) = buffered_supervisor(3);
    let back = BACKSPACE.repeat(3);

    supervisor.run(|| thread::sleep(Duration::from_millis(40)));
    buffer.clear();
    supervisor.run(|| ());

    assert!(buffer.contents().starts_with(&format!("   {back}")));
}

#[test]
fn test_disabled_supervisor_draws_nothing() {
    let buffer = SharedBuffer::new();
    let config = AnimateConfig::new()
        .with_output(Output::Buffer(buffer.clone()))
        .with_enabled(false);
    let supervisor = Supervisor::with_default_animation(config).unwrap();

    assert_eq!(supervisor.run(|| "done"), "done");
    assert!(buffer.is_empty());
    assert!(supervisor.last_report().is_none());
}

#[test]
fn test_zero_step_is_rejected() {
    let animation = Animation::instantiate(animations::spinner()).unwrap();
    let config = AnimateConfig::new().with_step(Duration::ZERO);
    assert!(Supervisor::new(animation, config).is_err());
}

struct BrokenTerminal;

impl Write for BrokenTerminal {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("terminal closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_render_failure_does_not_replace_work_value() {
    let factory: WriterFactory = Arc::new(|| Box::new(BrokenTerminal));
    let config = AnimateConfig::new()
        .with_step_millis(5)
        .with_output(Output::Custom(factory));
    let supervisor = Supervisor::with_default_animation(config).unwrap();

    let value = supervisor.run(|| {
        thread::sleep(Duration::from_millis(20));
        "finished"
    });

    assert_eq!(value, "finished");
    assert!(supervisor.last_report().is_none());
}

#[test]
fn test_run_async_returns_work_value() {
    let rt = runtime();
    rt.block_on(async {
        let (supervisor, buffer) = buffered_supervisor(4);
        let value = supervisor
            .run_async(|| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                "async done"
            })
            .await;

        assert_eq!(value, "async done");
        let report = supervisor.last_report().unwrap();
        assert_eq!(report.state, LoopState::Stopped);
        assert!(report.frames_drawn >= 2);
        assert!(buffer.contents().ends_with(&format!("    {}", BACKSPACE.repeat(4))));
    });
}

#[test]
fn test_run_async_error_passes_through() {
    let rt = runtime();
    rt.block_on(async {
        let (supervisor, _buffer) = buffered_supervisor(3);
        let result: Result<u8, String> = supervisor
            .run_async(|| async { Err("E".to_string()) })
            .await;
        assert_eq!(result, Err("E".to_string()));
        assert_eq!(supervisor.last_report().unwrap().state, LoopState::Stopped);
    });
}

#[test]
fn test_run_async_panic_resumes_after_stop() {
    let rt = runtime();
    let (supervisor, buffer) = buffered_supervisor(3);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        rt.block_on(async {
            supervisor
                .run_async(|| async {
                    tokio::time::sleep(Duration::from_millis(15)).await;
                    panic!("async work exploded");
                })
                .await
        })
    }));

    assert!(result.is_err());
    assert_eq!(supervisor.last_report().unwrap().state, LoopState::Stopped);
    assert!(buffer.contents().ends_with(&format!("   {}", BACKSPACE.repeat(3))));
}

#[test]
fn test_run_async_panic_while_building_future_still_cleans_up() {
    let rt = runtime();
    let (supervisor, buffer) = buffered_supervisor(3);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        rt.block_on(async {
            supervisor
                .run_async(|| -> std::future::Ready<()> { panic!("no future") })
                .await
        })
    }));

    assert!(result.is_err());
    let report = supervisor.last_report().expect("loop finished before the panic resumed");
    assert_eq!(report.state, LoopState::Stopped);
    assert!(buffer.contents().ends_with(&format!("   {}", BACKSPACE.repeat(3))));
}

#[test]
fn test_nested_run_does_not_start_second_loop() {
    let (supervisor, _buffer) = buffered_supervisor(3);
    let supervisor = Arc::new(supervisor);
    let (tx, rx) = std::sync::mpsc::channel();

    let outer = Arc::clone(&supervisor);
    thread::spawn(move || {
        let value = outer.run(|| {
            thread::sleep(Duration::from_millis(20));
            outer.run(|| 7) * 2
        });
        tx.send(value).ok();
    });

    assert_eq!(rx.recv_timeout(Duration::from_secs(3)), Ok(14));
    assert_eq!(supervisor.last_report().unwrap().state, LoopState::Stopped);
}

#[test]
fn test_run_after_nested_run_animates_again() {
    let (supervisor, buffer) = buffered_supervisor(3);
    supervisor.run(|| supervisor.run(|| ()));
    buffer.clear();

    supervisor.run(|| thread::sleep(Duration::from_millis(20)));

    assert!(supervisor.last_report().unwrap().frames_drawn >= 1);
    assert!(!buffer.is_empty());
}
