//! Where animation and annotation text is written.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ConfigError;

/// Builds a fresh writer for one run.
pub type WriterFactory = Arc<dyn Fn() -> Box<dyn Write + Send> + Send + Sync>;

#[derive(Clone, Default)]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
    /// In-memory capture.
    Buffer(SharedBuffer),
    Custom(WriterFactory),
}

impl Output {
    pub fn writer(&self) -> Box<dyn Write + Send> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Stderr => Box::new(io::stderr()),
            Output::Buffer(buffer) => Box::new(buffer.clone()),
            Output::Custom(factory) => factory(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Output::Stdout => "stdout",
            Output::Stderr => "stderr",
            Output::Buffer(_) => "buffer",
            Output::Custom(_) => "custom",
        }
    }
}

impl FromStr for Output {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" => Ok(Output::Stdout),
            "stderr" => Ok(Output::Stderr),
            _ => Err(ConfigError::InvalidValue {
                key: "output".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Output({})", self.as_str())
    }
}

/// Cloneable byte buffer; all clones share the same bytes.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_buffer_clones_share_bytes() {
        let buffer = SharedBuffer::new();
        let mut writer = Output::Buffer(buffer.clone()).writer();
        writer.write_all(b"abc").unwrap();
        assert_eq!(buffer.contents(), "abc");
        assert_eq!(buffer.len(), 3);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_output_from_str() {
        assert!(matches!("stdout".parse::<Output>(), Ok(Output::Stdout)));
        assert!(matches!("STDERR".parse::<Output>(), Ok(Output::Stderr)));
        assert!(matches!(
            "tty".parse::<Output>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_custom_output_uses_factory() {
        let buffer = SharedBuffer::new();
        let target = buffer.clone();
        let factory: WriterFactory = Arc::new(move || Box::new(target.clone()));
        let output = Output::Custom(factory);
        output.writer().write_all(b"x").unwrap();
        output.writer().write_all(b"y").unwrap();
        assert_eq!(buffer.contents(), "xy");
        assert_eq!(format!("{:?}", output), "Output(custom)");
    }
}
