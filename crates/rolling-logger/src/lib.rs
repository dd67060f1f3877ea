//! Rolling Logger
//!
//! File logger for the desktop backend:
//! - writes `tracing` events (and bridged `log` records) to `<dir>/<app>.log`
//! - rolls the file once it grows past a size limit, keeping a fixed number of old files
//! - keeps the most recent lines in memory for in-app diagnostics

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Default size at which the active log file is rolled
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Default number of rolled files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;
/// Default number of lines kept in the in-memory buffer
pub const DEFAULT_BUFFER_LINES: usize = 500;

static LOGGER: OnceLock<SharedFile> = OnceLock::new();

type SharedFile = Arc<Mutex<RollingFile>>;

/// Size-rolled log file with a circular buffer of recent lines
pub struct RollingFile {
    dir: PathBuf,
    base_name: String,
    max_bytes: u64,
    max_files: usize,
    file: Option<File>,
    written: u64,
    recent: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl RollingFile {
    pub fn open(dir: impl AsRef<Path>, app_name: &str) -> io::Result<Self> {
        Self::with_limits(dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES, DEFAULT_BUFFER_LINES)
    }

    pub fn with_limits(
        dir: impl AsRef<Path>,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
        capacity: usize,
    ) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let mut rolling = Self {
            dir,
            base_name: app_name.to_string(),
            max_bytes,
            max_files,
            file: None,
            written: 0,
            recent: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        };
        rolling.reopen()?;
        Ok(rolling)
    }

    /// Path of the active log file
    pub fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.base_name))
    }

    fn rolled_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.base_name, index))
    }

    fn reopen(&mut self) -> io::Result<()> {
        let path = self.active_path();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
        self.file = Some(file);
        Ok(())
    }

    /// Shift `<app>.log.N` up by one, dropping the oldest, then start a fresh active file
    fn roll(&mut self) -> io::Result<()> {
        self.file = None;
        if self.max_files == 0 {
            fs::remove_file(self.active_path()).or_else(ignore_missing)?;
            return self.reopen();
        }
        fs::remove_file(self.rolled_path(self.max_files)).or_else(ignore_missing)?;
        for index in (1..self.max_files).rev() {
            let from = self.rolled_path(index);
            if from.exists() {
                fs::rename(&from, self.rolled_path(index + 1))?;
            }
        }
        fs::rename(self.active_path(), self.rolled_path(1)).or_else(ignore_missing)?;
        self.reopen()
    }

    fn remember(&mut self, bytes: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(bytes));
        while let Some(newline) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=newline).collect();
            if self.capacity == 0 {
                continue;
            }
            if self.recent.len() == self.capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end().to_string());
        }
    }

    /// Most recent lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.recent.iter().cloned().collect()
    }
}

fn ignore_missing(err: io::Error) -> io::Result<()> {
    if err.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(err)
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.roll()?;
        }
        if self.file.is_none() {
            self.reopen()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// `MakeWriter` handing out guards onto the shared rolling file
#[derive(Clone)]
pub struct RollingWriter {
    inner: SharedFile,
}

pub struct RollingWriterGuard<'a> {
    inner: &'a SharedFile,
}

impl Write for RollingWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriterGuard { inner: &self.inner }
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the rolling file as the global `tracing` subscriber
///
/// `log` records are bridged into the same subscriber, so crates using either facade
/// end up in `<log_dir>/<app_name>.log`.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let rolling = RollingFile::open(&log_dir, app_name)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;
    let shared: SharedFile = Arc::new(Mutex::new(rolling));

    tracing_subscriber::fmt()
        .with_writer(RollingWriter { inner: shared.clone() })
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    LOGGER
        .set(shared)
        .map_err(|_| "Logger already initialized".to_string())?;
    log::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    if LOGGER.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Recent log lines from the circular buffer (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|shared| shared.lock().ok().map(|file| file.recent_lines()))
        .unwrap_or_default()
}
