// In-app GUI logger: keeps a bounded ring of records for the logs viewport,
// persists warn+ lines to folio.log, and installs a panic hook so crashes
// leave a trace even in windowed release builds.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_LINES: usize = 5000;
const LOG_FILE_NAME: &str = "folio.log";

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub msg: String,
}

lazy_static! {
    static ref RING: Mutex<VecDeque<LogEntry>> = Mutex::new(VecDeque::new());
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
    static ref MIRROR_STDERR: bool = {
        // Mirrored by default; FOLIO_LOG_STDERR=0 silences the console.
        let v = std::env::var("FOLIO_LOG_STDERR").unwrap_or_else(|_| "1".to_string());
        !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
    };
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

struct RingLogger;

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::max_level()
            .to_level()
            .map_or(false, |max| metadata.level() <= max)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: timestamp_millis(),
            level: record.level(),
            target: record.target().to_string(),
            msg: format!("{}", record.args()),
        };
        let line = format_line(&entry);

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }

        // Only warn and above go to the file; info noise stays in the ring.
        if matches!(record.level(), Level::Warn | Level::Error) {
            write_file_line(&line);
        }

        push_entry(entry);
    }

    fn flush(&self) {
        if let Ok(mut file) = LOG_FILE.lock() {
            if let Some(f) = file.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn push_entry(entry: LogEntry) {
    if let Ok(mut ring) = RING.lock() {
        ring.push_back(entry);
        if ring.len() > MAX_LOG_LINES {
            ring.pop_front();
        }
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?.to_lowercase();
    for (needle, level) in [
        ("trace", LevelFilter::Trace),
        ("debug", LevelFilter::Debug),
        ("info", LevelFilter::Info),
        ("warn", LevelFilter::Warn),
        ("error", LevelFilter::Error),
        ("off", LevelFilter::Off),
    ] {
        if val.contains(needle) {
            return Some(level);
        }
    }
    None
}

/// Install the logger, open folio.log for appending, install the panic hook.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(RingLogger));
    let level = level_from_env().unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE_NAME)
            .ok();
        if let Ok(mut lf) = LOG_FILE.lock() {
            *lf = file;
        }
    }

    install_panic_hook();

    log::info!("logger initialized at level {level} (warn+ persisted to {LOG_FILE_NAME})");
}

pub fn for_each_range<F: FnMut(&LogEntry)>(start: usize, end: usize, mut f: F) {
    if let Ok(ring) = RING.lock() {
        let len = ring.len();
        for idx in start.min(len)..end.min(len) {
            if let Some(entry) = ring.get(idx) {
                f(entry);
            }
        }
    }
}

pub fn all_lines() -> Vec<String> {
    if let Ok(ring) = RING.lock() {
        ring.iter().map(format_line).collect()
    } else {
        vec![]
    }
}

pub fn len() -> usize {
    RING.lock().map(|ring| ring.len()).unwrap_or(0)
}

pub fn clear() {
    if let Ok(mut ring) = RING.lock() {
        ring.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Returns true if new records arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn format_line(e: &LogEntry) -> String {
    format!("[{}] [{:>5}] {}: {}", e.timestamp, e.level, e.target, e.msg)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut file) = LOG_FILE.lock() {
        if let Some(f) = file.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let bt = Backtrace::force_capture();
        write_file_line(&format!(
            "[{}] [ERROR] panic at {loc}: {msg}",
            timestamp_millis()
        ));
        for line in format!("{bt:?}").lines() {
            write_file_line(line);
        }

        log::error!("panic at {loc}: {msg}");
    }));
}
