// Session Log
// Tees monitor output to standard output and a timestamped log file

use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only session log mirrored to standard output.
///
/// Every line carries a `[YYYY-mm-dd HH:MM:SS]` prefix; the file name
/// records the session start time.
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Create a log file named after the session start time, inside `dir`.
    pub fn create_in<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let name = format!(
            "installation-monitor-{}.log",
            Local::now().format("%Y%m%d-%H%M%S")
        );
        let path = dir.as_ref().join(name);

        // Touch the file so an unwritable location fails before polling starts
        OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one timestamped line to both standard output and the log file.
    pub fn log(&self, message: &str) -> io::Result<()> {
        let line = format!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);
        println!("{}", line);

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)
    }
}
