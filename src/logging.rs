//! Optional append-only chat log.
//!
//! Completed turns can be mirrored to a plain-text file (`-l` flag or config).
//! The log carries transcript content only; credential material never goes
//! through here.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::core::message::Turn;

pub struct LoggingState {
    file_path: Option<String>,
    is_active: bool,
}

impl LoggingState {
    pub fn new(log_file: Option<String>) -> Self {
        let is_active = log_file.is_some();
        LoggingState {
            file_path: log_file,
            is_active,
        }
    }

    pub fn set_log_file(&mut self, path: String) -> Result<String, Box<dyn std::error::Error>> {
        self.test_file_access(&path)?;
        self.file_path = Some(path.clone());
        self.is_active = true;
        Ok(format!("Logging enabled to: {}", path))
    }

    pub fn toggle_logging(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        match &self.file_path {
            Some(path) => {
                self.is_active = !self.is_active;
                if self.is_active {
                    Ok(format!("Logging resumed to: {}", path))
                } else {
                    Ok(format!("Logging paused (file: {})", path))
                }
            }
            None => Err("No log file specified. Pass -l <filename> to enable logging.".into()),
        }
    }

    /// Append one completed turn: a timestamped role header, the content, and
    /// a blank spacer line.
    pub fn log_turn(&self, turn: &Turn) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_ref().filter(|_| self.is_active) else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "[{timestamp}] {}:", turn.role.as_str())?;
        for line in turn.content.lines() {
            writeln!(file, "{}", line)?;
        }
        writeln!(file)?;
        file.flush()?;
        Ok(())
    }

    pub fn get_status_string(&self) -> String {
        match (&self.file_path, self.is_active) {
            (None, _) => "disabled".to_string(),
            (Some(path), true) => format!(
                "active ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
            (Some(path), false) => format!(
                "paused ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
        }
    }

    fn test_file_access(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn inactive_logging_writes_nothing() {
        let logging = LoggingState::new(None);
        logging.log_turn(&Turn::user("hello")).expect("no-op");
        assert_eq!(logging.get_status_string(), "disabled");
    }

    #[test]
    fn turns_are_appended_with_role_headers() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("chat.log");
        let logging = LoggingState::new(Some(path.to_string_lossy().into_owned()));

        logging.log_turn(&Turn::user("question")).expect("writes");
        logging
            .log_turn(&Turn::assistant("line one\nline two"))
            .expect("writes");

        let contents = fs::read_to_string(&path).expect("readable");
        assert!(contents.contains("] user:\nquestion\n"));
        assert!(contents.contains("] assistant:\nline one\nline two\n"));
    }

    #[test]
    fn toggling_without_a_file_is_an_error() {
        let mut logging = LoggingState::new(None);
        assert!(logging.toggle_logging().is_err());
    }

    #[test]
    fn toggling_pauses_and_resumes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("chat.log");
        let mut logging = LoggingState::new(Some(path.to_string_lossy().into_owned()));

        let paused = logging.toggle_logging().expect("pauses");
        assert!(paused.contains("paused"));
        logging.log_turn(&Turn::user("dropped")).expect("no-op");
        assert!(!path.exists());

        let resumed = logging.toggle_logging().expect("resumes");
        assert!(resumed.contains("resumed"));
    }
}
