//! File Loader Module
//!
//! Reads the initial text in a background thread so the UI can start drawing
//! while a large file or a slow pipe is still being read.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use crate::error::MojicountError;

/// Represents the current state of input loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Loading,
    Complete(String),
    Error(MojicountError),
}

/// Manages asynchronous input loading in a background thread
pub struct FileLoader {
    pub state: LoadingState,
    pub rx: Option<Receiver<Result<String, MojicountError>>>,
}

impl FileLoader {
    /// Spawn a background thread that reads `path`
    pub fn spawn_load(path: PathBuf) -> Self {
        Self::spawn(move || read_file(&path))
    }

    /// Spawn a background thread that reads stdin to the end
    pub fn spawn_load_stdin() -> Self {
        Self::spawn(read_stdin)
    }

    fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<String, MojicountError> + Send + 'static,
    {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let _ = tx.send(load());
        });

        Self {
            state: LoadingState::Loading,
            rx: Some(rx),
        }
    }

    /// Poll for loading completion (non-blocking)
    ///
    /// Returns None while still loading, and the result exactly once when done.
    pub fn poll(&mut self) -> Option<Result<String, MojicountError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                self.state = match &result {
                    Ok(text) => LoadingState::Complete(text.clone()),
                    Err(e) => LoadingState::Error(e.clone()),
                };
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                let err = MojicountError::LoaderDisconnected;
                self.state = LoadingState::Error(err.clone());
                Some(Err(err))
            }
        }
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadingState::Loading)
    }
}

/// Read a file as text, replacing malformed UTF-8 with U+FFFD
pub fn read_file(path: &Path) -> Result<String, MojicountError> {
    let bytes = std::fs::read(path)?;
    Ok(decode_lossy(bytes))
}

/// Read stdin to the end as text, replacing malformed UTF-8 with U+FFFD
pub fn read_stdin() -> Result<String, MojicountError> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::debug!("Input is not valid UTF-8: {}", e.utf8_error());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
