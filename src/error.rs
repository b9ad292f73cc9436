use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MojicountError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Input loader thread disconnected")]
    LoaderDisconnected,
}

impl From<std::io::Error> for MojicountError {
    fn from(err: std::io::Error) -> Self {
        MojicountError::Io(err.to_string())
    }
}
