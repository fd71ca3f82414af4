use thiserror::Error;

#[derive(Error, Debug)]
pub enum CljdexError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("read error: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, CljdexError>;
