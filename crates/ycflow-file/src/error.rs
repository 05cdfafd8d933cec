use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("destination file path can't be empty")]
    EmptyPath,

    #[error("destination {0} exists and is a directory")]
    DestinationIsDirectory(PathBuf),

    #[error("destination directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("destination directory {0} is not accessible")]
    DirectoryNotAccessible(PathBuf),

    #[error("destination directory {0} is not writable")]
    DirectoryNotWritable(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FileError>;
