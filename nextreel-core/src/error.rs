use thiserror::Error;

/// Failures the auto-queue pipeline can run into.
///
/// None of these are fatal to the process: the event handler absorbs every
/// variant into a log line and drops the triggering signal.
#[derive(Error, Debug)]
pub enum AutoQueueError {
    #[error("Library lookup failed: {0}")]
    Library(String),

    #[error("User data access failed: {0}")]
    UserData(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AutoQueueError>;
