use thiserror::Error;

/// Errors raised while assigning white dwarf kinematics.
#[derive(Error, Debug)]
pub enum KinematicsError {
    /// A compacted record carries a disk label outside {1 = thin, 2 = thick}.
    ///
    /// This points at a broken upstream classification and the batch is
    /// abandoned; there is no default dispersion to fall back on.
    #[error("white dwarf {index} of {total} has unexpected disk membership {value}")]
    UnknownDiskMembership {
        index: usize,
        total: usize,
        value: i32,
    },

    /// Invalid configuration values or unparsable configuration text.
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

pub type KinematicsResult<T> = Result<T, KinematicsError>;
