use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriveError {
    /// A drive record is unusable: `quarter` and `teamId` are the only
    /// required wire fields, everything else degrades to a default.
    #[error("invalid drive record (drive {drive_num}): missing {field}")]
    InvalidDriveRecord {
        field: &'static str,
        drive_num: String,
    },

    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DriveError>;
