pub mod drive;

pub use drive::{parse_drives, Drive, EndEventKind, Quarter};
