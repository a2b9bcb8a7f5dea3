use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);
