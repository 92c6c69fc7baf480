use crate::invariants::{RequestPath, UserAgent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub path: RequestPath,
    pub timestamp: String,
    pub user_agent: UserAgent,
    pub status: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageStats {
    pub total_images: usize,
    pub total_bytes: u128,
    pub average_bytes: f64,
}
