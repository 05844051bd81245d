/// Display units indexed by rank (power of 1024).
pub const UNIT_LABELS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub const UNIT_BASE: u64 = 1024;
pub const MAX_RANK: u32 = 4;

pub const PERCENT_DECIMALS: usize = 3;
