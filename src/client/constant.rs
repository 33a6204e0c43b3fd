pub const SITE_NAME: &str = "DashFinance";

/// Currency code shown next to amounts.
pub const CURRENCY: &str = "IDR";

pub const DEFAULT_PAGE_SIZE: u64 = 10;
