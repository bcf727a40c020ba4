/// Milliseconds in one day, the unit the deadline countdown is computed in
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Characters of a campaign description shown before "See More"
pub const DESCRIPTION_PREVIEW_LENGTH: usize = 200;

/// Rolling window, in days, for the donor dashboard's "Last 30 Days" filter
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Number of supporters shown on the campaign detail card
pub const TOP_SUPPORTERS_LIMIT: usize = 5;

/// Decimal precision for displayed monetary values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Base URL of the HopeFundr REST backend
pub const DEFAULT_BACKEND_URL: &str = "https://hopefundr-server.vercel.app";
