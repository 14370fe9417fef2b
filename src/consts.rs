/// Days in one fiscal week
pub const DAYS_IN_WEEK: i64 = 7;

/// Offset from the last day of a week back to its first day
pub const WEEK_SPAN_DAYS: i64 = DAYS_IN_WEEK - 1;

/// Smallest fiscal week number
pub const MIN_FISCAL_WEEK: u8 = 1;
/// Largest fiscal week number (53-week years)
pub const MAX_FISCAL_WEEK: u8 = 53;

/// Weeks in a regular fiscal year
pub const WEEKS_IN_SHORT_YEAR: u8 = 52;

/// Multiplier packing a fiscal year and week into one identifier
pub const WEEK_ID_MULTIPLIER: i32 = 100;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month, used for anchors
pub const MIN_DAY: u32 = 1;

/// Fiscal months in a quarter
pub const MONTHS_PER_QUARTER: u8 = 3;
/// Fiscal weeks in a quarter
pub const WEEKS_PER_QUARTER: u8 = 13;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Range separator (`start/end`)
pub const RANGE_SEPARATOR: char = '/';

/// Holiday years loaded when a converter gets no explicit dataset
pub const DEFAULT_HOLIDAY_YEARS: [i32; 3] = [2022, 2023, 2024];
