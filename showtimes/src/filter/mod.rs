pub mod day_filter;
pub mod time_filter;
