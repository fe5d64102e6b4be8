use chrono::{DateTime, Local, TimeZone};

pub struct TimeUtils;

impl TimeUtils {
    /// e.g. "19-Oct-2026 03:04 PM"
    pub const REPORT_TIME_FORMAT: &str = "%d-%b-%Y %I:%M %p";

    pub fn format_report_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        datetime.format(Self::REPORT_TIME_FORMAT).to_string()
    }
}

pub fn local_now() -> DateTime<Local> {
    Local::now()
}

pub fn report_timestamp_now() -> String {
    TimeUtils::format_report_time(&local_now())
}
