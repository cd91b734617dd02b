//! Clock-style formatting of whole seconds.

/// Splits total seconds into whole minutes and remaining seconds.
pub fn split(total_secs: u64) -> (u64, u64) {
    (total_secs / 60, total_secs % 60)
}

/// Formats total seconds as `MM:SS`.
///
/// Both parts are zero-padded to two digits. Minutes are not capped, so long
/// durations simply grow wider.
///
/// ```rust
/// use xotools_widgets::timefmt::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(600), "10:00");
/// assert_eq!(format_time(6_000), "100:00");
/// ```
pub fn format_time(total_secs: u64) -> String {
    let (mins, secs) = split(total_secs);
    format!("{:02}:{:02}", mins, secs)
}

/// Returns the four digits shown by a flip clock for `MM:SS`: minute tens,
/// minute ones, second tens, second ones. Only the last two minute digits
/// fit on the clock.
pub fn digits(total_secs: u64) -> [u8; 4] {
    let (mins, secs) = split(total_secs);
    let mins = mins % 100;
    [
        (mins / 10) as u8,
        (mins % 10) as u8,
        (secs / 10) as u8,
        (secs % 10) as u8,
    ]
}
