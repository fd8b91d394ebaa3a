//! Clock-face formatting for remaining time.

pub const APP_TITLE: &str = "Pomodoro Timer";

/// Format seconds as `MM:SS`, zero-padded. Minutes grow past two digits
/// for intervals of 100 minutes or more.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Window/terminal title. `counting` is set once the countdown has ticked
/// and stays set through pauses until a reset or an expiry.
pub fn title(secs: u64, counting: bool) -> String {
    if counting {
        format!("({}) - {APP_TITLE}", format_clock(secs))
    } else {
        APP_TITLE.to_string()
    }
}
