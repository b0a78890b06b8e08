//! Misc

pub mod events;

use std::time::Duration;

/// Helper function to format a duration as `[HHh:MMm:SSs]`, hours omitted when zero.
pub fn format_duration(dur: &Duration) -> String {
    let secs = dur.as_secs();
    let (hours, mins, secs) = (secs / 3600, secs / 60 % 60, secs % 60);

    if hours > 0 {
        format!("[{hours:02}h:{mins:02}m:{secs:02}s]")
    } else {
        format!("[{mins:02}m:{secs:02}s]")
    }
}
