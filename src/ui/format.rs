/// Format whole seconds as `M:SS` (minutes unpadded).
///
/// Used for the elapsed/total clock under the progress bar.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format whole seconds as `MM:SS`, as shown next to each list entry.
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
