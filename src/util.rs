// Small shared helpers: clock formatting and console logging.

/// Formats remaining milliseconds as `mm:ss`. Negative input shows `00:00`.
pub fn format_clock(ms: f64) -> String {
    let ms = if ms.is_finite() { ms.max(0.0) } else { 0.0 };
    let total_secs = (ms / 1000.0).floor() as u64;
    let m = total_secs / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}", m, s)
}

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}
