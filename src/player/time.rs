//! Playback time formatting.
//!
//! Times are shown as `M:SS`. The arithmetic deliberately mirrors what the
//! widget has always displayed, quirks included: minutes above one minute
//! come from rounding `seconds / 60` rather than dividing the rounded
//! seconds, so e.g. `90` renders as `2:30`.

/// Text shown in the time node while the duration is unknown.
pub const DEFAULT_LOADING_TEXT: &str = "loading...";

/// Round to the nearest integer, ties toward positive infinity.
///
/// `round_half_up(2.5) == 3.0` and `round_half_up(-2.5) == -2.0`.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Last two characters of `"0" + n`.
fn two_digits(n: f64) -> String {
    let padded = format!("0{}", n);
    let start = padded
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    padded[start..].to_string()
}

/// Format a position in seconds as `M:SS`.
///
/// Non-finite and negative inputs render as `0:00`.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let trimmed = round_half_up(seconds);

    if trimmed < 60.0 {
        return format!("0:{}", two_digits(trimmed));
    }

    if trimmed % 60.0 == 0.0 {
        return format!("{}:00", trimmed / 60.0);
    }

    format!(
        "{}:{}",
        round_half_up(seconds / 60.0),
        two_digits(round_half_up(seconds % 60.0))
    )
}

/// Whether a reported duration can be displayed.
///
/// Zero, NaN, and infinite durations (live streams, nothing loaded yet)
/// all count as unknown.
pub fn is_known_duration(duration: Option<f64>) -> bool {
    matches!(duration, Some(d) if d.is_finite() && d != 0.0)
}

/// Build the time node text: `"<current> of <duration>"`, or the loading
/// text while the duration is unknown.
pub fn format_time_display(current: f64, duration: Option<f64>, loading_text: &str) -> String {
    match duration {
        Some(total) if is_known_duration(duration) => {
            format!("{} of {}", format_seconds(current), format_seconds(total))
        }
        _ => loading_text.to_string(),
    }
}
