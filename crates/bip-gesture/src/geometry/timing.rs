//! Transition timing lookup from computed styles

use serde::{Deserialize, Serialize};

/// Delay and duration of one transition channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Timing {
    /// Create a timing pair
    #[inline]
    pub const fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self { delay_ms, duration_ms }
    }

    /// Delay plus duration
    #[inline]
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Per-field fallback: keep own values when nonzero, otherwise use `other`'s
    pub fn or(self, other: Timing) -> Timing {
        Timing {
            delay_ms: if self.delay_ms != 0.0 { self.delay_ms } else { other.delay_ms },
            duration_ms: if self.duration_ms != 0.0 { self.duration_ms } else { other.duration_ms },
        }
    }
}

/// Computed `transition`, `transition-delay` and `transition-duration` values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionLists {
    /// `transition` shorthand, e.g. `transform 0.3s ease 0s, opacity 0.2s ease 0.1s`
    pub shorthand: String,
    /// `transition-delay` list, e.g. `0s, 0.1s`
    pub delays: String,
    /// `transition-duration` list, e.g. `0.3s, 0.2s`
    pub durations: String,
}

impl TransitionLists {
    /// Lists as computed for `transition: none`
    pub fn none() -> Self {
        Self {
            shorthand: "none 0s ease 0s".to_string(),
            delays: "0s".to_string(),
            durations: "0s".to_string(),
        }
    }

    /// Build lists from `(property, delay_ms, duration_ms)` entries
    pub fn from_entries(entries: &[(&str, f64, f64)]) -> Self {
        if entries.is_empty() {
            return Self::none();
        }

        let shorthand = entries
            .iter()
            .map(|(property, delay, duration)| format!("{} {}ms ease {}ms", property, duration, delay))
            .collect::<Vec<_>>()
            .join(", ");
        let delays = entries
            .iter()
            .map(|(_, delay, _)| format!("{}ms", delay))
            .collect::<Vec<_>>()
            .join(", ");
        let durations = entries
            .iter()
            .map(|(_, _, duration)| format!("{}ms", duration))
            .collect::<Vec<_>>()
            .join(", ");

        Self { shorthand, delays, durations }
    }

    /// Timing of the entry animating `channel`; 0 when nothing matches.
    ///
    /// The last matching entry wins, as in CSS. Delay and duration lists
    /// shorter than the property list repeat.
    pub fn timing_for(&self, channel: &str) -> Timing {
        let delays = split_list(&self.delays);
        let durations = split_list(&self.durations);

        let mut timing = Timing::default();
        for (i, entry) in split_list(&self.shorthand).iter().enumerate() {
            let property = entry.split_whitespace().next().unwrap_or_default();
            if property == channel || property == "all" {
                timing = Timing::new(nth_time(&delays, i), nth_time(&durations, i));
            }
        }
        timing
    }
}

/// Parse a CSS time value (`0.3s`, `150ms`) into milliseconds
pub fn parse_time_ms(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(ms) = value.strip_suffix("ms") {
        ms.trim().parse().ok()
    } else if let Some(s) = value.strip_suffix('s') {
        s.trim().parse::<f64>().ok().map(|s| s * 1000.0)
    } else {
        None
    }
}

fn nth_time(list: &[&str], index: usize) -> f64 {
    if list.is_empty() {
        return 0.0;
    }
    parse_time_ms(list[index % list.len()]).unwrap_or(0.0)
}

/// Split a comma separated list, ignoring commas nested in parentheses
fn split_list(value: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = value[start..].trim();
    if !last.is_empty() {
        items.push(last);
    }
    items
}
