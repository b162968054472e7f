//! Statistic counter animation
//!
//! Counts from zero to a target over a fixed wall-clock duration using
//! fixed-interval ticks. The timer itself lives in the UI layer; this type
//! only tracks the running value.

/// Progress of one counter
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Prepare a count-up reaching `target` after `duration_ms` of `tick_ms` ticks.
    ///
    /// A zero target is finished immediately and needs no timer.
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
            finished: target == 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Value currently on screen (the running value, floored)
    pub fn value(&self) -> u64 {
        self.current.floor() as u64
    }

    /// Advance one tick. Returns `true` once the target is reached.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return true;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
        }
        self.finished
    }

    pub fn display(&self) -> String {
        format_count(self.value(), self.target)
    }
}

/// Render `value` the way a counter with `target` shows it:
/// grouped by thousands when the target is at least 1000.
pub fn format_count(value: u64, target: u64) -> String {
    if target >= 1000 {
        group_thousands(value)
    } else {
        value.to_string()
    }
}

/// `12000` -> `"12,000"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
