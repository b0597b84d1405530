use std::time::Duration;

/// A confirmation node debounces a boolean signal: the output only follows the input
/// to the monitored polarity after the input has held that polarity continuously for
/// the configured delay. Any reversal snaps the output immediately and restarts the
/// timer.
pub struct ConfirmationNode {
    leading: bool,
    delay: Duration,
    elapsed: Duration,
    output: bool,
}

impl ConfirmationNode {
    /// Creates a node that delays the rising edge of the signal.
    pub fn new_leading(delay: Duration) -> Self {
        Self {
            leading: true,
            delay,
            elapsed: Duration::ZERO,
            output: false,
        }
    }

    /// Creates a node that delays the falling edge of the signal.
    pub fn new_falling(delay: Duration) -> Self {
        Self {
            leading: false,
            delay,
            elapsed: Duration::ZERO,
            output: true,
        }
    }

    pub fn update(&mut self, signal: bool, delta: Duration) -> bool {
        if signal == self.leading {
            self.elapsed += delta;
            if self.elapsed >= self.delay {
                self.output = signal;
            }
        } else {
            self.elapsed = Duration::ZERO;
            self.output = signal;
        }
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.output = !self.leading;
    }
}

/// A pulse node emits a single-tick pulse when the input transitions in the monitored
/// direction. The previous sample is seeded from the first input, so no pulse is
/// emitted on the very first update regardless of the input's value.
pub struct PulseNode {
    leading: bool,
    previous: Option<bool>,
}

impl PulseNode {
    pub fn new_leading() -> Self {
        Self {
            leading: true,
            previous: None,
        }
    }

    pub fn new_falling() -> Self {
        Self {
            leading: false,
            previous: None,
        }
    }

    pub fn update(&mut self, signal: bool) -> bool {
        let output = match self.previous {
            Some(previous) => {
                if self.leading {
                    signal && !previous
                } else {
                    !signal && previous
                }
            }
            None => false,
        };
        self.previous = Some(signal);
        output
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}

/// A memory node is a set/reset flip-flop. The precedence determines which input wins
/// when both are raised in the same tick.
pub struct MemoryNode {
    set_precedence: bool,
    output: bool,
}

impl MemoryNode {
    pub fn new(set_precedence: bool) -> Self {
        Self {
            set_precedence,
            output: false,
        }
    }

    pub fn update(&mut self, set: bool, reset: bool) -> bool {
        self.output = if self.set_precedence {
            set || (self.output && !reset)
        } else {
            (set || self.output) && !reset
        };
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }

    pub fn reset(&mut self) {
        self.output = false;
    }
}

/// A hysteresis node latches true once the input reaches the upper threshold and
/// releases only when the input falls to or below the lower threshold.
pub struct HysteresisNode<T> {
    low: T,
    high: T,
    output: bool,
}

impl<T: PartialOrd + Copy> HysteresisNode<T> {
    pub fn new(low: T, high: T) -> Self {
        if high <= low {
            panic!("The upper threshold must be strictly above the lower threshold.");
        }
        Self {
            low,
            high,
            output: false,
        }
    }

    pub fn update(&mut self, value: T) -> bool {
        self.output = value >= self.high || (self.output && value > self.low);
        self.output
    }

    pub fn output(&self) -> bool {
        self.output
    }

    pub fn reset(&mut self) {
        self.output = false;
    }
}
