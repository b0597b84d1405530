use std::time::Duration;

/// A first-order low-pass filter with time constant 1 / `c`, discretized with the
/// bilinear transform. The state is seeded from the first input so the filter starts
/// settled instead of ramping up from zero.
pub struct LagFilter {
    c: f64,
    previous_input: Option<f64>,
    previous_output: f64,
}

impl LagFilter {
    pub fn new(c: f64) -> Self {
        Self {
            c,
            previous_input: None,
            previous_output: 0.,
        }
    }

    pub fn update(&mut self, input: f64, delta: Duration) -> f64 {
        let output = match self.previous_input {
            Some(previous_input) => {
                let dt = delta.as_secs_f64();
                let ca = dt * self.c / (dt * self.c + 2.);
                (2. - dt * self.c) / (dt * self.c + 2.) * self.previous_output
                    + ca * (input + previous_input)
            }
            None => input,
        };
        self.previous_input = Some(input);
        self.previous_output = output;
        output
    }

    pub fn output(&self) -> f64 {
        self.previous_output
    }

    pub fn reset(&mut self) {
        self.previous_input = None;
        self.previous_output = 0.;
    }
}

/// A first-order high-pass filter with time constant 1 / `c`, the complement of
/// [`LagFilter`]. Seeded from the first input, so it starts settled at zero.
pub struct WashoutFilter {
    c: f64,
    previous_input: Option<f64>,
    previous_output: f64,
}

impl WashoutFilter {
    pub fn new(c: f64) -> Self {
        Self {
            c,
            previous_input: None,
            previous_output: 0.,
        }
    }

    pub fn update(&mut self, input: f64, delta: Duration) -> f64 {
        let output = match self.previous_input {
            Some(previous_input) => {
                let dt = delta.as_secs_f64();
                2. / (dt * self.c + 2.) * (input - previous_input)
                    + (2. - dt * self.c) / (dt * self.c + 2.) * self.previous_output
            }
            None => 0.,
        };
        self.previous_input = Some(input);
        self.previous_output = output;
        output
    }

    pub fn output(&self) -> f64 {
        self.previous_output
    }

    pub fn reset(&mut self) {
        self.previous_input = None;
        self.previous_output = 0.;
    }
}

/// A general first-order lead-lag filter (n1 s + n0) / (d1 s + d0), discretized with
/// the bilinear transform. Seeded from the first input at its steady-state gain.
pub struct LeadLagFilter {
    n0: f64,
    n1: f64,
    d0: f64,
    d1: f64,
    previous_input: Option<f64>,
    previous_output: f64,
}

impl LeadLagFilter {
    pub fn new(n0: f64, n1: f64, d0: f64, d1: f64) -> Self {
        debug_assert!(d0 != 0.);
        Self {
            n0,
            n1,
            d0,
            d1,
            previous_input: None,
            previous_output: 0.,
        }
    }

    pub fn update(&mut self, input: f64, delta: Duration) -> f64 {
        let output = match self.previous_input {
            Some(previous_input) => {
                let dt = delta.as_secs_f64();
                let denominator = 2. * self.d1 + dt * self.d0;
                ((2. * self.n1 + dt * self.n0) * input
                    + (dt * self.n0 - 2. * self.n1) * previous_input
                    + (2. * self.d1 - dt * self.d0) * self.previous_output)
                    / denominator
            }
            None => self.n0 / self.d0 * input,
        };
        self.previous_input = Some(input);
        self.previous_output = output;
        output
    }

    pub fn output(&self) -> f64 {
        self.previous_output
    }

    pub fn reset(&mut self) {
        self.previous_input = None;
        self.previous_output = 0.;
    }
}

/// Limits the slew rate of a signal to the configured rates, expressed in units per
/// second. The state is seeded with an initial value at construction.
pub struct RateLimiter {
    rate_up: f64,
    rate_down: f64,
    init: f64,
    output: f64,
}

impl RateLimiter {
    pub fn new(rate_up: f64, rate_down: f64, init: f64) -> Self {
        debug_assert!(rate_up > 0. && rate_down < 0.);
        Self {
            rate_up,
            rate_down,
            init,
            output: init,
        }
    }

    pub fn update(&mut self, input: f64, delta: Duration) -> f64 {
        let dt = delta.as_secs_f64();
        self.output += (input - self.output).clamp(self.rate_down * dt, self.rate_up * dt);
        self.output
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn reset(&mut self) {
        self.output = self.init;
    }
}

/// A rate limiter whose state is seeded from the first input sample, so a threshold
/// that is already settled when the computer starts does not ramp up from zero.
pub struct SeededRateLimiter {
    rate_up: f64,
    rate_down: f64,
    output: Option<f64>,
}

impl SeededRateLimiter {
    pub fn new(rate_up: f64, rate_down: f64) -> Self {
        debug_assert!(rate_up > 0. && rate_down < 0.);
        Self {
            rate_up,
            rate_down,
            output: None,
        }
    }

    pub fn update(&mut self, input: f64, delta: Duration) -> f64 {
        let output = match self.output {
            Some(previous) => {
                let dt = delta.as_secs_f64();
                previous + (input - previous).clamp(self.rate_down * dt, self.rate_up * dt)
            }
            None => input,
        };
        self.output = Some(output);
        output
    }

    pub fn output(&self) -> f64 {
        self.output.unwrap_or_default()
    }

    pub fn reset(&mut self) {
        self.output = None;
    }
}

/// A rate limiter whose state tracks an external reference while the reset input is
/// raised. Used where the limited command has to take over smoothly from a measured
/// position, for instance when a servo loop engages.
pub struct ResettableRateLimiter {
    rate_up: f64,
    rate_down: f64,
    output: f64,
}

impl ResettableRateLimiter {
    pub fn new(rate_up: f64, rate_down: f64) -> Self {
        debug_assert!(rate_up > 0. && rate_down < 0.);
        Self {
            rate_up,
            rate_down,
            output: 0.,
        }
    }

    pub fn update(&mut self, input: f64, delta: Duration, reset: bool, reset_value: f64) -> f64 {
        if reset {
            self.output = reset_value;
        } else {
            let dt = delta.as_secs_f64();
            self.output += (input - self.output).clamp(self.rate_down * dt, self.rate_up * dt);
        }
        self.output
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn reset(&mut self) {
        self.output = 0.;
    }
}

/// Returns the median of three values without sorting.
pub fn median_of_three(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).max(a.max(b).min(c))
}
