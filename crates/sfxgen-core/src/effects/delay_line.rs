//! Ring buffer shared by the chorus, echo and flanger stages.

/// Fixed-capacity delay line with fractional taps.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f64>,
    write_pos: usize,
}

impl DelayLine {
    /// Creates a delay line holding `capacity` past samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity.max(2)],
            write_pos: 0,
        }
    }

    /// Creates a delay line long enough for `seconds` of history.
    pub fn with_seconds(seconds: f64, sample_rate: f64) -> Self {
        Self::new((seconds * sample_rate).ceil() as usize + 2)
    }

    /// Number of stored samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Appends a sample, overwriting the oldest one.
    ///
    /// Non-finite input is stored as silence so one bad sample cannot
    /// poison every later read.
    pub fn push(&mut self, sample: f64) {
        self.buffer[self.write_pos] = if sample.is_finite() { sample } else { 0.0 };
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Sample written `delay` pushes ago (1 = most recent).
    pub fn read(&self, delay: usize) -> f64 {
        let len = self.buffer.len();
        let delay = delay.clamp(1, len);
        self.buffer[(self.write_pos + len - delay) % len]
    }

    /// Linearly interpolated read at a fractional delay, clamped to
    /// [1, capacity - 1].
    pub fn tap(&self, delay: f64) -> f64 {
        let max = (self.buffer.len() - 1) as f64;
        let delay = if delay.is_finite() { delay.clamp(1.0, max) } else { 1.0 };
        let whole = delay.floor();
        let frac = delay - whole;

        let near = self.read(whole as usize);
        let far = self.read(whole as usize + 1);
        near * (1.0 - frac) + far * frac
    }
}
