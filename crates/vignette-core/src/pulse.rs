//! Bloom radius pulsation driver.
//!
//! A free-running cycle timer with three phases: hold at the minimum radius,
//! a cubic ease-in spike to the maximum, then a linear fall back. The radius
//! is a pure function of the timer, so the curve is continuous at both phase
//! boundaries and trivially testable.

use crate::constants::{
    BLOOM_FALL_TIME, BLOOM_IDLE_TIME, BLOOM_MAX_RADIUS, BLOOM_MIN_RADIUS, BLOOM_SPIKE_TIME,
};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Clone, Debug)]
pub struct BloomPulse {
    pub idle_time: f32,
    pub spike_time: f32,
    pub fall_time: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    timer: f32,
}

impl Default for BloomPulse {
    fn default() -> Self {
        Self::new(
            BLOOM_IDLE_TIME,
            BLOOM_SPIKE_TIME,
            BLOOM_FALL_TIME,
            BLOOM_MIN_RADIUS,
            BLOOM_MAX_RADIUS,
        )
    }
}

impl BloomPulse {
    pub fn new(
        idle_time: f32,
        spike_time: f32,
        fall_time: f32,
        min_radius: f32,
        max_radius: f32,
    ) -> Self {
        Self {
            idle_time,
            spike_time,
            fall_time,
            min_radius,
            max_radius,
            timer: 0.0,
        }
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn cycle_len(&self) -> f32 {
        self.idle_time + self.spike_time + self.fall_time
    }

    /// Advance the cycle timer and return the radius for the new position.
    /// Zero or negative deltas leave the timer untouched.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = dt.max(0.0);
        let cycle = self.cycle_len();
        if cycle > 0.0 {
            self.timer = (self.timer + dt) % cycle;
        }
        self.radius_at(self.timer)
    }

    /// Radius for an arbitrary timer position. Phases of zero length are
    /// skipped outright, so no phase-local division can hit a zero duration.
    pub fn radius_at(&self, timer: f32) -> f32 {
        if timer < self.idle_time {
            return self.min_radius;
        }
        let rise_end = self.idle_time + self.spike_time;
        if timer < rise_end {
            let t = (timer - self.idle_time) / self.spike_time;
            lerp(self.min_radius, self.max_radius, t * t * t)
        } else if self.fall_time > 0.0 {
            let t = ((timer - rise_end) / self.fall_time).min(1.0);
            lerp(self.max_radius, self.min_radius, t)
        } else {
            self.min_radius
        }
    }
}
