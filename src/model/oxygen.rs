use serde::{Deserialize, Serialize};

/// Whether the survivor is breathing vacuum or station air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ambient {
    #[default]
    Hostile,
    SafeRoom,
}

impl Ambient {
    pub fn is_safe(self) -> bool {
        matches!(self, Ambient::SafeRoom)
    }
}

/// Bounded oxygen accumulator. `level` never leaves `[0, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OxygenReserve {
    level: f32,
    max: f32,
    regen_rate: f32,
}

/// Result of one `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxygenTick {
    pub level: f32,
    /// True only on the tick that took the level from above zero to zero.
    pub depleted: bool,
}

impl OxygenReserve {
    /// Starts full. Non-finite or non-positive `max` falls back to 100.
    pub fn new(max: f32, regen_rate: f32) -> Self {
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            100.0
        };
        Self {
            level: max,
            max,
            regen_rate: sanitize(regen_rate),
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn fraction(&self) -> f32 {
        (self.level / self.max).clamp(0.0, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.level <= 0.0
    }

    /// Advance one step: regenerate in a safe room, otherwise drain at
    /// `drain_rate`. `dt <= 0` (or NaN) is a no-op.
    pub fn tick(&mut self, dt: f32, drain_rate: f32, ambient: Ambient) -> OxygenTick {
        let was_empty = self.is_empty();
        if dt.is_finite() && dt > 0.0 {
            let delta = if ambient.is_safe() {
                self.regen_rate * dt
            } else {
                -sanitize(drain_rate) * dt
            };
            self.level = (self.level + delta).clamp(0.0, self.max);
        }
        OxygenTick {
            level: self.level,
            depleted: !was_empty && self.is_empty(),
        }
    }

    /// Add oxygen from a consumable. Returns the amount actually taken on.
    pub fn refill(&mut self, amount: f32) -> f32 {
        let before = self.level;
        self.level = (self.level + sanitize(amount)).clamp(0.0, self.max);
        self.level - before
    }

    pub fn reset(&mut self) {
        self.level = self.max;
    }
}

impl Default for OxygenReserve {
    fn default() -> Self {
        Self::new(100.0, 20.0)
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
