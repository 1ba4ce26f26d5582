use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Helmet integrity as a small bounded counter with a break-once latch.
///
/// Durability starts at `max` and only moves through `damage` and `repair`.
/// Reaching zero latches `Broken`: from then on damage is ignored and repair
/// is refused until the owner is re-initialized with [`Durability::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Durability {
    current: u32,
    max: u32,
    broken: bool,
    crack_stages: u32,
    stage: u32,
}

/// Discrete helmet states. `Stage(n)` carries the remaining durability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelmetState {
    Stage(u32),
    Broken,
}

/// What a single `damage` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Helmet was already broken or the amount was zero.
    Ignored,
    Damaged { durability: u32, stage: u32 },
    /// Durability hit zero on this call. Returned at most once per lifetime.
    Shattered { stage: u32 },
}

impl Durability {
    /// `max` is floored at 1; `crack_stages` is the number of overlay sprites.
    pub fn new(max: u32, crack_stages: u32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            max,
            broken: false,
            crack_stages,
            stage: 0,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Overlay index in `0..crack_stages`, 0 = pristine.
    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn state(&self) -> HelmetState {
        if self.broken {
            HelmetState::Broken
        } else {
            HelmetState::Stage(self.current)
        }
    }

    pub fn damage(&mut self, amount: u32) -> DamageOutcome {
        if self.broken || amount == 0 {
            return DamageOutcome::Ignored;
        }
        self.current = self.current.saturating_sub(amount);
        self.stage = self.compute_stage();
        if self.current == 0 {
            self.broken = true;
            return DamageOutcome::Shattered { stage: self.stage };
        }
        DamageOutcome::Damaged {
            durability: self.current,
            stage: self.stage,
        }
    }

    /// Returns `false` when the repair was refused (helmet broken).
    pub fn repair(&mut self, amount: u32) -> bool {
        if self.broken {
            return false;
        }
        self.current = self.current.saturating_add(amount).min(self.max);
        self.stage = self.compute_stage();
        true
    }

    /// Oxygen drain rate (units/second) for the current durability.
    pub fn drain_rate(&self, table: &DrainTable) -> f32 {
        table.rate_for(self.current)
    }

    /// Back to a fresh helmet. Only entity re-initialization calls this.
    pub fn reset(&mut self) {
        self.current = self.max;
        self.broken = false;
        self.stage = 0;
    }

    // floor((1 - current/max) * (stages - 1)) in integer form.
    fn compute_stage(&self) -> u32 {
        let span = u64::from(self.crack_stages.saturating_sub(1));
        let lost = u64::from(self.max - self.current);
        // Quotient is at most `span`, which came from a u32.
        (lost * span / u64::from(self.max)) as u32
    }
}

impl Default for Durability {
    fn default() -> Self {
        Self::new(3, 4)
    }
}

/// Durability → drain rate lookup. Durabilities missing from the table drain 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrainTable(pub BTreeMap<u32, f32>);

impl DrainTable {
    pub fn rate_for(&self, durability: u32) -> f32 {
        match self.0.get(&durability) {
            Some(rate) if rate.is_finite() && *rate > 0.0 => *rate,
            _ => 0.0,
        }
    }
}

impl Default for DrainTable {
    fn default() -> Self {
        Self(BTreeMap::from([(3, 0.0), (2, 5.0), (1, 10.0), (0, 20.0)]))
    }
}
