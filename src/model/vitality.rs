use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Health reached zero through direct damage.
    Damage,
    /// Oxygen ran out; bypasses health accounting.
    Suffocation,
}

/// Health with a one-way `Dead` latch.
///
/// Both death paths go through `die`, so whichever caller reaches `Dead`
/// first wins and every later call in the same tick (or after) is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitality {
    health: f32,
    max: f32,
    state: LifeState,
}

impl Vitality {
    pub fn new(max: f32) -> Self {
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            100.0
        };
        Self {
            health: max,
            max,
            state: LifeState::Alive,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == LifeState::Dead
    }

    /// Apply direct damage. Returns `Some(DeathCause::Damage)` only on the
    /// call that killed. Non-positive or NaN amounts never heal.
    pub fn take_damage(&mut self, amount: f32) -> Option<DeathCause> {
        if self.is_dead() || amount.is_nan() || amount <= 0.0 {
            return None;
        }
        self.health = (self.health - amount).clamp(0.0, self.max);
        if self.health <= 0.0 {
            return self.die(DeathCause::Damage);
        }
        None
    }

    /// Instant kill when the oxygen reserve is empty.
    pub fn check_starvation(&mut self, oxygen_level: f32) -> Option<DeathCause> {
        if oxygen_level <= 0.0 {
            return self.die(DeathCause::Suffocation);
        }
        None
    }

    pub fn reset(&mut self) {
        self.health = self.max;
        self.state = LifeState::Alive;
    }

    fn die(&mut self, cause: DeathCause) -> Option<DeathCause> {
        if self.is_dead() {
            return None;
        }
        self.state = LifeState::Dead;
        Some(cause)
    }
}

impl Default for Vitality {
    fn default() -> Self {
        Self::new(100.0)
    }
}
