use glam::Vec3;

/// A raw contact reported by the physics collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSample {
    /// Body velocity on the step before contact.
    pub velocity: Vec3,
    /// Surface normal at the contact point, pointing away from the surface.
    pub normal: Vec3,
    /// Name of whatever was hit, for logs.
    pub source: String,
}

impl ImpactSample {
    /// Closing speed along the contact normal. Zero for a degenerate normal,
    /// negative when moving away from the surface.
    pub fn speed(&self) -> f32 {
        self.velocity.dot(-self.normal.normalize_or_zero())
    }
}

/// A contact that passed both the speed threshold and the cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifiedImpact {
    pub speed: f32,
    pub at: f64,
}

/// Speed-threshold filter with a cooldown debounce.
///
/// Rejected samples are dropped; nothing is queued or retried. Resting
/// against a wall therefore costs at most one durability point per cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactClassifier {
    min_impact_velocity: f32,
    cooldown: f64,
    last_accepted: Option<f64>,
}

impl ImpactClassifier {
    pub fn new(min_impact_velocity: f32, cooldown: f64) -> Self {
        Self {
            min_impact_velocity,
            cooldown: cooldown.max(0.0),
            last_accepted: None,
        }
    }

    pub fn last_accepted(&self) -> Option<f64> {
        self.last_accepted
    }

    /// `now` must come from a monotonic clock (seconds).
    pub fn classify(&mut self, sample: &ImpactSample, now: f64) -> Option<QualifiedImpact> {
        let speed = sample.speed();
        // NaN speed or time fails every comparison below.
        if !(speed >= self.min_impact_velocity) {
            return None;
        }
        if let Some(last) = self.last_accepted {
            if !(now - last >= self.cooldown) {
                return None;
            }
        } else if !now.is_finite() {
            return None;
        }
        self.last_accepted = Some(now);
        Some(QualifiedImpact { speed, at: now })
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for ImpactClassifier {
    fn default() -> Self {
        Self::new(5.0, 0.5)
    }
}

/// Counts weapon hits on one target; every `threshold`-th hit cracks the visor.
#[derive(Debug, Clone, PartialEq)]
pub struct HitCounter {
    hits: u32,
    threshold: u32,
}

impl HitCounter {
    pub fn new(threshold: u32) -> Self {
        Self {
            hits: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Record one hit. Returns `true` when the threshold is reached, in which
    /// case the counter is back at zero.
    pub fn register_hit(&mut self) -> bool {
        self.hits += 1;
        if self.hits >= self.threshold {
            self.hits = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.hits = 0;
    }
}

impl Default for HitCounter {
    fn default() -> Self {
        Self::new(3)
    }
}
