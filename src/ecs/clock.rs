use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Simulation clock resource: monotonic elapsed seconds, tick count and the
/// step length used by the current tick.
///
/// The `advance_clock` system moves the clock forward at the end of each tick
/// (in `SimPhase::Last`), so systems see the time at which the tick started.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    pub elapsed: f64,
    pub tick_count: u64,
    dt: f32,
}

impl SimClock {
    pub fn new(dt: f32) -> Self {
        Self {
            elapsed: 0.0,
            tick_count: 0,
            dt: sanitize_delta(dt),
        }
    }

    /// Seconds covered by one tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Override the step length for variable-rate hosts. Non-finite or
    /// negative deltas become zero so nothing drains backwards.
    pub fn set_delta(&mut self, dt: f32) {
        self.dt = sanitize_delta(dt);
    }

    pub fn advance(&mut self) {
        self.elapsed += f64::from(self.dt);
        self.tick_count += 1;
    }
}

fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Bevy system that advances the simulation clock by one step.
/// Registered in `SimPhase::Last`.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        let clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed, 0.0);
        assert_eq!(clock.tick_count, 0);
        assert_eq!(clock.dt(), 0.5);
    }

    #[test]
    fn advance_accumulates_dt() {
        let mut clock = SimClock::new(0.25);
        for _ in 0..4 {
            clock.advance();
        }
        assert_eq!(clock.elapsed, 1.0);
        assert_eq!(clock.tick_count, 4);
    }

    #[test]
    fn variable_delta() {
        let mut clock = SimClock::new(1.0);
        clock.advance();
        clock.set_delta(0.5);
        clock.advance();
        assert_eq!(clock.elapsed, 1.5);
    }

    #[test]
    fn bad_delta_is_zero() {
        let mut clock = SimClock::new(f32::NAN);
        assert_eq!(clock.dt(), 0.0);
        clock.set_delta(-2.0);
        clock.advance();
        assert_eq!(clock.elapsed, 0.0);
        assert_eq!(clock.tick_count, 1);
    }
}
