use bevy_app::App;

use crate::ecs::clock::SimClock;
use crate::ecs::events::SurvivalEvent;
use crate::ecs::resources::SurvivalLog;
use crate::ecs::schedule::SurvivalTick;

/// Run `n` survival ticks.
pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SurvivalTick);
    }
}

/// Run ticks covering at least `seconds` of simulated time at the clock's step.
pub fn tick_seconds(app: &mut App, seconds: f32) {
    let dt = app.world().resource::<SimClock>().dt();
    if dt <= 0.0 {
        return;
    }
    let ticks = (seconds / dt).ceil() as u32;
    tick_n(app, ticks);
}

/// Number of journal entries matching `pred`.
pub fn journal_count(app: &App, pred: impl Fn(&SurvivalEvent) -> bool) -> usize {
    app.world().resource::<SurvivalLog>().count(pred)
}
