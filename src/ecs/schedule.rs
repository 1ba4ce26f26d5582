use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one survival step.
/// Run manually each step via `app.world_mut().run_schedule(SurvivalTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurvivalTick;

/// Ordered phases within each tick.
///
/// Phases run in declaration order: PreUpdate < Apply < Update < Reactions < Last.
/// Collaborator systems that produce `SurvivalCommand`s belong in `PreUpdate`
/// so their commands land in the same tick's `Apply`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Apply,
    Update,
    Reactions,
    Last,
}

/// Per-tracker system sets within `SimPhase::Update`.
///
/// ```text
/// Oxygen → Vitals
/// ```
///
/// The oxygen tick reads the drain tier left by this tick's impacts (applied
/// in `Apply`); the starvation check must see this tick's oxygen level.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SurvivalSet {
    Oxygen,
    Vitals,
}

fn configure_survival_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(SurvivalSet::Oxygen.in_set(SimPhase::Update));
    schedule.configure_sets(SurvivalSet::Vitals.in_set(SimPhase::Update));
    schedule.configure_sets(SurvivalSet::Vitals.after(SurvivalSet::Oxygen));
}

/// Build a configured `SurvivalTick` schedule with phase ordering.
pub fn configure_survival_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SurvivalTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Apply,
            SimPhase::Update,
            SimPhase::Reactions,
            SimPhase::Last,
        )
            .chain(),
    );
    configure_survival_ordering(&mut schedule);
    schedule.add_systems(advance_clock.in_set(SimPhase::Last));
    schedule
}
