use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::ecs::events::SurvivalEvent;

/// One journaled event with the tick it happened on.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub tick: u64,
    pub elapsed: f64,
    pub event: SurvivalEvent,
}

/// Accumulates every `SurvivalEvent` until the host clears it.
#[derive(Resource, Debug, Clone, Default)]
pub struct SurvivalLog {
    pub entries: Vec<LogEntry>,
}

impl SurvivalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn for_entity(&self, entity: Entity) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.event.entity() == entity)
    }

    /// Count entries whose event satisfies `pred`.
    pub fn count(&self, pred: impl Fn(&SurvivalEvent) -> bool) -> usize {
        self.entries.iter().filter(|entry| pred(&entry.event)).count()
    }
}
