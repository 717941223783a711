//! Recording result sink used as the doubles' report channel.

/// One reported execution event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunEvent {
    /// A test with this identity started executing.
    Started(String),
    /// A test with this identity passed.
    Passed(String),
    /// A test with this identity failed with a message.
    Failed(String, String),
}

/// Ordered log of every event reported through a run.
#[derive(Debug, Default)]
pub struct RunLog {
    events: Vec<RunEvent>,
}

impl RunLog {
    /// Record one event.
    pub fn record(&mut self, event: RunEvent) { self.events.push(event); }

    /// All recorded events in report order.
    #[must_use]
    pub fn events(&self) -> &[RunEvent] { &self.events }

    /// Identities of started executions, in report order.
    #[must_use]
    pub fn started_ids(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RunEvent::Started(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of executions that reported a start.
    #[must_use]
    pub fn executions(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RunEvent::Started(_)))
            .count()
    }

    /// Identities of failed executions, in report order.
    #[must_use]
    pub fn failed_ids(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RunEvent::Failed(id, _) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }
}
