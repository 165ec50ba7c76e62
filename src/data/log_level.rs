//! Log levels shared by the fleet's services.
//!
//! `sort_order` doubles as the urgency rank: lower is more urgent, with
//! `panic` at 0 and `trace` at 6. A logger configured at level `L` discards
//! messages whose level [`is_more_urgent_than`](LogLevelId::is_more_urgent_than) `L`.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the log-level catalog.
    marker: LogLevel,
    id: LogLevelId,
    validated: ValidatedLogLevelId,
    registry: LOG_LEVELS,
    name: "LogLevel",
    description: "Log levels shared by the fleet's services, most urgent first.",
    entries: [
        (PANIC, "panic", "The service cannot continue and is about to exit", "Panic", 0),
        (FATAL, "fatal", "An unrecoverable failure in the current operation", "Fatal", 1),
        (ERROR, "error", "An operation failed and needs attention", "Error", 2),
        (WARN, "warn", "Something unexpected that the service recovered from", "Warn", 3),
        (INFO, "info", "Routine operational events", "Info", 4),
        (DEBUG, "debug", "Diagnostic detail for troubleshooting", "Debug", 5),
        (TRACE, "trace", "Fine-grained tracing of control flow", "Trace", 6),
    ]
}

impl LogLevelId {
    /// The urgency rank of this level, if it resolves. Lower is more urgent.
    pub fn urgency(&self) -> Option<i32> {
        self.entry().map(|entry| entry.sort_order)
    }

    /// Asymmetric urgency comparison.
    ///
    /// An unresolvable level is never more urgent than anything; a
    /// resolvable level is more urgent than an unresolvable one.
    pub fn is_more_urgent_than(&self, other: &LogLevelId) -> bool {
        match (self.urgency(), other.urgency()) {
            (Some(own), Some(theirs)) => own < theirs,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_follows_sort_order() {
        assert!(LogLevelId::PANIC.is_more_urgent_than(&LogLevelId::TRACE));
        assert!(LogLevelId::ERROR.is_more_urgent_than(&LogLevelId::INFO));
        assert!(!LogLevelId::INFO.is_more_urgent_than(&LogLevelId::ERROR));
        assert!(!LogLevelId::WARN.is_more_urgent_than(&LogLevelId::WARN));
    }

    #[test]
    fn unresolvable_levels_lose_every_comparison() {
        let bogus = LogLevelId::new("louder");
        assert!(!bogus.is_more_urgent_than(&LogLevelId::TRACE));
        assert!(LogLevelId::TRACE.is_more_urgent_than(&bogus));
        assert!(!bogus.is_more_urgent_than(&bogus));
    }

    #[test]
    fn urgency_is_a_trichotomy_over_the_catalog() {
        for a in LOG_LEVELS.entries() {
            for b in LOG_LEVELS.entries() {
                let left = LogLevelId::from_static(a.id);
                let right = LogLevelId::from_static(b.id);
                let outcomes = [
                    left.is_more_urgent_than(&right),
                    right.is_more_urgent_than(&left),
                    a.sort_order == b.sort_order,
                ];
                assert_eq!(outcomes.iter().filter(|held| **held).count(), 1);
            }
        }
    }

    #[test]
    fn ranks_span_zero_to_six() {
        assert_eq!(LOG_LEVELS.len(), 7);
        for (position, entry) in LOG_LEVELS.entries().iter().enumerate() {
            assert_eq!(entry.sort_order, position as i32);
        }
    }
}
