//! Attempt tracking for resolution diagnostics.

use crate::errors::Decline;

/// What happened when a single resolver was tried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttemptOutcome {
    /// The resolver produced the value; traversal stopped here.
    Resolved,
    /// The resolver declined; traversal moved on.
    Declined(Decline),
}

/// Record of a single resolver attempt during a resolution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolutionAttempt {
    /// Position of the resolver in the chain.
    pub index: usize,
    /// Resolver id as reported by [`Resolver::id`](crate::Resolver::id).
    pub resolver: String,
    pub outcome: AttemptOutcome,
}

/// Ordered record of every attempt made while resolving one request.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolutionTrace {
    pub attempts: Vec<ResolutionAttempt>,
}

impl ResolutionTrace {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn record_resolved(&mut self, index: usize, resolver: &str) {
        self.attempts.push(ResolutionAttempt {
            index,
            resolver: resolver.to_string(),
            outcome: AttemptOutcome::Resolved,
        });
    }

    pub fn record_decline(&mut self, index: usize, resolver: &str, decline: Decline) {
        self.attempts.push(ResolutionAttempt {
            index,
            resolver: resolver.to_string(),
            outcome: AttemptOutcome::Declined(decline),
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        if self.attempts.is_empty() {
            return "(no resolvers)".to_string();
        }

        self.attempts
            .iter()
            .map(|a| match &a.outcome {
                AttemptOutcome::Resolved => format!("{}: RESOLVED", a.resolver),
                AttemptOutcome::Declined(decline) => {
                    format!("{}: DECLINED ({})", a.resolver, decline)
                }
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Id of the resolver that produced the value, if any.
    pub fn resolved_by(&self) -> Option<&str> {
        self.attempts
            .iter()
            .find(|a| a.outcome == AttemptOutcome::Resolved)
            .map(|a| a.resolver.as_str())
    }

    /// True when every resolver declined (or there were none).
    pub fn is_exhausted(&self) -> bool {
        self.resolved_by().is_none()
    }

    /// Get all declines in attempt order.
    pub fn declines(&self) -> Vec<(&str, &Decline)> {
        self.attempts
            .iter()
            .filter_map(|a| match &a.outcome {
                AttemptOutcome::Declined(decline) => Some((a.resolver.as_str(), decline)),
                AttemptOutcome::Resolved => None,
            })
            .collect()
    }
}
