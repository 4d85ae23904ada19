use serde::{Deserialize, Serialize};
use tracing::trace;

/// Settlement window for text-bound parameter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// An input value must sit unchanged this long before it commits.
    pub settle_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { settle_ms: 50 }
    }
}

/// Committed parameter change: the host runs one fetch per command and
/// tags every settlement with the command's generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshCommand {
    pub generation: u64,
    pub value: String,
}

/// Debounced, deduplicated parameter input with a monotonically
/// increasing request generation.
///
/// This replaces reactive stream plumbing with a pure state machine: the
/// clock enters only as explicit `now_ms` arguments, so settlement order
/// is deterministic and testable. Rapid repeated inputs collapse to one
/// command for the final distinct value; a settlement tagged with a
/// superseded generation is rejected by `accepts`, which is what keeps a
/// stale response from overwriting a newer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshInput {
    config: DebounceConfig,
    pending: Option<PendingInput>,
    committed: Option<String>,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingInput {
    value: String,
    at_ms: u64,
}

impl Default for RefreshInput {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}

impl RefreshInput {
    #[must_use]
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: None,
            committed: None,
            generation: 0,
        }
    }

    /// Records a candidate value, restarting the settlement window.
    pub fn on_input(&mut self, value: impl Into<String>, now_ms: u64) {
        let value = value.into();
        trace!(%value, now_ms, "parameter input");
        self.pending = Some(PendingInput { value, at_ms: now_ms });
    }

    /// Commits the pending value once it has settled and differs from the
    /// last committed value.
    ///
    /// Returns the fetch command for the new generation, or `None` when
    /// nothing is due.
    pub fn poll(&mut self, now_ms: u64) -> Option<RefreshCommand> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now_ms.saturating_sub(pending.at_ms) >= self.config.settle_ms);
        if !due {
            return None;
        }

        let pending = self.pending.take()?;
        if self.committed.as_deref() == Some(pending.value.as_str()) {
            trace!(value = %pending.value, "settled input unchanged, no refetch");
            return None;
        }

        self.generation += 1;
        self.committed = Some(pending.value.clone());
        trace!(
            value = %pending.value,
            generation = self.generation,
            "committed settled input"
        );
        Some(RefreshCommand {
            generation: self.generation,
            value: pending.value,
        })
    }

    /// True when a settlement tagged with `generation` is still current.
    #[must_use]
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Last committed value, once any input has settled.
    #[must_use]
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Bare stale-response guard for refreshes that have no debounced text
/// input behind them (selector and year-set driven charts).
///
/// `begin` supersedes every outstanding request; a settlement is applied
/// only when its tag still matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationGate {
    current: u64,
}

impl GenerationGate {
    /// Starts a new refresh and returns its generation tag.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    #[must_use]
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.current
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::{DebounceConfig, GenerationGate, RefreshInput};

    #[test]
    fn pending_input_does_not_commit_before_the_window_elapses() {
        let mut input = RefreshInput::new(DebounceConfig { settle_ms: 50 });
        input.on_input("2887", 0);
        assert!(input.poll(49).is_none());
        let command = input.poll(50).expect("settled");
        assert_eq!(command.value, "2887");
        assert_eq!(command.generation, 1);
    }

    #[test]
    fn resettled_identical_value_is_deduplicated() {
        let mut input = RefreshInput::default();
        input.on_input("2887", 0);
        assert!(input.poll(100).is_some());
        input.on_input("2887", 200);
        assert!(input.poll(300).is_none());
        assert_eq!(input.generation(), 1);
    }

    #[test]
    fn superseded_generation_is_rejected() {
        let mut input = RefreshInput::default();
        input.on_input("2887", 0);
        let first = input.poll(100).expect("settled");
        input.on_input("2890", 200);
        let second = input.poll(300).expect("settled");
        assert!(!input.accepts(first.generation));
        assert!(input.accepts(second.generation));
    }

    #[test]
    fn generation_gate_supersedes_outstanding_requests() {
        let mut gate = GenerationGate::default();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.accepts(first));
        assert!(gate.accepts(second));
    }
}
