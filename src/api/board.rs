use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::aligned::AlignedSeriesSet;
use crate::core::calendar::YearWindow;
use crate::core::comparison::{EntityRecords, align_monthly_comparison, align_yearly_comparison};
use crate::core::dividends::{EpsDividendsView, align_eps_vs_dividends};
use crate::core::records::{Entity, EntityDirectory, FinancialRecord};
use crate::core::yoy::align_monthly_yoy;
use crate::error::{TrendError, TrendResult};
use crate::source::EntityFetchOutcome;

use super::refresh::{DebounceConfig, GenerationGate, RefreshCommand, RefreshInput};

/// Payload for the external dialog collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    fn data_unavailable(entity_id: &str, error: &TrendError) -> Self {
        Self {
            title: "Data unavailable".to_owned(),
            message: format!("[{entity_id}] {error}"),
        }
    }
}

/// Board-wide view parameters.
///
/// `current_year` is explicit data so every recompute is deterministic;
/// `from_wall_clock` is the one place the clock is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub current_year: i32,
    /// Trailing years on the year-over-year chart (inclusive of the
    /// current year).
    pub yoy_lookback: u32,
    /// Trailing years on the EPS-vs-dividends chart.
    pub dividends_lookback: u32,
    pub debounce: DebounceConfig,
}

impl BoardConfig {
    #[must_use]
    pub fn for_year(current_year: i32) -> Self {
        Self {
            current_year,
            yoy_lookback: 1,
            dividends_lookback: 9,
            debounce: DebounceConfig::default(),
        }
    }

    #[must_use]
    pub fn from_wall_clock() -> Self {
        Self::for_year(YearWindow::ending_today(0).current_year)
    }

    #[must_use]
    pub fn with_yoy_lookback(mut self, years: u32) -> Self {
        self.yoy_lookback = years;
        self
    }

    #[must_use]
    pub fn with_dividends_lookback(mut self, years: u32) -> Self {
        self.dividends_lookback = years;
        self
    }
}

/// Orchestration facade over the aligners.
///
/// Owns the entity directory, the debounced entity-id input, and the most
/// recently rendered view per chart. Raw records are never retained:
/// every parameter change goes through a fresh fetch, and each settlement
/// is applied only while its generation tag is still current, so a stale
/// response can never overwrite a newer chart. All views start empty,
/// matching the pre-fetch render of an empty dashboard.
#[derive(Debug, Clone)]
pub struct TrendBoard {
    config: BoardConfig,
    directory: EntityDirectory,
    entity_input: RefreshInput,
    monthly_gate: GenerationGate,
    yearly_gate: GenerationGate,
    yoy: AlignedSeriesSet,
    eps_dividends: EpsDividendsView,
    monthly_comparison: AlignedSeriesSet,
    yearly_comparison: AlignedSeriesSet,
}

impl TrendBoard {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            directory: EntityDirectory::default(),
            entity_input: RefreshInput::new(config.debounce),
            monthly_gate: GenerationGate::default(),
            yearly_gate: GenerationGate::default(),
            yoy: AlignedSeriesSet::empty(),
            eps_dividends: EpsDividendsView::empty(),
            monthly_comparison: AlignedSeriesSet::empty(),
            yearly_comparison: AlignedSeriesSet::empty(),
        }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn set_directory(&mut self, entities: Vec<Entity>) {
        debug!(entity_count = entities.len(), "entity directory loaded");
        self.directory = EntityDirectory::new(entities);
    }

    #[must_use]
    pub fn directory(&self) -> &EntityDirectory {
        &self.directory
    }

    pub fn set_yoy_lookback(&mut self, years: u32) {
        self.config.yoy_lookback = years;
    }

    pub fn set_dividends_lookback(&mut self, years: u32) {
        self.config.dividends_lookback = years;
    }

    /// Feeds a keystroke or routing-parameter value into the debounced
    /// entity-id input.
    pub fn on_entity_input(&mut self, value: impl Into<String>, now_ms: u64) {
        self.entity_input.on_input(value, now_ms);
    }

    /// Settlement tick: returns the fetch the host should run, if a new
    /// distinct entity id has settled.
    pub fn poll_entity(&mut self, now_ms: u64) -> Option<RefreshCommand> {
        self.entity_input.poll(now_ms)
    }

    /// Document title for the committed entity, blank-name degradation
    /// included.
    #[must_use]
    pub fn window_title(&self) -> String {
        match self.entity_input.committed() {
            Some(entity_id) => format!("{} EPS Trend", self.directory.legend_label(entity_id)),
            None => "EPS Trend".to_owned(),
        }
    }

    /// Applies the settled EPS + dividend pair for the committed entity.
    ///
    /// The two legs settle independently: a failed dividend fetch still
    /// renders both EPS charts (with dividend gaps), and a failed EPS
    /// fetch leaves the previous views on screen. Every failure yields one
    /// notification for the dialog collaborator. Settlements from a
    /// superseded generation are dropped whole.
    pub fn apply_entity_fetch(
        &mut self,
        generation: u64,
        eps: TrendResult<Vec<FinancialRecord>>,
        dividends: TrendResult<Vec<FinancialRecord>>,
    ) -> Vec<Notification> {
        if !self.entity_input.accepts(generation) {
            warn!(
                generation,
                current = self.entity_input.generation(),
                "dropping stale entity settlement"
            );
            return Vec::new();
        }

        let entity_id = self.entity_input.committed().unwrap_or_default().to_owned();
        let mut notifications = Vec::new();

        let eps_records = match eps {
            Ok(records) => records,
            Err(error) => {
                notifications.push(Notification::data_unavailable(&entity_id, &error));
                return notifications;
            }
        };

        let dividend_records = match dividends {
            Ok(records) => records,
            Err(error) => {
                notifications.push(Notification::data_unavailable(&entity_id, &error));
                Vec::new()
            }
        };

        self.yoy = align_monthly_yoy(
            &eps_records,
            YearWindow::new(self.config.current_year, self.config.yoy_lookback),
        );
        self.eps_dividends = align_eps_vs_dividends(
            &eps_records,
            &dividend_records,
            YearWindow::new(self.config.current_year, self.config.dividends_lookback),
        );
        notifications
    }

    /// Starts a monthly-comparison refresh, superseding any in flight.
    pub fn begin_monthly_comparison(&mut self) -> u64 {
        self.monthly_gate.begin()
    }

    /// Applies a settled monthly comparison: failed entities are excluded
    /// from the aligned set and reported, surviving entities render.
    pub fn apply_monthly_comparison(
        &mut self,
        generation: u64,
        outcomes: &[EntityFetchOutcome],
        target_year: i32,
    ) -> Vec<Notification> {
        if !self.monthly_gate.accepts(generation) {
            warn!(generation, "dropping stale monthly comparison settlement");
            return Vec::new();
        }

        let (selection, notifications) = split_outcomes(outcomes);
        self.monthly_comparison =
            align_monthly_comparison(&selection, target_year, &self.directory);
        notifications
    }

    /// Starts a yearly-comparison refresh, superseding any in flight.
    pub fn begin_yearly_comparison(&mut self) -> u64 {
        self.yearly_gate.begin()
    }

    /// Applies a settled yearly comparison over an explicit year set, with
    /// the same per-entity failure isolation as the monthly variant.
    pub fn apply_yearly_comparison(
        &mut self,
        generation: u64,
        outcomes: &[EntityFetchOutcome],
        years: &[i32],
    ) -> Vec<Notification> {
        if !self.yearly_gate.accepts(generation) {
            warn!(generation, "dropping stale yearly comparison settlement");
            return Vec::new();
        }

        let (selection, notifications) = split_outcomes(outcomes);
        self.yearly_comparison = align_yearly_comparison(
            &selection,
            years,
            self.config.current_year,
            &self.directory,
        );
        notifications
    }

    #[must_use]
    pub fn yoy(&self) -> &AlignedSeriesSet {
        &self.yoy
    }

    #[must_use]
    pub fn eps_vs_dividends(&self) -> &EpsDividendsView {
        &self.eps_dividends
    }

    #[must_use]
    pub fn monthly_comparison(&self) -> &AlignedSeriesSet {
        &self.monthly_comparison
    }

    #[must_use]
    pub fn yearly_comparison(&self) -> &AlignedSeriesSet {
        &self.yearly_comparison
    }
}

fn split_outcomes(outcomes: &[EntityFetchOutcome]) -> (Vec<EntityRecords<'_>>, Vec<Notification>) {
    let mut selection = Vec::with_capacity(outcomes.len());
    let mut notifications = Vec::new();
    for outcome in outcomes {
        match &outcome.result {
            Ok(records) => selection.push(EntityRecords::new(&outcome.entity_id, records)),
            Err(error) => {
                notifications.push(Notification::data_unavailable(&outcome.entity_id, error));
            }
        }
    }
    (selection, notifications)
}
