//! The operator seam between the shop and whoever runs it
//!
//! The simulation never reads input or formats output itself. It hands an
//! [`InspectionReport`] to an [`Operator`] and asks it for decisions.

use super::shop::ShopPhase;
use super::types::{PartKind, VehicleModel};

/// A single answer from the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorInput {
    /// A numeric answer, not yet range-checked
    Number(i64),
    /// Something that isn't a number
    Invalid,
    /// No more input will come
    Closed,
}

/// What the operator sees when a vehicle is inspected
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    pub balance: f64,
    pub stock: String,
    pub model: VehicleModel,
    pub repair_cost: f64,
    /// Broken part kinds, in the order the operator numbers them (from 1)
    pub broken: Vec<PartKind>,
}

/// Result of one repair attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    Repaired(PartKind),
    Failed(PartKind),
    /// The warehouse had nothing of this kind left (billed policy only)
    OutOfStock(PartKind),
}

impl RepairOutcome {
    pub fn kind(&self) -> PartKind {
        match *self {
            RepairOutcome::Repaired(kind)
            | RepairOutcome::Failed(kind)
            | RepairOutcome::OutOfStock(kind) => kind,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RepairOutcome::Repaired(_))
    }
}

/// Front end driving the shop
pub trait Operator {
    /// Show the state of the shop and the vehicle under inspection
    fn inspect(&mut self, report: &InspectionReport);

    /// Repair the vehicle? 1 = yes, 2 = no
    fn decide(&mut self) -> OperatorInput;

    /// Which broken part to repair, numbered from 1
    fn pick_part(&mut self, broken: &[PartKind]) -> OperatorInput;

    /// Show how a repair attempt went
    fn report(&mut self, outcome: &RepairOutcome);

    /// Called on every move of the service state machine
    fn phase_changed(&mut self, _phase: ShopPhase) {}
}

/// Headless operator: repairs every vehicle, always starting with the first broken part
///
/// Keeps every inspection paired with the repair outcome that followed it, if any.
#[derive(Debug, Default)]
pub struct AutoOperator {
    pub log: Vec<(InspectionReport, Option<RepairOutcome>)>,
}

impl AutoOperator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Operator for AutoOperator {
    fn inspect(&mut self, report: &InspectionReport) {
        self.log.push((report.clone(), None));
    }

    fn decide(&mut self) -> OperatorInput {
        OperatorInput::Number(1)
    }

    fn pick_part(&mut self, _broken: &[PartKind]) -> OperatorInput {
        OperatorInput::Number(1)
    }

    fn report(&mut self, outcome: &RepairOutcome) {
        if let Some((_, last)) = self.log.last_mut() {
            *last = Some(*outcome);
        }
    }
}
