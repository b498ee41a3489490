//! The repair shop itself
//!
//! [`ShopSimulation`] pulls vehicles off the arrival queue one at a time, quotes
//! the repair, asks the operator whether to go ahead, and attempts a single part
//! repair per vehicle before moving on.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::VecDeque;

use super::account::{quote_part, CashAccount, FIXED_PENALTY, PENALTY_PER_PART};
use super::config::{RepairPolicy, ShopConfig};
use super::error::ShopError;
use super::inventory::Inventory;
use super::operator::{InspectionReport, Operator, OperatorInput, RepairOutcome};
use super::random::RandomSource;
use super::vehicle::Vehicle;

/// Upper bound (exclusive) of the repair draw
pub const REPAIR_DRAW_MAX: u32 = 7;
/// Draws at or below this value are successful repairs
pub const REPAIR_SUCCESS_MAX: u32 = 3;

/// Operator answer meaning "repair this vehicle"
pub const CHOICE_REPAIR: i64 = 1;
/// Operator answer meaning "send this vehicle away"
pub const CHOICE_SKIP: i64 = 2;

/// Where the shop is in handling the current vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopPhase {
    /// No vehicle in the bay
    Idle,
    /// Vehicle dequeued, repair being quoted
    Inspecting,
    /// Waiting for the operator to repair or skip
    AwaitingDecision,
    /// One part selected for repair
    Repairing,
}

/// Totals at the end of a session
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub vehicles_served: usize,
    pub vehicles_skipped: usize,
    pub repair_attempts: usize,
    pub repairs_succeeded: usize,
    pub repairs_failed: usize,
    pub final_balance: f64,
}

impl From<&CashAccount> for RunSummary {
    fn from(account: &CashAccount) -> Self {
        Self {
            vehicles_served: account.vehicles_served,
            vehicles_skipped: account.vehicles_skipped,
            repair_attempts: account.repair_attempts(),
            repairs_succeeded: account.repairs_succeeded,
            repairs_failed: account.repairs_failed,
            final_balance: account.balance,
        }
    }
}

/// How the shop finished with a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A repair was requested (the attempt itself may have been ignored)
    Repair,
    /// The vehicle was sent away
    Skip,
    /// Operator input closed; the vehicle went back to the head of the queue
    Closed,
}

/// The repair shop simulation
pub struct ShopSimulation<R: RandomSource> {
    pub account: CashAccount,
    pub inventory: Inventory,
    queue: VecDeque<Vehicle>,
    policy: RepairPolicy,
    phase: ShopPhase,
    rng: R,
}

impl<R: RandomSource> ShopSimulation<R> {
    pub fn new(
        account: CashAccount,
        inventory: Inventory,
        queue: impl IntoIterator<Item = Vehicle>,
        policy: RepairPolicy,
        rng: R,
    ) -> Self {
        Self {
            account,
            inventory,
            queue: queue.into_iter().collect(),
            policy,
            phase: ShopPhase::Idle,
            rng,
        }
    }

    /// Stock the warehouse and assemble the arriving vehicles from a config
    pub fn from_config(config: &ShopConfig, mut rng: R) -> Result<Self> {
        let queue = config
            .arrivals
            .iter()
            .map(|&model| {
                Vehicle::assemble(model, &mut rng)
                    .with_context(|| format!("Failed to assemble {}", model))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(
            CashAccount::new(config.starting_balance),
            Inventory::from_catalog(config.catalog.iter().copied()),
            queue,
            config.policy,
            rng,
        ))
    }

    pub fn phase(&self) -> ShopPhase {
        self.phase
    }

    pub fn policy(&self) -> RepairPolicy {
        self.policy
    }

    /// Vehicles still waiting in the queue
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from(&self.account)
    }

    /// Quote for repairing every broken part: catalog price plus markup, summed.
    /// Fails if any broken part's kind has no catalog entry.
    pub fn estimate_repair_cost(&self, vehicle: &Vehicle) -> Result<f64, ShopError> {
        vehicle
            .broken_kinds()
            .into_iter()
            .map(|kind| self.inventory.price_of(kind).map(quote_part))
            .sum()
    }

    /// Attempt to repair the `part_index`-th broken part (counted from 0).
    ///
    /// An out-of-range index is ignored and returns `Ok(None)` without touching
    /// the vehicle, the warehouse or the till.
    pub fn attempt_repair(
        &mut self,
        vehicle: &mut Vehicle,
        part_index: usize,
    ) -> Result<Option<RepairOutcome>, ShopError> {
        let Some(kind) = vehicle.broken_part_mut(part_index).map(|part| part.kind) else {
            debug!(
                "Part {} is out of range for {} ({} broken), ignoring",
                part_index,
                vehicle.model,
                vehicle.broken_count()
            );
            return Ok(None);
        };

        if self.policy == RepairPolicy::Billed && self.inventory.count_of(kind) == 0 {
            warn!("No {} left in stock, cannot repair {}", kind, vehicle.model);
            self.account.charge(PENALTY_PER_PART);
            self.account.repairs_failed += 1;
            return Ok(Some(RepairOutcome::OutOfStock(kind)));
        }

        let draw = self.rng.next(0, REPAIR_DRAW_MAX)?;
        let succeeded = draw <= REPAIR_SUCCESS_MAX;

        let outcome = match (self.policy, succeeded) {
            (RepairPolicy::AsQuoted, true) => {
                vehicle.repair_part_at(part_index);
                RepairOutcome::Repaired(kind)
            }
            // Quote-only shops close the job either way
            (RepairPolicy::AsQuoted, false) => {
                vehicle.repair_part_at(part_index);
                RepairOutcome::Failed(kind)
            }
            (RepairPolicy::Billed, true) => {
                match self.inventory.withdraw(kind) {
                    Some(entry) => {
                        vehicle.repair_part_at(part_index);
                        self.account.earn(quote_part(entry.price));
                        RepairOutcome::Repaired(kind)
                    }
                    None => {
                        self.account.charge(PENALTY_PER_PART);
                        RepairOutcome::OutOfStock(kind)
                    }
                }
            }
            (RepairPolicy::Billed, false) => {
                self.account.charge(PENALTY_PER_PART);
                RepairOutcome::Failed(kind)
            }
        };

        if outcome.is_success() {
            self.account.repairs_succeeded += 1;
        } else {
            self.account.repairs_failed += 1;
        }
        info!(
            "Repair of {} on {}: {:?} (draw {})",
            kind, vehicle.model, outcome, draw
        );

        Ok(Some(outcome))
    }

    /// Serve every vehicle in the queue, then return to idle.
    ///
    /// Stops early, leaving the current vehicle at the head of the queue, if the
    /// operator's input closes.
    pub fn run_loop(&mut self, operator: &mut dyn Operator) -> Result<RunSummary> {
        while let Some(decision) = self.serve_next(operator)? {
            if decision == Decision::Closed {
                break;
            }
        }

        if self.queue.is_empty() {
            info!("Queue empty, shop closing");
        }

        Ok(self.summary())
    }

    /// Serve the vehicle at the head of the queue. Returns `Ok(None)` if the
    /// queue is empty.
    ///
    /// The shop is back to idle when this returns. A vehicle that was not dealt
    /// with, because input closed or its quote failed, stays at the head of the queue.
    pub fn serve_next(&mut self, operator: &mut dyn Operator) -> Result<Option<Decision>> {
        let Some(mut vehicle) = self.queue.pop_front() else {
            return Ok(None);
        };
        info!("{} pulled into the bay", vehicle.model);

        let served = self.serve(&mut vehicle, operator);
        match &served {
            Ok(Decision::Repair | Decision::Skip) => self.account.vehicles_served += 1,
            Ok(Decision::Closed) => {
                info!("Operator input closed, leaving {} in the queue", vehicle.model);
                self.queue.push_front(vehicle);
            }
            Err(_) => self.queue.push_front(vehicle),
        }
        self.enter(ShopPhase::Idle, operator);

        served.map(Some)
    }

    fn enter(&mut self, phase: ShopPhase, operator: &mut dyn Operator) {
        self.phase = phase;
        operator.phase_changed(phase);
    }

    fn serve(&mut self, vehicle: &mut Vehicle, operator: &mut dyn Operator) -> Result<Decision> {
        loop {
            self.enter(ShopPhase::Inspecting, operator);
            let repair_cost = self
                .estimate_repair_cost(vehicle)
                .with_context(|| format!("Failed to quote repair for {}", vehicle.model))?;
            debug!("Quoted {:.2} for {}", repair_cost, vehicle.model);

            operator.inspect(&InspectionReport {
                balance: self.account.balance,
                stock: self.inventory.describe(),
                model: vehicle.model,
                repair_cost,
                broken: vehicle.broken_kinds(),
            });

            self.enter(ShopPhase::AwaitingDecision, operator);
            match operator.decide() {
                OperatorInput::Number(CHOICE_REPAIR) => {
                    self.enter(ShopPhase::Repairing, operator);
                    self.repair_step(vehicle, operator)?;
                    return Ok(Decision::Repair);
                }
                OperatorInput::Number(CHOICE_SKIP) => {
                    info!("{} sent away unrepaired", vehicle.model);
                    if self.policy == RepairPolicy::Billed {
                        self.account.charge(FIXED_PENALTY);
                    }
                    self.account.vehicles_skipped += 1;
                    return Ok(Decision::Skip);
                }
                OperatorInput::Closed => return Ok(Decision::Closed),
                OperatorInput::Number(_) | OperatorInput::Invalid => {
                    warn!("Unrecognised command, inspecting {} again", vehicle.model);
                }
            }
        }
    }

    fn repair_step(&mut self, vehicle: &mut Vehicle, operator: &mut dyn Operator) -> Result<()> {
        let broken = vehicle.broken_kinds();
        let index = match operator.pick_part(&broken) {
            OperatorInput::Number(number) if number >= 1 => (number - 1) as usize,
            input => {
                debug!("Ignoring part selection {:?}", input);
                return Ok(());
            }
        };

        if let Some(outcome) = self
            .attempt_repair(vehicle, index)
            .context("Repair attempt failed")?
        {
            operator.report(&outcome);
        }
        Ok(())
    }
}
