//! Standalone repair shop simulation
//!
//! This module holds the whole shop: the parts warehouse, the vehicles and
//! their manifests, and the service loop that ties them to the cash balance.
//! It does no I/O of its own; a front end drives it through [`Operator`].

mod account;
mod config;
mod error;
mod inventory;
mod operator;
mod random;
mod shop;
mod types;
mod vehicle;

pub use account::{
    quote_part, CashAccount, FIXED_PENALTY, PENALTY_PER_PART, REPAIR_MARKUP_PERCENT,
    STARTING_BALANCE,
};
pub use config::{default_arrivals, default_catalog, RepairPolicy, ShopConfig};
pub use error::ShopError;
pub use inventory::{Inventory, StockLine};
pub use operator::{AutoOperator, InspectionReport, Operator, OperatorInput, RepairOutcome};
pub use random::{RandomSource, ShopRng};
pub use shop::{
    Decision, RunSummary, ShopPhase, ShopSimulation, CHOICE_REPAIR, CHOICE_SKIP, REPAIR_DRAW_MAX,
    REPAIR_SUCCESS_MAX,
};
pub use types::{CatalogEntry, Part, PartKind, VehicleModel};
pub use vehicle::{Vehicle, MAX_PARTS, MIN_PARTS};
