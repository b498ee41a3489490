//! Startup configuration for the repair shop

use super::account::STARTING_BALANCE;
use super::types::{CatalogEntry, PartKind, VehicleModel};

/// How repair outcomes affect the vehicle, the warehouse and the till
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepairPolicy {
    /// Quote only. Every attempt clears the part's broken flag, whatever the
    /// outcome, and neither stock nor cash moves.
    #[default]
    AsQuoted,
    /// Successful repairs consume stock and are paid for; failures and
    /// turned-away vehicles cost the shop a penalty.
    Billed,
}

#[derive(Debug, Clone)]
pub struct ShopConfig {
    pub starting_balance: f64,
    /// Warehouse lines as `(entry, starting count)`, in catalog order
    pub catalog: Vec<(CatalogEntry, u32)>,
    /// Vehicles in arrival order
    pub arrivals: Vec<VehicleModel>,
    pub policy: RepairPolicy,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            catalog: default_catalog(),
            arrivals: default_arrivals(),
            policy: RepairPolicy::AsQuoted,
        }
    }
}

impl ShopConfig {
    pub fn with_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_policy(mut self, policy: RepairPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// The reference warehouse: one line per part kind
pub fn default_catalog() -> Vec<(CatalogEntry, u32)> {
    vec![
        (CatalogEntry::new(PartKind::Engine, 3000), 2),
        (CatalogEntry::new(PartKind::AirFilter, 100), 10),
        (CatalogEntry::new(PartKind::Battery, 500), 5),
        (CatalogEntry::new(PartKind::BrakingSystem, 1500), 3),
        (CatalogEntry::new(PartKind::Suspension, 1200), 4),
        (CatalogEntry::new(PartKind::Transmission, 2000), 2),
        (CatalogEntry::new(PartKind::FuelPump, 300), 8),
        (CatalogEntry::new(PartKind::CoolingSystem, 800), 5),
        (CatalogEntry::new(PartKind::BrakeDiscs, 1000), 4),
        (CatalogEntry::new(PartKind::SteeringSystem, 1000), 3),
    ]
}

pub fn default_arrivals() -> Vec<VehicleModel> {
    vec![
        VehicleModel::Audi,
        VehicleModel::Lada,
        VehicleModel::Mercedes,
        VehicleModel::Mustang,
    ]
}
