//! Core types for the repair shop simulation
//!
//! Part kinds, vehicle models, catalog entries and the live parts mounted on a vehicle.

use std::fmt;

/// Category of a vehicle component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Engine,
    BrakingSystem,
    Suspension,
    FuelPump,
    Battery,
    CoolingSystem,
    SteeringSystem,
    AirFilter,
    BrakeDiscs,
    Transmission,
}

impl PartKind {
    /// Every kind, in declaration order
    pub const ALL: [PartKind; 10] = [
        PartKind::Engine,
        PartKind::BrakingSystem,
        PartKind::Suspension,
        PartKind::FuelPump,
        PartKind::Battery,
        PartKind::CoolingSystem,
        PartKind::SteeringSystem,
        PartKind::AirFilter,
        PartKind::BrakeDiscs,
        PartKind::Transmission,
    ];

    /// Kind for a generation index. Indices past the last kind wrap around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Make of a vehicle arriving at the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleModel {
    Toyota,
    Bmw,
    Lada,
    Audi,
    Mercedes,
    Mustang,
}

impl fmt::Display for VehicleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleModel::Toyota => "Toyota",
            VehicleModel::Bmw => "BMW",
            VehicleModel::Lada => "Lada",
            VehicleModel::Audi => "Audi",
            VehicleModel::Mercedes => "Mercedes",
            VehicleModel::Mustang => "Mustang",
        };
        f.write_str(name)
    }
}

/// Immutable catalog record: what a part is and what it costs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: PartKind,
    pub price: u32,
}

impl CatalogEntry {
    pub fn new(kind: PartKind, price: u32) -> Self {
        Self { kind, price }
    }
}

/// A part mounted on a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub is_broken: bool,
}

impl Part {
    pub fn new(kind: PartKind, is_broken: bool) -> Self {
        Self { kind, is_broken }
    }

    pub fn broken(kind: PartKind) -> Self {
        Self::new(kind, true)
    }

    pub fn intact(kind: PartKind) -> Self {
        Self::new(kind, false)
    }
}
