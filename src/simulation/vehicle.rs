//! Vehicles brought to the shop and their part manifests

use log::debug;

use super::error::ShopError;
use super::random::RandomSource;
use super::types::{Part, PartKind, VehicleModel};

/// Smallest number of parts a vehicle is assembled with
pub const MIN_PARTS: u32 = 5;
/// Upper bound (exclusive) on the number of parts a vehicle is assembled with
pub const MAX_PARTS: u32 = 10;

/// A vehicle waiting for service
///
/// The manifest is fixed at assembly; only the broken flags change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub model: VehicleModel,
    parts: Vec<Part>,
}

impl Vehicle {
    /// Assemble a vehicle with a random manifest.
    ///
    /// Each part has a 1-in-2 chance of starting broken. If none did, one part
    /// picked at random is broken so the vehicle always has something to repair.
    pub fn assemble<R: RandomSource + ?Sized>(
        model: VehicleModel,
        rng: &mut R,
    ) -> Result<Self, ShopError> {
        let quantity = rng.next(MIN_PARTS, MAX_PARTS)?;
        let mut parts = Vec::with_capacity(quantity as usize);
        for index in 0..quantity as usize {
            let is_broken = rng.next(0, 2)? > 0;
            parts.push(Part::new(PartKind::from_index(index), is_broken));
        }

        if !parts.iter().any(|part| part.is_broken) {
            let forced = rng.next(0, quantity)? as usize;
            parts[forced].is_broken = true;
            debug!("{} came in with no faults, forcing {} broken", model, parts[forced].kind);
        }

        Ok(Self { model, parts })
    }

    /// Build a vehicle from an explicit manifest
    pub fn with_parts(model: VehicleModel, parts: Vec<Part>) -> Self {
        Self { model, parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Broken parts in manifest order
    pub fn broken_parts(&self) -> Vec<Part> {
        self.parts.iter().filter(|part| part.is_broken).copied().collect()
    }

    pub fn broken_kinds(&self) -> Vec<PartKind> {
        self.parts
            .iter()
            .filter(|part| part.is_broken)
            .map(|part| part.kind)
            .collect()
    }

    pub fn broken_count(&self) -> usize {
        self.parts.iter().filter(|part| part.is_broken).count()
    }

    /// Mutable handle to the `index`-th broken part, counted in the order
    /// [`Vehicle::broken_parts`] returns them
    pub fn broken_part_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.iter_mut().filter(|part| part.is_broken).nth(index)
    }

    /// Clear the broken flag of the `index`-th broken part
    pub fn repair_part_at(&mut self, index: usize) -> Option<PartKind> {
        let part = self.broken_part_mut(index)?;
        part.is_broken = false;
        Some(part.kind)
    }
}
