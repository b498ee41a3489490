//! Parts warehouse for the repair shop
//!
//! The warehouse is stocked once from a catalog and only ever drawn down.

use log::debug;

use super::error::ShopError;
use super::types::{CatalogEntry, PartKind};

/// A catalog entry together with its remaining stock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub entry: CatalogEntry,
    pub count: u32,
}

/// The shop's parts warehouse
///
/// Lines keep the order they were stocked in. Several lines may share a kind;
/// lookups always resolve to the first matching line.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    lines: Vec<StockLine>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Build a warehouse from `(entry, count)` pairs in catalog order
    pub fn from_catalog<I>(catalog: I) -> Self
    where
        I: IntoIterator<Item = (CatalogEntry, u32)>,
    {
        let lines = catalog
            .into_iter()
            .map(|(entry, count)| StockLine { entry, count })
            .collect();
        Self { lines }
    }

    /// Add a catalog line at the end of the warehouse
    pub fn stock(&mut self, entry: CatalogEntry, count: u32) {
        self.lines.push(StockLine { entry, count });
    }

    /// Take one part of the given kind out of stock.
    /// Returns `None` when no line of that kind has any left.
    pub fn withdraw(&mut self, kind: PartKind) -> Option<CatalogEntry> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.entry.kind == kind && line.count > 0)?;
        line.count -= 1;
        debug!("Withdrew {} from stock ({} left)", kind, line.count);
        Some(line.entry)
    }

    /// Catalog price of a kind, regardless of remaining stock
    pub fn price_of(&self, kind: PartKind) -> Result<u32, ShopError> {
        self.lines
            .iter()
            .find(|line| line.entry.kind == kind)
            .map(|line| line.entry.price)
            .ok_or(ShopError::NotFound(kind))
    }

    /// Total remaining stock across every line of a kind
    pub fn count_of(&self, kind: PartKind) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.entry.kind == kind)
            .map(|line| line.count)
            .sum()
    }

    pub fn lines(&self) -> &[StockLine] {
        &self.lines
    }

    /// Human-readable stock summary in catalog order
    pub fn describe(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} - {}; ", line.entry.kind, line.count))
            .collect()
    }
}
