//! Cash account for the repair shop
//!
//! Tracks the shop's balance along with running totals of the work it has done.

/// Starting balance for the shop
pub const STARTING_BALANCE: f64 = 10_000.0;

/// Surcharge applied on top of a part's catalog price when quoting a repair
pub const REPAIR_MARKUP_PERCENT: u32 = 25;

/// Charged when the shop turns a vehicle away (billed policy only)
pub const FIXED_PENALTY: f64 = 500.0;

/// Charged per part the shop fails to repair (billed policy only)
pub const PENALTY_PER_PART: f64 = 300.0;

/// Shop balance and work counters
#[derive(Debug, Clone, PartialEq)]
pub struct CashAccount {
    /// Current cash balance. May go negative after penalties.
    pub balance: f64,

    /// Vehicles taken out of the queue and handled
    pub vehicles_served: usize,

    /// Vehicles the operator declined to repair
    pub vehicles_skipped: usize,

    /// Repair attempts that succeeded
    pub repairs_succeeded: usize,

    /// Repair attempts that failed or had no stock to work with
    pub repairs_failed: usize,
}

impl Default for CashAccount {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}

impl CashAccount {
    pub fn new(balance: f64) -> Self {
        Self {
            balance,
            vehicles_served: 0,
            vehicles_skipped: 0,
            repairs_succeeded: 0,
            repairs_failed: 0,
        }
    }

    pub fn earn(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Penalties are always paid, even into a negative balance
    pub fn charge(&mut self, amount: f64) {
        self.balance -= amount;
    }

    pub fn repair_attempts(&self) -> usize {
        self.repairs_succeeded + self.repairs_failed
    }

    pub fn summary(&self) -> String {
        format!(
            "Balance: {:.2} | Served: {} | Skipped: {} | Repairs: {} ok / {} failed",
            self.balance,
            self.vehicles_served,
            self.vehicles_skipped,
            self.repairs_succeeded,
            self.repairs_failed
        )
    }
}

/// Quoted price of a single part repair: catalog price plus markup
pub fn quote_part(price: u32) -> f64 {
    let price = f64::from(price);
    price + price * f64::from(REPAIR_MARKUP_PERCENT) / 100.0
}
