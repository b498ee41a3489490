//! Console front end tests
//!
//! Sessions are scripted through in-memory readers and writers.

use std::io::Cursor;

use car_service::console::{parse_answer, ConsoleOperator};
use car_service::simulation::{
    CashAccount, CatalogEntry, Inventory, OperatorInput, Part, PartKind, RandomSource,
    RepairPolicy, ShopPhase, ShopSimulation, Vehicle, VehicleModel,
};

/// Always draws the lowest value in range, so every repair succeeds
struct LowestDraw;

impl RandomSource for LowestDraw {
    fn draw(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

fn session(input: &str, vehicles: Vec<Vehicle>) -> (String, ShopSimulation<LowestDraw>) {
    let inventory = Inventory::from_catalog([
        (CatalogEntry::new(PartKind::Engine, 3000), 2),
        (CatalogEntry::new(PartKind::Battery, 500), 5),
    ]);
    let mut shop = ShopSimulation::new(
        CashAccount::default(),
        inventory,
        vehicles,
        RepairPolicy::AsQuoted,
        LowestDraw,
    );
    let mut operator = ConsoleOperator::new(Cursor::new(input.to_string()), Vec::new());
    shop.run_loop(&mut operator).unwrap();

    let output = String::from_utf8(operator.into_output()).unwrap();
    (output, shop)
}

fn two_fault_vehicle() -> Vehicle {
    Vehicle::with_parts(
        VehicleModel::Mustang,
        vec![
            Part::broken(PartKind::Engine),
            Part::intact(PartKind::Engine),
            Part::broken(PartKind::Battery),
        ],
    )
}

#[test]
fn test_parse_answer() {
    assert_eq!(parse_answer("1\n"), OperatorInput::Number(1));
    assert_eq!(parse_answer("  2  \r\n"), OperatorInput::Number(2));
    assert_eq!(parse_answer("-4"), OperatorInput::Number(-4));
    assert_eq!(parse_answer("yes\n"), OperatorInput::Invalid);
    assert_eq!(parse_answer("\n"), OperatorInput::Invalid);
}

#[test]
fn test_console_shows_inspection() {
    let (output, _) = session("2\n", vec![two_fault_vehicle()]);

    assert!(output.contains("Current balance: 10000.00"));
    assert!(output.contains("Warehouse: Engine - 2; Battery - 5; "));
    assert!(output.contains("Mustang has arrived for repair."));
    assert!(output.contains("repair estimate: 4375.00"));
    assert!(output.contains("1. Engine\n2. Battery\n"));
}

#[test]
fn test_console_repairs_chosen_part() {
    let (output, shop) = session("1\n2\n", vec![two_fault_vehicle()]);

    assert!(output.contains("Number of the part to repair: "));
    assert!(output.contains("Battery repaired successfully"));
    assert_eq!(shop.summary().repairs_succeeded, 1);
    assert_eq!(shop.pending(), 0);
    assert_eq!(shop.phase(), ShopPhase::Idle);
}

#[test]
fn test_console_ignores_bad_part_number() {
    let (output, shop) = session("1\nthree\n", vec![two_fault_vehicle()]);

    assert!(!output.contains("repaired successfully"));
    assert_eq!(shop.summary().repair_attempts, 0);
    assert_eq!(shop.summary().vehicles_served, 1);
}

#[test]
fn test_console_end_of_input_leaves_queue() {
    let (output, shop) = session("", vec![two_fault_vehicle(), two_fault_vehicle()]);

    assert_eq!(output.matches("has arrived for repair.").count(), 1);
    assert_eq!(shop.pending(), 2);
}
