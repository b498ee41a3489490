use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;

use car_service::console::ConsoleOperator;
use car_service::simulation::{AutoOperator, RepairPolicy, ShopConfig, ShopRng, ShopSimulation};

#[derive(Parser)]
#[command(name = "car_service")]
#[command(about = "Auto repair shop simulation")]
struct Cli {
    /// Run without prompting, repairing the first broken part of every vehicle
    #[arg(long)]
    headless: bool,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Starting cash balance
    #[arg(long)]
    cash: Option<f64>,

    /// Bill repairs: consume stock, credit successes, charge penalties
    #[arg(long)]
    billed: bool,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,car_service=info"),
    )
    .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = ShopConfig::default();
    if let Some(cash) = cli.cash {
        config = config.with_balance(cash);
    }
    if cli.billed {
        config = config.with_policy(RepairPolicy::Billed);
    }

    let rng = match cli.seed {
        Some(seed) => ShopRng::with_seed(seed),
        None => ShopRng::new(),
    };
    let mut shop = ShopSimulation::from_config(&config, rng)?;

    let summary = if cli.headless {
        println!("Running repair shop in headless mode...");
        let mut operator = AutoOperator::new();
        let summary = shop.run_loop(&mut operator)?;
        print_headless_log(&operator);
        summary
    } else {
        let stdin = io::stdin();
        let mut operator = ConsoleOperator::new(stdin.lock(), io::stdout());
        shop.run_loop(&mut operator)?
    };

    info!("=== SHOP CLOSED ===");
    info!("Vehicles served: {}", summary.vehicles_served);
    info!("Vehicles skipped: {}", summary.vehicles_skipped);
    info!(
        "Repairs: {} attempted, {} succeeded, {} failed",
        summary.repair_attempts, summary.repairs_succeeded, summary.repairs_failed
    );
    info!("Final balance: {:.2}", summary.final_balance);
    println!();
    println!("=== Final State ===");
    println!("{}", shop.account.summary());
    println!("Warehouse: {}", shop.inventory.describe());

    Ok(())
}

fn print_headless_log(operator: &AutoOperator) {
    for (report, outcome) in &operator.log {
        let outcome = match outcome {
            Some(outcome) => format!("{:?}", outcome),
            None => "no repair".to_string(),
        };
        println!(
            "{}: estimate {:.2}, broken [{}] -> {}",
            report.model,
            report.repair_cost,
            report
                .broken
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            outcome
        );
    }
}
