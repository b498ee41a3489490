//! Text console front end for the shop
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use log::error;

use crate::simulation::{InspectionReport, Operator, OperatorInput, PartKind, RepairOutcome};

pub struct ConsoleOperator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write(&mut self, text: &str) {
        // The session carries on even if the terminal goes away
        if let Err(e) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
        {
            error!("Failed to write to console: {}", e);
        }
    }

    fn prompt(&mut self, question: &str) -> OperatorInput {
        self.write(question);
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => OperatorInput::Closed,
            Ok(_) => parse_answer(&line),
            Err(e) => {
                error!("Failed to read from console: {}", e);
                OperatorInput::Closed
            }
        }
    }

    fn list_broken(&mut self, broken: &[PartKind]) {
        let mut text = String::from("Parts needing repair:\n");
        for (number, kind) in broken.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", number + 1, kind));
        }
        self.write(&text);
    }
}

/// Parse one line of operator input as an integer
pub fn parse_answer(line: &str) -> OperatorInput {
    match line.trim().parse::<i64>() {
        Ok(number) => OperatorInput::Number(number),
        Err(_) => OperatorInput::Invalid,
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn inspect(&mut self, report: &InspectionReport) {
        self.write(&format!(
            "\nRepair shop open. Current balance: {:.2}\nWarehouse: {}\n\n{} has arrived for repair.\nDiagnostics done, repair estimate: {:.2}\n",
            report.balance, report.stock, report.model, report.repair_cost
        ));
        self.list_broken(&report.broken);
    }

    fn decide(&mut self) -> OperatorInput {
        self.prompt("\nRepair the vehicle? 1 - yes, 2 - no: ")
    }

    fn pick_part(&mut self, broken: &[PartKind]) -> OperatorInput {
        self.write("\n");
        self.list_broken(broken);
        self.prompt("\nNumber of the part to repair: ")
    }

    fn report(&mut self, outcome: &RepairOutcome) {
        let text = match outcome {
            RepairOutcome::Repaired(kind) => format!("\n{} repaired successfully\n", kind),
            RepairOutcome::Failed(kind) => format!("\nRepair of {} failed\n", kind),
            RepairOutcome::OutOfStock(kind) => format!("\nNo {} left in the warehouse\n", kind),
        };
        self.write(&text);
    }
}
