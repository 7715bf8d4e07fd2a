//! quickstart — smallest example for the rust_simlog streaming logger.
//!
//! Streams the thermodynamic quantities of a tiny damped-oscillator
//! "simulation" to stdout.  Halfway through the run the source starts
//! reporting pressure, so the table re-emits its header with the grown
//! column set — no wiring needed on the writer side.

use anyhow::Result;

use sl_core::{Category, CategorySet, QuantitySource, QuantityTree, StdoutSink};
use sl_output::TableBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const STEPS:     u64 = 20;
const DT:        f64 = 0.05;
const PRESSURE_FROM: u64 = 10; // step at which the extra quantity appears

// ── Quantity source ───────────────────────────────────────────────────────────

/// Damped harmonic oscillator standing in for a real simulation.
struct Oscillator {
    step: u64,
}

impl Oscillator {
    fn time(&self) -> f64 {
        self.step as f64 * DT
    }
}

impl QuantitySource for Oscillator {
    fn categories(&self) -> CategorySet {
        Category::Scalar | Category::Text
    }

    fn collect(&mut self) -> QuantityTree {
        let t = self.time();

        let mut thermo = QuantityTree::new();
        thermo.insert_value("kinetic_energy", 42.0 * (-t).exp() * (6.0 * t).cos().powi(2));
        thermo.insert_value("temperature", 1.5 + 0.25 * (3.0 * t).sin());
        if self.step >= PRESSURE_FROM {
            thermo.insert_value("pressure", 0.8 * (-0.5 * t).exp());
        }

        let mut md = QuantityTree::new();
        md.insert_group("thermo", thermo);
        // Sequence data rides along but never lands in the table.
        md.insert_value("velocities", vec![0.1 * t, -0.2 * t, 0.3 * t]);

        let mut tree = QuantityTree::new();
        tree.insert_value("step", self.step as i64);
        tree.insert_group("md", md);
        tree.insert_value("state", if self.step < 5 { "warmup" } else { "sampling" });
        tree
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // 1. Build the writer: stdout sink, compact columns, truncated headers.
    let mut table = TableBuilder::new(Oscillator { step: 0 }, StdoutSink::new())
        .min_column_width(14)
        .max_header_len(22)
        .build()?;

    // 2. Drive it once per "sampling event", as a scheduler would.
    for step in 0..STEPS {
        table.source_mut().step = step;
        table.write()?;
    }

    Ok(())
}
