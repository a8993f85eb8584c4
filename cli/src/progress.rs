//! Cosmetic progress display for the simulated settlement pipeline.
//!
//! The real Merkle accumulator and settlement proof live in an external
//! collaborator that is not wired up here; the condense command plays
//! this step sequence so the user sees where a live settlement would be.
//! Nothing in this module touches the cryptographic path, and skipping
//! it changes no state.

use std::thread;
use std::time::Duration;

use colored::Colorize;

pub struct ProgressStep {
    pub label: &'static str,
    pub millis: u64,
}

/// The condense pipeline as presented to the user.
pub const CONDENSE_STEPS: &[ProgressStep] = &[
    ProgressStep { label: "Loading witness data", millis: 1500 },
    ProgressStep { label: "Generating ZK circuit", millis: 1500 },
    ProgressStep { label: "Computing proof", millis: 1500 },
    ProgressStep { label: "Verifying locally", millis: 1500 },
    ProgressStep { label: "Submitting to chain", millis: 1500 },
];

/// Print each step, pausing between them.
pub fn play(steps: &[ProgressStep]) {
    for step in steps {
        println!("  {} {}", "●".cyan(), step.label);
        thread::sleep(Duration::from_millis(step.millis));
    }
    println!("  {} {}", "✓".green(), "Done".green());
}
