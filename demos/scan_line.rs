// demos/scan_line.rs

//! Walks one line through the detector stage by stage, then repeats the scan
//! to show how often each verdict comes up.
//!
//! Run with `cargo run --example scan_line`.

use qradar::{Line, LineScanner, RadarError, ScanCircuit, Verdict};
use rand::SeedableRng;
use rand::rngs::StdRng;

const TRIALS: usize = 1000;

fn main() -> Result<(), RadarError> {
    let line = Line::from_bits(&[0u8, 0, 1, 0])?;
    println!("Line: {}", line);

    let circuit = ScanCircuit::for_line(&line, None)?;
    println!("\nCircuit:\n{}", circuit);

    println!("State after each stage:");
    for (stage, state) in circuit.evolve_traced()? {
        println!("  {:<24} {}", stage.to_string(), state);
    }

    let mut rng = StdRng::seed_from_u64(42);
    let scanner = LineScanner::new();

    let report = scanner.scan_detailed(&line, &mut rng)?;
    println!("\nOne scan:\n{}", report);
    println!("Chance of DETECT with {} shots: {:.4}", report.shots(), report.detect_probability());

    for (name, probe) in [("marked", line), ("empty", Line::empty(4))] {
        let mut detects = 0;
        for _ in 0..TRIALS {
            if scanner.scan(&probe, &mut rng)? == Verdict::Detect {
                detects += 1;
            }
        }
        println!("{:>6} line: DETECT {} / {}", name, detects, TRIALS);
    }

    Ok(())
}
