// tests/scanner_tests.rs

use approx::assert_abs_diff_eq;
use qradar::{Line, LineScanner, RadarError, ScanCircuit, Verdict, scan};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Helper function to build a line from 0/1 literals
fn line(bits: &[u8]) -> Line {
    Line::from_bits(bits).expect("test lines hold only 0 and 1")
}

// Fraction of `trials` scans that report DETECT
fn detect_rate(scanner: &LineScanner, line: &Line, trials: usize, seed: u64) -> Result<f64, RadarError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut detects = 0;
    for _ in 0..trials {
        if scanner.scan(line, &mut rng)?.is_detect() {
            detects += 1;
        }
    }
    Ok(detects as f64 / trials as f64)
}

#[test]
fn test_unmarked_lines_always_miss() -> Result<(), RadarError> {
    let mut rng = StdRng::seed_from_u64(11);
    for len in 1..=20 {
        for shots in [None, Some(1), Some(5), Some(50)] {
            let verdict = scan(&Line::empty(len), shots, &mut rng)?;
            assert_eq!(verdict, Verdict::Miss, "length {} with {:?} shots", len, shots);
        }
    }
    Ok(())
}

#[test]
fn test_empty_line_is_miss() -> Result<(), RadarError> {
    let mut rng = StdRng::seed_from_u64(0);
    let report = LineScanner::new().scan_detailed(&Line::default(), &mut rng)?;
    assert_eq!(report.verdict(), Verdict::Miss);
    assert_eq!(report.shots(), 0);
    assert!(report.counts().is_empty());
    Ok(())
}

#[test]
fn test_concrete_line_detects_almost_always() -> Result<(), RadarError> {
    // P(|00⟩) = 0.25 and three shots: DETECT with probability 1 - 0.25^3 ≈ 0.984
    let target = line(&[0, 0, 1, 0]);
    let mut rng = StdRng::seed_from_u64(5);
    let report = LineScanner::new().scan_detailed(&target, &mut rng)?;
    assert_eq!(report.num_qubits(), 2);
    assert_eq!(report.shots(), 3);
    assert_abs_diff_eq!(report.zero_probability(), 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(report.detect_probability(), 1.0 - 0.25f64.powi(3), epsilon = 1e-12);

    let rate = detect_rate(&LineScanner::new(), &target, 2000, 17)?;
    assert!(rate > 0.96, "detect rate {} too low", rate);
    Ok(())
}

#[test]
fn test_single_mark_rate_matches_prediction() -> Result<(), RadarError> {
    for (len, position) in [(5, 0), (6, 3), (8, 7)] {
        let mut cells = vec![0u8; len];
        cells[position] = 1;
        let target = line(&cells);

        let mut rng = StdRng::seed_from_u64(1);
        let expected = LineScanner::new().scan_detailed(&target, &mut rng)?.detect_probability();
        let rate = detect_rate(&LineScanner::new(), &target, 2000, 23)?;
        assert!(
            (rate - expected).abs() < 0.05,
            "length {} mark {}: rate {} vs expected {}",
            len,
            position,
            rate,
            expected
        );
    }
    Ok(())
}

#[test]
fn test_half_line_mark_is_certain() -> Result<(), RadarError> {
    // A single cell padded to two entries: the marked half cancels |0⟩ exactly
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        assert_eq!(scan(&line(&[1]), None, &mut rng)?, Verdict::Detect);
        assert_eq!(scan(&line(&[0, 1]), Some(1), &mut rng)?, Verdict::Detect);
    }
    Ok(())
}

#[test]
fn test_fully_marked_power_of_two_line_is_invisible() -> Result<(), RadarError> {
    // Every entry flipped is a global phase; the detector cannot see it
    let mut rng = StdRng::seed_from_u64(31);
    for len in [2, 4, 8, 16] {
        let target = Line::new(vec![true; len]);
        let report = LineScanner::with_shots(32).scan_detailed(&target, &mut rng)?;
        assert_eq!(report.verdict(), Verdict::Miss, "length {}", len);
        assert_abs_diff_eq!(report.zero_probability(), 1.0, epsilon = 1e-9);
    }

    // Padding breaks the symmetry for other lengths
    let padded = Line::new(vec![true; 3]);
    let report = LineScanner::new().scan_detailed(&padded, &mut rng)?;
    assert_abs_diff_eq!(report.zero_probability(), 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_more_shots_raise_detection() -> Result<(), RadarError> {
    let target = line(&[0, 0, 0, 0, 0, 0, 0, 1]);
    let few = detect_rate(&LineScanner::with_shots(1), &target, 2000, 3)?;
    let many = detect_rate(&LineScanner::with_shots(20), &target, 2000, 3)?;
    assert!(many > few, "20 shots ({}) should beat 1 shot ({})", many, few);
    assert!(many > 0.99);
    Ok(())
}

#[test]
fn test_invalid_input_and_configuration() {
    assert!(matches!(Line::from_bits(&[0, 2, 1]), Err(RadarError::InvalidInput { .. })));
    assert!(matches!(Line::from_bits(&[-1i32]), Err(RadarError::InvalidInput { .. })));
    assert!(matches!("0,x,1".parse::<Line>(), Err(RadarError::InvalidInput { .. })));

    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        LineScanner::with_shots(0).scan(&line(&[0, 1]), &mut rng),
        Err(RadarError::InvalidConfiguration { .. })
    ));
    assert!(matches!(ScanCircuit::for_line(&Line::default(), None), Err(RadarError::InvalidInput { .. })));
}

#[test]
fn test_parsed_line_scans_like_built_line() -> Result<(), RadarError> {
    let parsed: Line = "0, 0, 1, 0".parse()?;
    assert_eq!(parsed, line(&[0, 0, 1, 0]));

    let mut a = StdRng::seed_from_u64(77);
    let mut b = StdRng::seed_from_u64(77);
    let left = LineScanner::new().scan_detailed(&parsed, &mut a)?;
    let right = LineScanner::new().scan_detailed(&line(&[0, 0, 1, 0]), &mut b)?;
    assert_eq!(left, right);
    Ok(())
}

#[test]
fn test_concurrent_scans_with_own_generators() -> Result<(), RadarError> {
    let scanner = LineScanner::new();
    let marked = line(&[0, 0, 1, 0]);
    let unmarked = Line::empty(6);

    let results: Vec<Result<(usize, usize), RadarError>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let (marked, unmarked) = (&marked, &unmarked);
                s.spawn(move || -> Result<(usize, usize), RadarError> {
                    let mut rng = StdRng::seed_from_u64(1000 + t);
                    let mut detects = 0;
                    let mut false_alarms = 0;
                    for _ in 0..250 {
                        if scanner.scan(marked, &mut rng)?.is_detect() {
                            detects += 1;
                        }
                        if scanner.scan(unmarked, &mut rng)?.is_detect() {
                            false_alarms += 1;
                        }
                    }
                    Ok((detects, false_alarms))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("scan thread panicked")).collect()
    });

    for result in results {
        let (detects, false_alarms) = result?;
        assert_eq!(false_alarms, 0);
        assert!(detects > 225, "only {} of 250 detects", detects);
    }
    Ok(())
}
