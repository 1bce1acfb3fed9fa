// tests/game_tests.rs

use qradar::game::CellMark;
use qradar::{Board, GameConfig, QuantumBattleship, RadarError, Verdict};

#[test]
fn test_seeded_game_is_consistent() -> Result<(), RadarError> {
    let config = GameConfig { seed: Some(2024), ..GameConfig::default() };
    let mut rng = config.rng();
    let game = QuantumBattleship::new(&config, &mut rng)?;
    let ships = game.board().ships().clone();
    let empty_rows: Vec<usize> = (0..8).filter(|r| ships.iter().all(|(sr, _)| sr != r)).collect();

    let report = game.play(&mut rng)?;

    assert_eq!(report.size, 8);
    assert_eq!(report.total_ships, 12);
    assert_eq!(report.quantum_scans, 16);
    assert_eq!(report.row_verdicts.len(), 8);
    assert_eq!(report.column_verdicts.len(), 8);
    assert_eq!(report.total_hits, report.candidates.len());
    assert_eq!(report.classical_worst_case, 64);
    assert!((report.ev_score - report.total_hits as f64 / 64.0).abs() < 1e-12);
    assert!((report.classical_average - 32.0).abs() < 1e-12);

    // A row without ships can never light up
    for r in empty_rows {
        assert_eq!(report.row_verdicts[r], Verdict::Miss, "empty row {} detected", r);
    }

    // Candidates sit on detected crossings, and hits are the candidates that held a ship
    for (r, c) in &report.candidates {
        assert_eq!(report.row_verdicts[*r], Verdict::Detect);
        assert_eq!(report.column_verdicts[*c], Verdict::Detect);
    }
    let hits = report.candidates.iter().filter(|coord| ships.contains(*coord)).count();
    assert_eq!(report.ships_found, hits);
    assert_eq!(report.all_found, hits == ships.len());

    let x_marks = report.final_board.lines().skip(3).map(|l| l.matches('X').count()).sum::<usize>();
    assert_eq!(x_marks, report.ships_found);
    Ok(())
}

#[test]
fn test_same_seed_same_game() -> Result<(), RadarError> {
    let config = GameConfig { seed: Some(7), size: 6, ship_lengths: vec![3, 2], shots: None };
    let run = || -> Result<_, RadarError> {
        let mut rng = config.rng();
        QuantumBattleship::new(&config, &mut rng)?.play(&mut rng)
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn test_single_ship_is_pinpointed() -> Result<(), RadarError> {
    // Row 0 and column 0 are [1, 0]: the marked half cancels |0⟩, so both always detect
    let config = GameConfig { size: 2, ship_lengths: vec![1], ..GameConfig::default() };
    let game = QuantumBattleship::with_board(&config, Board::from_ships(2, [(0, 0)]))?;
    let mut rng = config.rng();
    let report = game.play(&mut rng)?;

    assert_eq!(report.row_verdicts, vec![Verdict::Detect, Verdict::Miss]);
    assert_eq!(report.column_verdicts, vec![Verdict::Detect, Verdict::Miss]);
    assert_eq!(report.candidates, vec![(0, 0)]);
    assert_eq!(report.ships_found, 1);
    assert!(report.all_found);
    assert!((report.ev_score - 0.25).abs() < 1e-12);
    assert!(report.to_string().contains("All ships found!"));
    Ok(())
}

#[test]
fn test_full_row_ship_hides_from_row_scan() -> Result<(), RadarError> {
    // A ship filling a power-of-two row flips every sign, which is a global phase
    let config = GameConfig { size: 4, ship_lengths: vec![4], seed: Some(3), shots: None };
    let board = Board::from_ships(4, (0..4).map(|c| (0, c)));
    let game = QuantumBattleship::with_board(&config, board)?;
    let mut rng = config.rng();
    let report = game.play(&mut rng)?;

    assert_eq!(report.row_verdicts, vec![Verdict::Miss; 4]);
    assert!(report.candidates.is_empty());
    assert_eq!(report.ships_found, 0);
    assert!(!report.all_found);
    assert!(report.to_string().contains("Not all ships found."));
    Ok(())
}

#[test]
fn test_manual_turns_update_radar() -> Result<(), RadarError> {
    let config = GameConfig { size: 2, ship_lengths: vec![1], seed: Some(1), shots: Some(4) };
    let mut game = QuantumBattleship::with_board(&config, Board::from_ships(2, [(1, 1)]))?;
    let mut rng = config.rng();

    let rows = game.scan_rows(&mut rng)?;
    assert_eq!(rows, vec![Verdict::Miss, Verdict::Detect]);
    assert_eq!(game.quantum_scans(), 2);
    assert_eq!(game.radar().get((0, 0)), Some(CellMark::Miss));
    assert_eq!(game.radar().get((1, 1)), Some(CellMark::Unknown));

    game.scan_columns(&mut rng)?;
    assert_eq!(game.quantum_scans(), 4);
    assert!(game.probe((1, 1)));
    assert_eq!(game.radar().get((1, 1)), Some(CellMark::Hit));
    Ok(())
}

#[test]
fn test_invalid_configs_are_rejected() {
    let mut rng = GameConfig::default().rng();
    let bad_ship = GameConfig { size: 4, ship_lengths: vec![5], ..GameConfig::default() };
    assert!(matches!(
        QuantumBattleship::new(&bad_ship, &mut rng),
        Err(RadarError::InvalidConfiguration { .. })
    ));
    let no_fleet = GameConfig { ship_lengths: vec![], ..GameConfig::default() };
    assert!(matches!(
        QuantumBattleship::new(&no_fleet, &mut rng),
        Err(RadarError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_report_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig { size: 2, ship_lengths: vec![1], ..GameConfig::default() };
    let game = QuantumBattleship::with_board(&config, Board::from_ships(2, [(0, 0)]))?;
    let mut rng = config.rng();
    let report = game.play(&mut rng)?;

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["row_verdicts"], serde_json::json!(["DETECT", "MISS"]));
    assert_eq!(json["candidates"], serde_json::json!([[0, 0]]));
    assert_eq!(json["ships_found"], 1);
    assert_eq!(json["all_found"], true);
    assert!(json.get("hidden_board").is_none());
    Ok(())
}
