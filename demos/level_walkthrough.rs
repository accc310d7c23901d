//! Level Walkthrough
//!
//! This example loads a small level from JSON, clicks a few pieces and plays
//! back the animation completions.
//!
//! Key concepts:
//! - Configuration with automatic repair of equal directions
//! - Clicks turn a piece one quarter-turn clockwise
//! - A second click supersedes the rotation still in flight
//! - Grid snapshots with and without reorienting pieces
//!
//! Run with: cargo run --example level_walkthrough

use std::error::Error;
use switchyard::config::LevelConfiguration;
use switchyard::level::{GridPosition, Level};
use switchyard::track::RecordingDriver;

const LEVEL: &str = r#"{ "tracks": [
    { "x": 0, "z": 0, "track": { "direction1": "North", "direction2": "East" } },
    { "x": 1, "z": 0, "track": { "direction1": "West", "direction2": "East" } },
    { "x": 2, "z": 0, "track": { "direction1": "South", "direction2": "South" } }
] }"#;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Level Walkthrough Example ===\n");

    let config = LevelConfiguration::from_json(LEVEL)?;
    let mut level =
        Level::from_configuration(&config, true, |_, props| RecordingDriver::new(props.clone()))?;

    print_grid("Initial grid", &level);

    let elbow = GridPosition::new(0, 0);
    let first = level.click(elbow).ok_or("no track at the elbow position")?;
    let second = level.click(elbow).ok_or("no track at the elbow position")?;
    println!("\nClicked {} twice", elbow);
    println!("  first rotation:  {:?}", first.status());
    println!("  second rotation: {:?}", second.status());
    println!("  settled pieces:  {}", level.track_grid().len());

    level.finish_rotating(elbow)?;
    println!("\nAnimator finished at {}", elbow);
    println!("  second rotation: {:?}", second.status());

    let straight = GridPosition::new(1, 0);
    level.click(straight);
    level.finish_rotating(straight)?;

    print_grid("\nFinal grid", &level);

    println!("\n=== Example Complete ===");
    Ok(())
}

fn print_grid(title: &str, level: &Level<RecordingDriver>) {
    println!("{title}:");
    for (position, piece) in level.target_track_grid().iter() {
        println!("  {} -> {} ({:?})", position, piece, piece.shape());
    }
}
