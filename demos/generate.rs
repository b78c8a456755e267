//! Headless dungeon generator: builds one layout and prints it.
//!
//! Usage:
//! ```text
//! cargo run --example generate                 # seed 0, default config
//! cargo run --example generate -- 1234         # explicit seed
//! cargo run --example generate -- 1234 --all   # run three resets in a row
//! ```

use dungeon_layout::room::RoomKind;
use dungeon_layout::{Dungeon, GenerationConfig, LayoutError, Snapshot};

/// Parsed CLI arguments.
struct CliArgs {
    seed: u64,
    /// Generate several dungeons from one random stream.
    all: bool,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let all = args.iter().any(|a| a == "--all");
    let seed = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .and_then(|a| a.parse().ok())
        .unwrap_or(0);
    CliArgs { seed, all }
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("stage: {}", snapshot.stage);
    println!("rooms ({}):", snapshot.rooms.len());
    for (_, room) in &snapshot.rooms {
        let rect = room.rect();
        let marker = if room.kind() == RoomKind::Boss { " [boss]" } else { "" };
        println!(
            "  #{:<3} at ({:>7.1}, {:>7.1}) size {:>3} x {:<3}{marker}",
            room.index(),
            rect.left,
            rect.bottom,
            rect.width,
            rect.height,
        );
    }
    println!(
        "graph: {} triangles, {} edges, {} in tree, {} connections",
        snapshot.triangles.len(),
        snapshot.edges.len(),
        snapshot.mst_edges.len(),
        snapshot.room_connections.len(),
    );
    println!("hallways ({}):", snapshot.hallways.len());
    for hallway in &snapshot.hallways {
        println!(
            "  ({:.1}, {:.1}) -> ({:.1}, {:.1})  length {:.1}",
            hallway.start.x,
            hallway.start.y,
            hallway.end.x,
            hallway.end.y,
            hallway.length(),
        );
    }
    println!("unused secondary rooms: {}", snapshot.deleted_rooms.len());
}

fn main() -> Result<(), LayoutError> {
    // Default: WARN for everything, INFO for dungeon_layout.
    // Override with RUST_LOG env var (e.g. RUST_LOG=dungeon_layout=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("dungeon_layout=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args();
    let mut dungeon = Dungeon::new(GenerationConfig::default(), args.seed)?;
    dungeon.run_to_completion()?;
    print_snapshot(&dungeon.snapshot());

    if args.all {
        for (rooms, tightness) in [(8, 1.25), (10, 1.0)] {
            dungeon.reset(rooms, tightness)?;
            dungeon.run_to_completion()?;
            println!();
            print_snapshot(&dungeon.snapshot());
        }
    }

    for warning in dungeon.warnings() {
        println!("warning: {warning:?}");
    }
    Ok(())
}
