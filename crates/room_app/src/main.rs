//! # room-query
//!
//! Loads a JSON world file, builds the [`RoomBounds`] for one room and
//! answers a single query against it. The result is printed to stdout as
//! one JSON object; logs go to stderr.
//!
//! ```text
//! room-query --world level.json --room 2 clamp 12.5
//! room-query --world level.json side-door left
//! ```

mod query;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use room_bounds::RoomBounds;
use room_math::Transform;
use room_model::WorldFile;
use tracing::info;
use tracing_subscriber::EnvFilter;

use query::Query;

#[derive(Parser)]
#[command(name = "room-query", about = "Query horizontal room boundaries and doors")]
struct Args {
    /// Path to the JSON world file
    #[arg(short, long, env = "ROOM_WORLD")]
    world: PathBuf,

    /// Index of the room to query
    #[arg(short, long, default_value_t = 0)]
    room: usize,

    #[command(subcommand)]
    query: Query,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("room_query=info".parse()?))
        .init();

    let args = Args::parse();

    info!(path = %args.world.display(), "loading world");
    let world = WorldFile::load(&args.world)?;
    let (state, settings) = world.into_parts();

    let mut bounds = RoomBounds::initialize(&state, args.room, &settings)
        .with_context(|| format!("cannot build bounds for room {}", args.room))?;
    if args.query.wants_indicator() {
        bounds = bounds.with_indicator(Transform::default());
    }

    let outcome = args.query.run(&mut bounds);
    info!(room = args.room, "query answered");
    println!("{}", serde_json::to_string(&outcome)?);

    Ok(())
}
