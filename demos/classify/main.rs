//! Classifies two triangles given on the command line.
//!
//! Usage:
//! ```text
//! cargo run --example classify                                  # cleared snapshot
//! cargo run --example classify -- 0 0 10 0 5 10  4 4 6 4 5 6    # a..f as x y pairs
//! RUST_LOG=tripos=trace cargo run --example classify -- ...
//! ```

use tripos::error::InputError;
use tripos::geometry::POINT_COUNT;
use tripos::{ClassifyRelativePosition, Result, TrianglePair};

fn parse_pair(args: &[String]) -> Result<TrianglePair> {
    if args.len() != POINT_COUNT * 2 {
        return Err(InputError::WrongPointCount {
            expected: POINT_COUNT,
            found: args.len() / 2,
        }
        .into());
    }
    let mut coords = Vec::with_capacity(args.len());
    for arg in args {
        let value: f64 = arg
            .parse()
            .map_err(|e| InputError::InvalidCoordinate(format!("{arg:?}: {e}")))?;
        coords.push(value);
    }
    let mut pair = TrianglePair::cleared();
    for (index, xy) in coords.chunks_exact(2).enumerate() {
        pair = pair.with_point(index, xy[0], xy[1])?;
    }
    Ok(pair)
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for tripos.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tripos=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tripos=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pair = if args.is_empty() {
        TrianglePair::cleared()
    } else {
        parse_pair(&args)?
    };
    if !pair.within_plane() {
        tracing::warn!("points fall outside the 1300 x 540 input plane");
    }

    println!("{}", ClassifyRelativePosition::new(pair).report());
    Ok(())
}
