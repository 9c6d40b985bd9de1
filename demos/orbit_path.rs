use std::env;

use camino::Utf8PathBuf;
use orbiter::orbiter_errors::OrbiterError;
use orbiter::{BodyOrbit, SystemConfig};

/// Load a system description, print the orbit polylines, then run a few ticks.
///
/// Usage
/// -----------------
/// `cargo run --example orbit_path -- [system.json] [ticks]`
///
/// Defaults to the Earth/Moon fixture of the test suite and 10 ticks.
fn main() -> Result<(), OrbiterError> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .map(Utf8PathBuf::from)
        .unwrap_or_else(|| Utf8PathBuf::from("tests/data/earth_moon.json"));
    let ticks: usize = args.next().and_then(|n| n.parse().ok()).unwrap_or(10);

    let config = SystemConfig::from_path(&path)?;
    let mut sim = config.build_simulation()?;

    for body in sim.bodies() {
        if let BodyOrbit::Keplerian(elements) = &body.orbit {
            println!("{}:\n{elements}", body.name);
        }
        if let Some(path) = body.path() {
            println!("  path ({} points):", path.len());
            for point in path.iter().step_by(10) {
                println!("    {:>14.1} {:>14.1} {:>14.1}", point.x, point.y, point.z);
            }
        }
    }

    println!("\n{:>10} {:>10} {:>14} {:>14} {:>14}", "time", "body", "x", "y", "z");
    for _ in 0..ticks {
        let time = sim.time() + sim.clock().time_step();
        for frame in sim.tick() {
            println!(
                "{:>10.1} {:>10} {:>14.1} {:>14.1} {:>14.1}",
                time, frame.name, frame.position.x, frame.position.y, frame.position.z
            );
        }
    }
    Ok(())
}
