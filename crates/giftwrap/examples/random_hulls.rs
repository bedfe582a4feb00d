//! Print hull sizes for a few reproducible point clouds.
//!
//! Usage:
//!   cargo run -p giftwrap --example random_hulls -- disk
//!   cargo run -p giftwrap --example random_hulls -- grid
//!
//! - disk mode: uniform points in the unit disk
//! - grid mode: box samples snapped to a coarse grid (duplicates + collinear runs)

use giftwrap::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let cfg = match mode.as_str() {
        "disk" => CloudCfg {
            count: 200,
            shape: CloudShape::Disk,
            ..CloudCfg::default()
        },
        "grid" => CloudCfg {
            count: 200,
            grid: Some(0.25),
            ..CloudCfg::default()
        },
        _ => {
            eprintln!("usage: random_hulls [disk|grid]");
            return;
        }
    };
    for index in 0..5 {
        let tok = ReplayToken { seed: 2025, index };
        let pts = draw_point_cloud(cfg, tok).unwrap();
        let hull = convex_hull(&pts).unwrap();
        println!(
            "{mode} sample {index}: N={}, H={}, area={:.4}",
            pts.len(),
            hull.len(),
            hull.signed_area()
        );
    }
}
