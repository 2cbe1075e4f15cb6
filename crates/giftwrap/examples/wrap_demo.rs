//! Print the hull of a few sampled clouds next to their sizes.
//!
//! Usage:
//!   cargo run -p giftwrap --example wrap_demo -- square
//!   cargo run -p giftwrap --example wrap_demo -- disk

use giftwrap::prelude::*;

fn main() {
    let shape = match std::env::args().nth(1).as_deref() {
        None | Some("square") => CloudShape::Square,
        Some("disk") => CloudShape::Disk,
        Some(other) => {
            eprintln!("usage: wrap_demo [square|disk] (got {other})");
            return;
        }
    };
    let cfg = CloudCfg {
        count: 40,
        half_extent: 50,
        shape,
    };
    for index in 0..3 {
        let pts = draw_points(cfg, ReplayToken { seed: 2025, index }).unwrap();
        let hull = convex_hull(&pts).unwrap();
        let verts = ring::vertices(&hull);
        println!(
            "sample {index}: n={}, h={}, 2·area={}",
            pts.len(),
            verts.len(),
            ring::twice_signed_area(&hull)
        );
        let listed: Vec<String> = verts.iter().map(|p| p.to_string()).collect();
        println!("  {}", listed.join(" → "));
    }
}
