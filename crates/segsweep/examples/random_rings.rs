//! Classify a few random star rings, before and after swapping two vertices.
//!
//! Usage:
//!   cargo run -p segsweep --example random_rings -- [count] [vertices]
//!
//! A star ring is simple by construction; swapping two non-adjacent vertices
//! usually folds it over itself.

use segsweep::random::{draw_star_ring, ReplayToken, RingCfg, VertexCount};
use segsweep::{find_intersection, is_simple, Segment};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);
    let vertices: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);

    let cfg = RingCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RingCfg::default()
    };
    for index in 0..count {
        let ring = draw_star_ring(cfg, ReplayToken::new(2025, index));
        let mut folded = ring.clone();
        let k = folded.len() / 2;
        folded.vertices.swap(1, k);

        let edges: Vec<Segment<f64>> = folded.edges().collect();
        let pair = match find_intersection(&edges) {
            Ok(Some((i, j))) => format!("edges {i} and {j} intersect"),
            Ok(None) => "no intersecting edges".to_string(),
            Err(e) => format!("error: {e}"),
        };
        println!(
            "ring {index}: n={} simple={:?} | swapped 1<->{k}: simple={:?} ({pair})",
            ring.len() - 1,
            is_simple(&ring),
            is_simple(&folded),
        );
    }
}
