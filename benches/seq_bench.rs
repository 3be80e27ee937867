// Sequence benchmark - measures indexed lookup against the linear fallback,
// and batch construction throughput.

use std::time::Instant;

use runic::{HasLength, Mergeable, RleSeq, RunVec, Spanning};

#[derive(Debug, Clone, Copy)]
struct Block {
    label: u32,
    size: usize,
}

impl Mergeable for Block {
    fn can_merge(&self, other: &Self) -> bool {
        self.label == other.label
    }

    fn merge(&mut self, other: Self) {
        self.size += other.size;
    }
}

impl HasLength for Block {
    fn len(&self) -> usize {
        self.size
    }
}

impl Spanning for Block {}

fn main() {
    let num_runs = 100_000;

    // Distinct labels so nothing merges: worst case for lookup.
    println!("Building sequence with {} runs...", num_runs);
    let blocks = (0..num_runs).map(|i| Block {
        label: i as u32,
        size: 1 + (i % 7),
    });

    let start = Instant::now();
    let seq = RleSeq::from_elements(blocks.clone());
    println!("  batch construction: {:?}", start.elapsed());
    println!("  runs: {}, span: {}", seq.len(), seq.span());

    let span = seq.span();
    let lookups = 10_000;
    let positions: Vec<usize> = (0..lookups).map(|i| i * 7919 % span).collect();

    // Indexed lookup through the wrapper (first call pays the index build).
    println!("\n=== find() via prefix index ===");
    let start = Instant::now();
    let mut checksum = 0usize;
    for &pos in &positions {
        let (run, offset) = seq.find(pos).unwrap();
        checksum = checksum.wrapping_add(run + offset);
    }
    let indexed_time = start.elapsed();
    println!("  {} lookups: {:?}", lookups, indexed_time);
    println!("  per lookup: {:?}", indexed_time / lookups as u32);

    // Linear fallback on the raw run array.
    println!("\n=== find() linear fallback ===");
    let raw = RunVec::from_elements(blocks);
    let linear_lookups = 200;
    let start = Instant::now();
    for &pos in &positions[..linear_lookups] {
        let (run, offset) = raw.find(pos).unwrap();
        checksum = checksum.wrapping_add(run + offset);
    }
    let linear_time = start.elapsed();
    println!("  {} lookups: {:?}", linear_lookups, linear_time);
    println!("  per lookup: {:?}", linear_time / linear_lookups as u32);

    // Cursor walk over the whole sequence.
    println!("\n=== cursor walk ===");
    let start = Instant::now();
    let walked = seq.cursor().iter_forward(&seq).count();
    let walk_time = start.elapsed();
    println!("  {} positions: {:?}", walked, walk_time);

    println!("\nchecksum: {}", checksum);
}
