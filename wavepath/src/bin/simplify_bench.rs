use std::time::Instant;
use wavepath::{generate_normalized_path, simplify_data};

fn build_waveform(n: usize) -> Vec<f64> {
    // Deterministic LCG noise over a slow sine
    let mut seed: u64 = 0x1234_5678_ABCD_EF01;
    let mut rnd = || { seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1); ((seed >> 33) as f64) / (u32::MAX as f64 / 2.0) };
    (0..n).map(|i| (i as f64 * 0.01).sin() * 40.0 + rnd() * 5.0).collect()
}

struct Args { points: usize, runs: usize, eps: f64, assert_ms: Option<f64> }

impl Args {
    fn from_env() -> Args {
        let mut a = Args { points: 100_000, runs: 50, eps: 0.5, assert_ms: None };
        for arg in std::env::args().skip(1) {
            let Some((key, val)) = arg.split_once('=') else { continue };
            match key {
                "--points" => a.points = val.parse().unwrap_or(a.points),
                "--runs" => a.runs = val.parse().unwrap_or(a.runs).max(1),
                "--eps" => a.eps = val.parse().unwrap_or(a.eps),
                "--assert-ms" => a.assert_ms = val.parse().ok(),
                _ => eprintln!("ignoring unknown flag {}", key),
            }
        }
        a
    }
}

// Nearest-rank percentile over an ascending sample.
fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    let rank = (q * sorted.len() as f64).ceil() as usize;
    sorted.get(rank.saturating_sub(1)).copied().unwrap_or(0.0)
}

fn main() {
    let Args { points, runs, eps, assert_ms } = Args::from_env();
    let data = build_waveform(points);
    let mut times_ms: Vec<f64> = Vec::with_capacity(runs);
    let mut kept = 0usize;
    let mut d_len = 0usize;
    let start_all = Instant::now();
    for _ in 0..runs {
        let t0 = Instant::now();
        let simplified = simplify_data(&data, eps);
        let d = generate_normalized_path(&simplified, 1200.0, 200.0, true);
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
        kept = simplified.len();
        d_len = d.len();
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = nearest_rank(&times_ms, 0.5);
    let p90 = nearest_rank(&times_ms, 0.9);
    let p99 = nearest_rank(&times_ms, 0.99);
    println!("points={} runs={} eps={} kept={} d_bytes={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", points, runs, eps, kept, d_len, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
