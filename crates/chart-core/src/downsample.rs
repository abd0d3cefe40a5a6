// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for long XY price lines.

/// Reduce `points` to `threshold` points preserving the visual shape.
///
/// First and last points are always kept. A `threshold` below 3 keeps only
/// the end points; a `threshold` at or above `points.len()` keeps everything.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold >= n || n <= 2 {
        return points.to_vec();
    }
    if threshold < 3 {
        return vec![points[0], points[n - 1]];
    }

    // interior points split into threshold - 2 buckets
    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let edge = |b: usize| ((b as f64 * every) as usize + 1).min(n - 1);

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut anchor = points[0];

    for b in 0..threshold - 2 {
        let (lo, hi) = (edge(b), edge(b + 1).max(edge(b) + 1));
        let next_hi = (edge(b + 2) + usize::from(b + 3 == threshold)).clamp(hi + 1, n);
        let (cx, cy) = mean(&points[hi..next_hi]);

        let area = |p: &(f64, f64)| ((anchor.0 - cx) * (p.1 - anchor.1) - (anchor.0 - p.0) * (cy - anchor.1)).abs();
        let best = points[lo..hi]
            .iter()
            .copied()
            .fold(None::<((f64, f64), f64)>, |best, p| {
                let a = area(&p);
                match best {
                    Some((_, ba)) if ba >= a => best,
                    _ => Some((p, a)),
                }
            })
            .map(|(p, _)| p)
            .unwrap_or(points[lo]);

        out.push(best);
        anchor = best;
    }

    out.push(points[n - 1]);
    out
}

fn mean(points: &[(f64, f64)]) -> (f64, f64) {
    let k = points.len().max(1) as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
    (sx / k, sy / k)
}
