use panelkit_fractal::{
    escape_grid, AcceleratedBackend, ComplexBackend, FixedBackend, FloatBackend, SoftComplexUnit,
    Viewport, MAX_ITERATIONS,
};

const PIXELS: usize = 160 * 128;

fn grid<B: ComplexBackend>(mut backend: B) -> Vec<u8> {
    let mut out = vec![0u8; PIXELS];
    escape_grid(&mut backend, &Viewport::BENCHMARK, &mut out).unwrap();
    out
}

/// Per-pixel comparison of two grids
struct Agreement {
    exact: usize,
    /// Counts differing by at most one iteration
    within_one: usize,
    /// In-set/escaped decision matches
    decision: usize,
    max_diff: u8,
}

fn agreement(a: &[u8], b: &[u8]) -> Agreement {
    let mut out = Agreement {
        exact: 0,
        within_one: 0,
        decision: 0,
        max_diff: 0,
    };
    for (&x, &y) in a.iter().zip(b) {
        let diff = x.abs_diff(y);
        out.exact += (diff == 0) as usize;
        out.within_one += (diff <= 1) as usize;
        out.decision += ((x == MAX_ITERATIONS) == (y == MAX_ITERATIONS)) as usize;
        out.max_diff = out.max_diff.max(diff);
    }
    out
}

/// Truncating Q12 arithmetic drifts from f32 on a few orbits near the
/// boundary; `max_diff` is the largest gap measured on the benchmark grid.
fn assert_close(a: &[u8], b: &[u8], max_diff: u8) {
    let got = agreement(a, b);
    assert!(got.exact * 100 >= PIXELS * 97, "exact agreement {}/{PIXELS}", got.exact);
    assert!(
        got.within_one * 100 >= PIXELS * 99,
        "agreement within one iteration {}/{PIXELS}",
        got.within_one
    );
    assert!(
        got.decision * 100 >= PIXELS * 99,
        "decision agreement {}/{PIXELS}",
        got.decision
    );
    assert!(
        got.max_diff <= max_diff,
        "largest difference {} exceeds {max_diff}",
        got.max_diff
    );
}

#[test]
fn fixed_tracks_float() {
    assert_close(&grid(FloatBackend), &grid(FixedBackend), 27);
}

#[test]
fn accelerated_tracks_fixed() {
    assert_close(
        &grid(FixedBackend),
        &grid(AcceleratedBackend::new(SoftComplexUnit)),
        28,
    );
}

#[test]
fn accelerated_tracks_float() {
    assert_close(
        &grid(FloatBackend),
        &grid(AcceleratedBackend::new(SoftComplexUnit)),
        28,
    );
}

#[test]
fn integer_backends_are_deterministic() {
    let in_set = |g: &[u8]| g.iter().filter(|&&n| n == MAX_ITERATIONS).count();
    assert_eq!(in_set(&grid(FixedBackend)), 6515);
    assert_eq!(in_set(&grid(AcceleratedBackend::new(SoftComplexUnit))), 6517);
}
