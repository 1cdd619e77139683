//! Linear Y-axis tick selection.

/// Mantissas a tick step may use, per decade.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Ticks from zero up to `max` using at most `target` intervals.
///
/// Returns `(step, ticks)`. Ticks are computed as `i * step` to avoid drift.
pub fn nice_ticks(max: f64, target: usize) -> (f64, Vec<f64>) {
    if !(max.is_finite() && max > 0.0) || target == 0 {
        return (1.0, vec![0.0]);
    }
    let raw = max / target as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = NICE_STEPS
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * magnitude);

    let count = (max / step + 1e-9).floor() as usize;
    let ticks = (0..=count).map(|i| i as f64 * step).collect();
    (step, ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gei_axis() {
        // 96 * 1.15 = 110.4
        let (step, ticks) = nice_ticks(110.4, 6);
        assert_eq!(step, 20.0);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn floor_axis() {
        let (step, ticks) = nice_ticks(1.0, 6);
        assert_eq!(step, 0.2);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn income_axis_in_hundreds_of_thousands() {
        let (step, ticks) = nice_ticks(1_725_000.0, 6);
        assert_eq!(step, 500_000.0);
        assert_eq!(ticks.last().copied(), Some(1_500_000.0));
    }

    #[test]
    fn ticks_never_exceed_max() {
        for max in [1.0, 3.7, 34.5, 110.4, 460.0, 1000.0, 345_000.0] {
            let (_, ticks) = nice_ticks(max, 6);
            assert_eq!(ticks[0], 0.0);
            assert!(ticks.iter().all(|t| *t <= max + 1e-9));
            assert!(ticks.len() <= 7);
        }
    }

    #[test]
    fn degenerate_max() {
        assert_eq!(nice_ticks(0.0, 6), (1.0, vec![0.0]));
        assert_eq!(nice_ticks(f64::NAN, 6), (1.0, vec![0.0]));
    }
}
