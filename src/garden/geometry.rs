//! Planting-region math, kept as pure functions so the band and burst rules
//! are testable off the DOM.

use super::{SHRINK_MS, STAGGER_MS};

/// Fraction of the surface height where the ground band begins; only the
/// bottom 40% accepts plantings.
const GROUND_START: f64 = 0.6;

/// A click at `y` on a surface `height` tall lands in the ground band.
pub(super) fn in_ground_band(y: f64, height: f64) -> bool {
    y >= height * GROUND_START
}

/// Center of the celebration burst: horizontal midpoint, 80% down.
pub(super) fn burst_center(width: f64, height: f64) -> (f64, f64) {
    (width / 2.0, height * 0.8)
}

/// Point on the burst ring for tick `i` of `n` at the given radius.
pub(super) fn burst_point(center: (f64, f64), i: u32, n: u32, radius: f64) -> (f64, f64) {
    let angle = std::f64::consts::TAU * f64::from(i) / f64::from(n);
    (center.0 + angle.cos() * radius, center.1 + angle.sin() * radius)
}

/// Delay after which a sweep over `n` flowers has fully played out: the last
/// flower starts shrinking after (n-1) staggers and takes the shrink
/// duration, plus one stagger of slack.
pub(super) fn sweep_reset_delay(n: u32) -> i32 {
    (n * STAGGER_MS) as i32 + SHRINK_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_rejects_upper_sixty_percent() {
        assert!(!in_ground_band(0.0, 500.0));
        assert!(!in_ground_band(299.9, 500.0));
    }

    #[test]
    fn band_accepts_from_sixty_percent_down() {
        assert!(in_ground_band(300.0, 500.0));
        assert!(in_ground_band(500.0, 500.0));
    }

    #[test]
    fn burst_center_sits_low_and_centered() {
        let (cx, cy) = burst_center(800.0, 500.0);
        assert_eq!(cx, 400.0);
        assert_eq!(cy, 400.0);
    }

    #[test]
    fn burst_ring_stays_on_radius() {
        let center = (400.0, 400.0);
        for i in 0..20 {
            let (x, y) = burst_point(center, i, 20, 150.0);
            let dist = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            assert!((dist - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn burst_ring_walks_the_full_circle() {
        let center = (400.0, 400.0);
        let first = burst_point(center, 0, 20, 150.0);
        let opposite = burst_point(center, 10, 20, 150.0);
        assert!((first.0 - (center.0 + 150.0)).abs() < 1e-9);
        assert!((opposite.0 - (center.0 - 150.0)).abs() < 1e-9);
    }

    #[test]
    fn sweep_delay_scales_with_count() {
        assert_eq!(sweep_reset_delay(0), 300);
        assert_eq!(sweep_reset_delay(1), 350);
        assert_eq!(sweep_reset_delay(10), 800);
    }
}
