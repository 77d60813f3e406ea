//! Distance estimates used as A* / JPS heuristics.
//!
//! Every function is a pure metric over two grid points. [`metric`] selects
//! one by [`HeuristicType`].

use std::f64::consts::SQRT_2;

use gridroute_core::Point;

/// Exponent used by [`minkowski`].
pub const MINKOWSKI_P: f64 = 3.0;

/// Which distance function estimates the remaining cost.
///
/// The discriminants are stable numeric codes. Unknown codes fall back to
/// [`Chebyshev`](HeuristicType::Chebyshev), which is also the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HeuristicType {
    Manhattan = 1,
    Euclidean = 2,
    Octile = 4,
    #[default]
    Chebyshev = 8,
    Minkowski = 16,
    Canberra = 32,
    BrayCurtis = 64,
}

impl HeuristicType {
    /// All heuristics, in code order.
    pub const ALL: [HeuristicType; 7] = [
        Self::Manhattan,
        Self::Euclidean,
        Self::Octile,
        Self::Chebyshev,
        Self::Minkowski,
        Self::Canberra,
        Self::BrayCurtis,
    ];

    /// The numeric code of this heuristic.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric code, falling back to Chebyshev for unknown values.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Manhattan,
            2 => Self::Euclidean,
            4 => Self::Octile,
            16 => Self::Minkowski,
            32 => Self::Canberra,
            64 => Self::BrayCurtis,
            _ => Self::Chebyshev,
        }
    }
}

impl From<u8> for HeuristicType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

/// Distance between `a` and `b` under `kind`.
pub fn metric(a: Point, b: Point, kind: HeuristicType) -> f64 {
    match kind {
        HeuristicType::Manhattan => manhattan(a, b),
        HeuristicType::Euclidean => euclidean(a, b),
        HeuristicType::Octile => octile(a, b),
        HeuristicType::Chebyshev => chebyshev(a, b),
        HeuristicType::Minkowski => minkowski(a, b),
        HeuristicType::Canberra => canberra(a, b),
        HeuristicType::BrayCurtis => bray_curtis(a, b),
    }
}

#[inline]
fn deltas(a: Point, b: Point) -> (f64, f64) {
    (
        f64::from((a.x - b.x).abs()),
        f64::from((a.y - b.y).abs()),
    )
}

/// Manhattan (L1) distance.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Euclidean (L2) distance.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.hypot(dy)
}

/// Octile distance: straight steps cost 1, diagonal steps cost √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy)
}

/// Chebyshev (L∞) distance.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy)
}

/// Minkowski distance of order [`MINKOWSKI_P`].
#[inline]
pub fn minkowski(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    (dx.powf(MINKOWSKI_P) + dy.powf(MINKOWSKI_P)).powf(MINKOWSKI_P.recip())
}

/// Canberra distance over the two coordinates. A coordinate pair that is
/// zero on both sides contributes nothing.
pub fn canberra(a: Point, b: Point) -> f64 {
    fn term(p: i32, q: i32) -> f64 {
        let den = f64::from(p.abs()) + f64::from(q.abs());
        if den == 0.0 {
            0.0
        } else {
            f64::from((p - q).abs()) / den
        }
    }
    term(a.x, b.x) + term(a.y, b.y)
}

/// Bray-Curtis dissimilarity; zero when both points sum to the origin.
pub fn bray_curtis(a: Point, b: Point) -> f64 {
    let num = manhattan(a, b);
    let den = f64::from((a.x + b.x).abs()) + f64::from((a.y + b.y).abs());
    if den == 0.0 { 0.0 } else { num / den }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn classic_metrics() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert!(close(manhattan(a, b), 7.0));
        assert!(close(euclidean(a, b), 5.0));
        assert!(close(chebyshev(a, b), 4.0));
        assert!(close(octile(a, b), 4.0 + 3.0 * (SQRT_2 - 1.0)));
        assert!(close(minkowski(a, b), 91f64.cbrt()));
    }

    #[test]
    fn octile_of_pure_diagonal() {
        let d = octile(Point::new(0, 0), Point::new(4, 4));
        assert!(close(d, 4.0 * SQRT_2));
    }

    #[test]
    fn canberra_and_bray_curtis() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 2);
        // |1-3|/(1+3) + 0/(2+2)
        assert!(close(canberra(a, b), 0.5));
        // (2 + 0) / (4 + 4)
        assert!(close(bray_curtis(a, b), 0.25));
        assert_eq!(canberra(Point::ZERO, Point::ZERO), 0.0);
        assert_eq!(bray_curtis(Point::new(1, -1), Point::new(-1, 1)), 0.0);
    }

    #[test]
    fn metric_dispatch() {
        let a = Point::new(-2, 5);
        let b = Point::new(4, 1);
        assert_eq!(metric(a, b, HeuristicType::Manhattan), manhattan(a, b));
        assert_eq!(metric(a, b, HeuristicType::Euclidean), euclidean(a, b));
        assert_eq!(metric(a, b, HeuristicType::Octile), octile(a, b));
        assert_eq!(metric(a, b, HeuristicType::Chebyshev), chebyshev(a, b));
        assert_eq!(metric(a, b, HeuristicType::Minkowski), minkowski(a, b));
        assert_eq!(metric(a, b, HeuristicType::Canberra), canberra(a, b));
        assert_eq!(metric(a, b, HeuristicType::BrayCurtis), bray_curtis(a, b));
    }

    #[test]
    fn codes_and_fallback() {
        for h in HeuristicType::ALL {
            assert_eq!(HeuristicType::from_code(h.code()), h);
        }
        assert_eq!(HeuristicType::from(0), HeuristicType::Chebyshev);
        assert_eq!(HeuristicType::from(3), HeuristicType::Chebyshev);
        assert_eq!(HeuristicType::default(), HeuristicType::Chebyshev);
        assert_eq!(HeuristicType::BrayCurtis.code(), 64);
    }

    #[test]
    fn admissible_metrics_never_exceed_octile() {
        let origin = Point::new(2, 3);
        for p in gridroute_core::Range::new(-5, -5, 10, 10) {
            let o = octile(origin, p);
            assert!(euclidean(origin, p) <= o + EPS);
            assert!(chebyshev(origin, p) <= o + EPS);
        }
    }
}
