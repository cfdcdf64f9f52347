//! Binomial odds for bids.
//!
//! Every die is treated as an independent fair roll, so the number of dice
//! showing a given face among `n` dice is `Binomial(n, 1/6)`. The odds of a
//! bid `(k0, face)` are the upper tail `P(X >= k0)`.
//!
//! Terms are summed directly over the tail (never as `1 - cdf`) and each term
//! is evaluated in log space, so large tables neither cancel nor overflow.

/// Probability that a single die shows a named face.
pub const FACE_PROBABILITY: f64 = 1.0 / 6.0;

/// `ln C(n, k)`, accumulated as a product of ratios.
fn ln_choose(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (1..=k).map(|i| ((n - k + i) as f64 / i as f64).ln()).sum()
}

/// Probability mass `P(X = k)` for `X ~ Binomial(n, p)`.
pub fn binomial_pmf(n: usize, k: usize, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln = ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (-p).ln_1p();
    ln.exp()
}

/// Upper tail `P(X >= k0)` for `X ~ Binomial(n, p)`.
pub fn binomial_tail(n: usize, k0: usize, p: f64) -> f64 {
    if k0 == 0 {
        return 1.0;
    }
    if k0 > n {
        return 0.0;
    }
    let total: f64 = (k0..=n).map(|k| binomial_pmf(n, k, p)).sum();
    total.clamp(0.0, 1.0)
}

/// Odds that at least `claimed` of `total_dice` dice show the claimed face.
///
/// ```
/// use liars_dice::odds::bid_odds;
///
/// assert_eq!(bid_odds(10, 0), 1.0);
/// assert_eq!(bid_odds(10, 11), 0.0);
/// assert!((bid_odds(10, 10) - (1.0f64 / 6.0).powi(10)).abs() < 1e-20);
/// ```
pub fn bid_odds(total_dice: usize, claimed: usize) -> f64 {
    binomial_tail(total_dice, claimed, FACE_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
        (a - b).abs() / scale < 1e-12
    }

    #[test]
    fn pmf_sums_to_one() {
        for n in [1usize, 5, 10, 30, 50] {
            let s: f64 = (0..=n).map(|k| binomial_pmf(n, k, FACE_PROBABILITY)).sum();
            assert!((s - 1.0).abs() < 1e-12, "n={n} sum={s}");
        }
    }

    #[test]
    fn top_of_tail_is_single_point_mass() {
        let expected = (1.0f64 / 6.0).powi(10);
        assert!(close(bid_odds(10, 10), expected), "got {}", bid_odds(10, 10));
    }

    #[test]
    fn zero_claim_is_certain() {
        assert_eq!(bid_odds(10, 0), 1.0);
        assert_eq!(bid_odds(50, 0), 1.0);
    }

    #[test]
    fn one_die_one_claim_is_one_sixth() {
        assert!(close(bid_odds(1, 1), 1.0 / 6.0));
    }

    #[test]
    fn two_dice_matches_hand_computation() {
        // P(X >= 1) = 1 - (5/6)^2 = 11/36
        assert!(close(bid_odds(2, 1), 11.0 / 36.0));
        assert!(close(bid_odds(2, 2), 1.0 / 36.0));
    }

    #[test]
    fn ten_players_tail_is_small_but_positive() {
        let p = bid_odds(50, 50);
        assert!(p > 0.0);
        assert!(close(p, (1.0f64 / 6.0).powi(50)));
    }

    #[test]
    fn large_tables_do_not_overflow() {
        let p = bid_odds(2000, 300);
        assert!(p.is_finite());
        assert!(p > 0.9 && p <= 1.0, "p={p}");
    }

    #[test]
    fn degenerate_probabilities() {
        assert_eq!(binomial_pmf(4, 0, 0.0), 1.0);
        assert_eq!(binomial_pmf(4, 4, 1.0), 1.0);
        assert_eq!(binomial_pmf(4, 2, 1.0), 0.0);
    }
}
