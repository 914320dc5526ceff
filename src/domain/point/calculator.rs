//! Purchase amount to loyalty point conversion.
//!
//! The award is a piecewise function of the purchase amount. Each piece is a
//! [`PointTier`] covering a half-open amount range, and [`POINT_TIERS`] lists
//! them in ascending order:
//!
//! | Tier | Amount range | Points |
//! |------|--------------|--------|
//! | `Minimum` | `[0, 1000)` | 0 |
//! | `Standard` | `[1000, 10000)` | `amount / 100` |
//! | `Premium` | `[10000, ∞)` | 200 |
//!
//! The `Premium` tier is flat: an amount of one million earns the same 200
//! points as an amount of ten thousand.

/// Amount at which purchases start earning points.
pub const STANDARD_TIER_THRESHOLD: u64 = 1_000;

/// Amount at which the flat premium award replaces the linear rate.
pub const PREMIUM_TIER_THRESHOLD: u64 = 10_000;

/// Purchase amount that earns one point in the standard tier.
pub const AMOUNT_PER_POINT: u64 = 100;

/// Points awarded for any purchase in the premium tier.
pub const PREMIUM_TIER_POINTS: u64 = 200;

/// A bracket of the point formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointTier {
    /// Below the standard threshold: no points.
    Minimum,
    /// One point per [`AMOUNT_PER_POINT`], rounded down.
    Standard,
    /// Flat [`PREMIUM_TIER_POINTS`].
    Premium,
}

/// Tiers in ascending order, each paired with the first amount it covers.
pub const POINT_TIERS: [(u64, PointTier); 3] = [
    (0, PointTier::Minimum),
    (STANDARD_TIER_THRESHOLD, PointTier::Standard),
    (PREMIUM_TIER_THRESHOLD, PointTier::Premium),
];

impl PointTier {
    /// Looks up the tier whose range contains `amount`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use loyalty_points::domain::point::PointTier;
    ///
    /// assert_eq!(PointTier::for_amount(999), PointTier::Minimum);
    /// assert_eq!(PointTier::for_amount(1_000), PointTier::Standard);
    /// assert_eq!(PointTier::for_amount(10_000), PointTier::Premium);
    /// ```
    #[must_use]
    pub fn for_amount(amount: u64) -> Self {
        POINT_TIERS
            .iter()
            .rev()
            .find(|(lower_bound, _)| amount >= *lower_bound)
            .map_or(Self::Minimum, |(_, tier)| *tier)
    }

    /// Returns the first amount this tier covers, as listed in [`POINT_TIERS`].
    #[must_use]
    pub fn lower_bound(self) -> u64 {
        POINT_TIERS
            .iter()
            .find(|(_, tier)| *tier == self)
            .map_or(0, |(lower_bound, _)| *lower_bound)
    }

    /// Applies this tier's rule to `amount`.
    ///
    /// The caller is expected to pass an amount inside the tier; use
    /// [`calc_point`] to get the lookup and the rule together.
    #[must_use]
    pub const fn points_for(self, amount: u64) -> u64 {
        match self {
            Self::Minimum => 0,
            Self::Standard => amount / AMOUNT_PER_POINT,
            Self::Premium => PREMIUM_TIER_POINTS,
        }
    }
}

/// Calculates the points awarded for a purchase of `amount`.
///
/// # Examples
///
/// ```rust
/// use loyalty_points::domain::point::calc_point;
///
/// assert_eq!(calc_point(0), 0);
/// assert_eq!(calc_point(999), 0);
/// assert_eq!(calc_point(1_000), 10);
/// assert_eq!(calc_point(9_999), 99);
/// assert_eq!(calc_point(10_000), 200);
/// assert_eq!(calc_point(1_000_000), 200);
/// ```
#[must_use]
pub fn calc_point(amount: u64) -> u64 {
    PointTier::for_amount(amount).points_for(amount)
}
