//! Derived display ratings.
//!
//! A place's rating is never stored; it is recomputed from its cached
//! reviews on every render pass.

use casabnb_core::Review;

/// Label shown wherever a rating would go but no reviews exist.
pub const NO_REVIEWS_LABEL: &str = "No reviews yet";

/// A rating derived from a review sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedRating {
    /// The place has no reviews; there is no rating to show.
    Unrated,
    /// Mean of the review ratings, rounded to one decimal place.
    Rated(f64),
}

impl DerivedRating {
    /// Star-glyph presentation: `floor(rating)` full stars plus a half
    /// glyph when the fractional remainder is at least 0.5. An undefined
    /// rating yields the sentinel label unmodified.
    #[must_use]
    pub fn stars(&self) -> String {
        match *self {
            Self::Unrated => NO_REVIEWS_LABEL.to_string(),
            Self::Rated(value) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let full = value.floor() as usize;
                let mut glyphs = "★".repeat(full);
                if value - value.floor() >= 0.5 {
                    glyphs.push('½');
                }
                glyphs
            }
        }
    }
}

/// Compute the display rating for a review sequence.
///
/// Empty input is the "no rating available" sentinel; otherwise the
/// arithmetic mean of the ratings rounded to one decimal place. No
/// weighting, no recency bias, no outlier handling.
#[must_use]
pub fn aggregate(reviews: &[Review]) -> DerivedRating {
    if reviews.is_empty() {
        return DerivedRating::Unrated;
    }

    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating.value())).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(sum) / reviews.len() as f64;
    DerivedRating::Rated((mean * 10.0).round() / 10.0)
}
