//! Measurements derived from what the operator enters in the wizard.
//!
//! Everything here is pure. Nothing is validated: a non-positive width or a
//! zero riser count yields a degenerate number and the caller decides whether
//! it may be shown or submitted.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use base::entities::material::MaterialPrice;
use base::entities::order::ItemQuantity;
use base::entities::{
    Feet, Inches, CUT_SIZE_DECIMAL_PLACES, FEET_DECIMAL_PLACES, INCHES_IN_FOOT,
};
use base::helpers::round_money;

pub type RiserQuantity = ItemQuantity;

/// Trimmed off the measured step width to get the riser/tread cut size.
pub const CUT_SIZE_ALLOWANCE: Inches = 1.25;

/// One foot of stringer per riser.
pub const STRINGER_INCHES_PER_RISER: Inches = 12.0;

pub fn compute_cut_size(width: Inches) -> Inches {
    width - CUT_SIZE_ALLOWANCE
}

pub fn compute_stringer_length(riser_quantity: RiserQuantity) -> Inches {
    Inches::from(riser_quantity) * STRINGER_INCHES_PER_RISER
}

pub fn inches_to_feet(inches: Inches) -> Feet {
    inches / Inches::from(INCHES_IN_FOOT)
}

/// Stringer material is priced per foot. `None` for a non-finite length.
pub fn estimate_stringer_cost(price_per_foot: MaterialPrice, stringer_length: Inches) -> Option<Decimal> {
    let feet = Decimal::from_f64(inches_to_feet(stringer_length))?;

    Some(round_money(price_per_foot * feet))
}

pub fn format_cut_size(cut_size: Inches) -> String {
    format!("{:.*}", CUT_SIZE_DECIMAL_PLACES, cut_size)
}

pub fn format_feet(inches: Inches) -> String {
    format!("{:.*}", FEET_DECIMAL_PLACES, inches_to_feet(inches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use rust_decimal_macros::dec;

    #[test]
    #[allow(non_snake_case)]
    fn compute_cut_size__widths_above_allowance__should_subtract_exactly() {
        for width in [1.5, 30.0, 36.0, 36.125, 41.875, 42.0, 60.5] {
            assert_eq!(compute_cut_size(width), width - 1.25);
        }

        assert!(approx_eq!(f64, compute_cut_size(36.0), 34.75, ulps = 2));
    }

    #[test]
    #[allow(non_snake_case)]
    fn compute_cut_size__non_positive_width__should_not_reject() {
        assert!(approx_eq!(f64, compute_cut_size(0.0), -1.25, ulps = 2));
        assert!(compute_cut_size(-3.0) < 0.0);
    }

    #[test]
    #[allow(non_snake_case)]
    fn compute_stringer_length__any_riser_count__should_be_twelve_inches_each() {
        for riser_quantity in [0, 1, 6, 14, 250] {
            assert!(approx_eq!(
                f64,
                compute_stringer_length(riser_quantity),
                f64::from(riser_quantity * 12),
                ulps = 2
            ));
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_cut_size__width_36__should_show_three_decimals() {
        assert_eq!(format_cut_size(compute_cut_size(36.0)), "34.750");
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_feet__six_risers__should_show_six_feet() {
        let stringer_length = compute_stringer_length(6);

        assert!(approx_eq!(f64, stringer_length, 72.0, ulps = 2));
        assert_eq!(format_feet(stringer_length), "6.0");
    }

    #[test]
    #[allow(non_snake_case)]
    fn estimate_stringer_cost__price_per_foot__should_multiply_by_feet() {
        assert_eq!(
            estimate_stringer_cost(dec!(4.25), compute_stringer_length(6)),
            Some(dec!(25.50))
        );
        assert_eq!(estimate_stringer_cost(dec!(4.25), f64::NAN), None);
    }
}
