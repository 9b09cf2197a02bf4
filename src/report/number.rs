/// Raw values (leaves, effective days, hours) print in their shortest exact
/// form: `351`, `45.5`.
pub fn full_precision(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{}", value)
}

/// Day values print with two decimals, rounding the stored binary value.
/// Exact ties round away from zero, so `0.125` gives `0.13` while `1.075`
/// (stored just below the tie) gives `1.07`.
pub fn two_decimals(value: f64) -> String {
    if is_exact_tie(value) {
        // value * 100 is exact here: the fraction is a multiple of 1/8.
        let rounded = (value * 100.0).round() / 100.0;
        return format!("{:.2}", rounded);
    }
    format!("{:.2}", value)
}

/// A binary value sits exactly on `x.xx5` only when its fractional part is an
/// odd multiple of 1/8. Both `fract` and `* 8.0` are exact.
fn is_exact_tie(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    let eighths = value.abs().fract() * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::compute;
    use crate::model::{Member, Role, SprintParameters};

    #[test]
    fn full_precision_drops_trailing_zero() {
        assert_eq!(full_precision(351.0), "351");
        assert_eq!(full_precision(45.5), "45.5");
        assert_eq!(full_precision(0.0), "0");
        assert_eq!(full_precision(f64::INFINITY), "Infinity");
    }

    #[test]
    fn two_decimals_rounds_exact_ties_up() {
        assert_eq!(two_decimals(43.875), "43.88");
        assert_eq!(two_decimals(0.125), "0.13");
        assert_eq!(two_decimals(2.625), "2.63");
        assert_eq!(two_decimals(5.6875), "5.69");
        assert_eq!(two_decimals(10.5625), "10.56");
        assert_eq!(two_decimals(7.0), "7.00");
    }

    #[test]
    fn two_decimals_keeps_values_below_a_tie() {
        assert_eq!(two_decimals(1.075), "1.07");
        assert_eq!(two_decimals(9.225), "9.22");
        assert_eq!(two_decimals(7.525), "7.52");
    }

    #[test]
    fn member_days_near_a_tie() {
        let parameters = SprintParameters::new(1.0, 4.3, 2.0, 0.0);
        let result = compute(&parameters, &[Member::new("A", Role::Dev, None)]);

        assert_eq!(two_decimals(result.members[0].days), "1.07");
    }
}
