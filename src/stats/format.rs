/// Integer part followed by the fractional part at three significant digits.
///
/// The integer part is kept whole and only the fraction is rounded:
/// `1.234567 -> "1.235"`, `0.0123456 -> "0.0123"`.
pub fn significant_numbers(d: f64) -> String {
    if !d.is_finite() {
        return d.to_string();
    }
    let negative = d < 0.0;
    let magnitude = d.abs();
    let mut int_part = magnitude.trunc();
    let frac = magnitude - int_part;

    let frac_str = if frac == 0.0 {
        ".00".to_string()
    } else {
        let exp = frac.log10().floor() as i32;
        let mut decimals = (2 - exp).max(0) as usize;
        let mut rendered = format!("{:.*}", decimals, frac);
        // Rounding can bump the magnitude (0.09996 -> 0.1000); drop a digit.
        let rounded: f64 = rendered.parse().unwrap_or(frac);
        if rounded >= 10f64.powi(exp + 1) && decimals > 0 {
            decimals -= 1;
            rendered = format!("{:.*}", decimals, frac);
        }
        if rendered.starts_with('1') {
            int_part += 1.0;
            ".00".to_string()
        } else {
            rendered[1..].to_string()
        }
    };

    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        int_part as i64,
        frac_str
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_carry() {
        assert_eq!(significant_numbers(0.9996), "1.00");
        assert_eq!(significant_numbers(2.09996), "2.100");
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(significant_numbers(0.0), "0.00");
        assert_eq!(significant_numbers(43.0), "43.00");
    }
}
