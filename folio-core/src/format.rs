//! Display formatting for money and percentages.

use crate::domain::Money;

/// Group digits in threes: `14000` → `14,000`, `-1500` → `-1,500`.
pub fn group_thousands(value: Money) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$14,000`. The sign stays with the digits: `$-250`.
pub fn dollars(value: Money) -> String {
    format!("${}", group_thousands(value))
}

/// Profit/loss with an explicit sign on gains: `+1,500`, `-500`, `+0`.
pub fn signed(value: Money) -> String {
    if value >= 0 {
        format!("+{}", group_thousands(value))
    } else {
        group_thousands(value)
    }
}

/// Whole-number percentage: `22%`, `-5%`.
pub fn percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Percentage with an explicit sign on gains: `+15%`.
pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.0}%", value)
    } else {
        format!("{:.0}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(14_000), "14,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-500), "-500");
        assert_eq!(group_thousands(-11_500), "-11,500");
    }

    #[test]
    fn money_and_pnl() {
        assert_eq!(dollars(14_000), "$14,000");
        assert_eq!(dollars(-250), "$-250");
        assert_eq!(dollars(-11_500), "$-11,500");
        assert_eq!(signed(11_500), "+11,500");
        assert_eq!(signed(-500), "-500");
        assert_eq!(signed(0), "+0");
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(22.0), "22%");
        assert_eq!(signed_percent(15.0), "+15%");
        assert_eq!(signed_percent(-5.0), "-5%");
    }
}
