//! Display formatting for amounts and dates.

fn group_thousands(value: i64) -> String {
    let digits: Vec<char> = value.to_string().chars().rev().collect();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// "₹ 1,234" for whole amounts, "₹ 1,234.50" otherwise.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;
    if frac == 0 {
        format!("{}₹ {}", sign, group_thousands(whole))
    } else {
        format!("{}₹ {}.{:02}", sign, group_thousands(whole), frac)
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short display form of a stored date: the leading `YYYY-MM-DD` of either
/// a plain date or an ISO timestamp becomes "15 Mar". Anything else is
/// shown as-is.
pub fn format_date(raw: &str) -> String {
    let date = raw.get(0..10).unwrap_or(raw);
    let mut parts = date.splitn(3, '-');
    let (Some(_year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_string();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u8>()) else {
        return raw.to_string();
    };
    match month.checked_sub(1).and_then(|m| MONTHS.get(m)) {
        Some(name) => format!("{} {}", day, name),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0), "₹ 0");
        assert_eq!(format_currency(1234.0), "₹ 1,234");
        assert_eq!(format_currency(1234567.0), "₹ 1,234,567");
    }

    #[test]
    fn keeps_cents_when_present() {
        assert_eq!(format_currency(42.5), "₹ 42.50");
        assert_eq!(format_currency(0.05), "₹ 0.05");
    }

    #[test]
    fn negative_amounts_carry_the_sign() {
        assert_eq!(format_currency(-1500.0), "-₹ 1,500");
    }

    #[test]
    fn formats_plain_dates_and_iso_timestamps() {
        assert_eq!(format_date("2025-03-15"), "15 Mar");
        assert_eq!(format_date("2025-12-01T00:00:00.000Z"), "1 Dec");
    }

    #[test]
    fn malformed_dates_pass_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2025-13-01"), "2025-13-01");
    }
}
