//! Formatting helpers for presenting metrics, prices and dates.

use time::{macros::format_description, Date};

use super::locale::Locale;

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EN_MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const AR_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Calendar month label for a zero-based month index; wraps every 12.
pub fn month_label(index: usize, locale: Locale) -> &'static str {
    let slot = index % 12;
    match locale {
        Locale::En => EN_MONTHS_SHORT[slot],
        Locale::Ar => AR_MONTHS[slot],
    }
}

/// English abbreviation used as the stable label on generated series.
pub fn month_abbrev(index: usize) -> &'static str {
    EN_MONTHS_SHORT[index % 12]
}

/// Grouped integer, e.g. `48,293` or `٤٨٬٢٩٣`.
pub fn format_number(value: i64, locale: Locale) -> String {
    let digits = value.unsigned_abs().to_string();
    let separator = match locale {
        Locale::En => ',',
        Locale::Ar => '\u{066C}',
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    match locale {
        Locale::En => grouped,
        Locale::Ar => to_arabic_digits(&grouped),
    }
}

/// Whole US dollars.
pub fn format_currency(value: i64, locale: Locale) -> String {
    let number = format_number(value.abs(), locale);
    let sign = if value < 0 { "-" } else { "" };
    match locale {
        Locale::En => format!("{sign}${number}"),
        Locale::Ar => format!("{sign}US$ {number}"),
    }
}

/// Axis tick in thousands, e.g. `$45k`.
pub fn format_thousands(value: i64, currency: bool) -> String {
    let thousands = (value as f64 / 1000.0).round() as i64;
    if currency {
        format!("${thousands}k")
    } else {
        format!("{thousands}k")
    }
}

/// Signed percentage with one decimal: `+12.4%`, `-8.2%`, `0.0%`.
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{change:.1}%")
    } else {
        format!("{change:.1}%")
    }
}

/// Long-form publication date. Malformed input is returned unchanged.
pub fn format_post_date(iso: &str, locale: Locale) -> String {
    let Ok(date) = Date::parse(iso, format_description!("[year]-[month]-[day]")) else {
        return iso.to_string();
    };
    let month_index = usize::from(u8::from(date.month())) - 1;

    match locale {
        Locale::En => format!(
            "{} {}, {}",
            EN_MONTHS_LONG[month_index],
            date.day(),
            date.year()
        ),
        Locale::Ar => to_arabic_digits(&format!(
            "{} {} {}",
            date.day(),
            AR_MONTHS[month_index],
            date.year()
        )),
    }
}

/// Truncate to `max_chars` characters, appending an ellipsis when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}

fn to_arabic_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0, Locale::En), "0");
        assert_eq!(format_number(999, Locale::En), "999");
        assert_eq!(format_number(48_293, Locale::En), "48,293");
        assert_eq!(format_number(1_234_567, Locale::En), "1,234,567");
        assert_eq!(format_number(-18_420, Locale::En), "-18,420");
    }

    #[test]
    fn arabic_numbers_use_arabic_indic_digits() {
        assert_eq!(format_number(48_293, Locale::Ar), "٤٨٬٢٩٣");
        assert_eq!(format_currency(284_190, Locale::Ar), "US$ ٢٨٤٬١٩٠");
    }

    #[test]
    fn currency_is_whole_dollars() {
        assert_eq!(format_currency(284_190, Locale::En), "$284,190");
        assert_eq!(format_currency(-500, Locale::En), "-$500");
    }

    #[test]
    fn axis_ticks_in_thousands() {
        assert_eq!(format_thousands(45_000, true), "$45k");
        assert_eq!(format_thousands(61_600, false), "62k");
    }

    #[test]
    fn change_is_signed_with_one_decimal() {
        assert_eq!(format_change(12.4), "+12.4%");
        assert_eq!(format_change(-8.2), "-8.2%");
        assert_eq!(format_change(0.0), "0.0%");
    }

    #[test]
    fn post_dates_are_long_form() {
        assert_eq!(format_post_date("2024-09-12", Locale::En), "September 12, 2024");
        assert_eq!(format_post_date("2024-08-10", Locale::Ar), "١٠ أغسطس ٢٠٢٤");
        assert_eq!(format_post_date("not-a-date", Locale::En), "not-a-date");
    }

    #[test]
    fn month_labels_cycle() {
        assert_eq!(month_label(0, Locale::En), "Jan");
        assert_eq!(month_label(13, Locale::En), "Feb");
        assert_eq!(month_label(8, Locale::Ar), "سبتمبر");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("مرحبا بالعالم", 5), "مرحبا…");
    }
}
