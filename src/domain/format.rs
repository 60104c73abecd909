//! Display helpers shared by the listing and detail views.

use time::macros::format_description;
use time::Time;

pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹ {amount:.0}")
    } else {
        format!("₹ {amount:.2}")
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == ' ')
        .collect::<String>()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"09:00:00"` or `"09:00"` to `"9:00 AM"`. Unparseable input is returned as-is.
pub fn format_time_of_day(raw: &str) -> String {
    let trimmed = raw.trim();
    let parsed = Time::parse(trimmed, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(trimmed, format_description!("[hour]:[minute]")));

    match parsed {
        Ok(time) => {
            let (hour, minute, _) = time.as_hms();
            let suffix = if hour < 12 { "AM" } else { "PM" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour12}:{minute:02} {suffix}")
        }
        Err(_) => trimmed.to_string(),
    }
}

pub fn format_working_hours(start: &str, end: &str) -> Option<String> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return None;
    }
    Some(format!(
        "{} - {}",
        format_time_of_day(start),
        format_time_of_day(end)
    ))
}
