//! Field formatting shared by every renderer: dates, ranges, bullets,
//! contact lines and export filenames.

use chrono::NaiveDate;

use crate::models::resume::{Experience, PersonalDetails};

/// Glyph prefixed to description lines in the native document.
pub const BULLET: char = '•';

/// Formats a `YYYY-MM` (or `YYYY-MM-DD`) string as `Mon YYYY`.
///
/// Anything else, including the empty string and words like "Present",
/// formats to an empty string. This is not an error.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    let mut parts = raw.splitn(3, '-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return String::new();
    };
    let day = parts.next().unwrap_or("01");
    if year.len() != 4 || month.is_empty() || month.len() > 2 {
        return String::new();
    }
    NaiveDate::parse_from_str(&format!("{year}-{month}-{day}"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// `<start> — <end>`, where `end` is `present_label` for a current role and
/// the stored end date is never consulted.
pub fn experience_range(exp: &Experience, present_label: &str) -> String {
    let start = format_month_year(&exp.start_date);
    let end = if exp.current {
        present_label.to_string()
    } else {
        format_month_year(&exp.end_date)
    };
    format!("{start} — {end}")
}

/// Non-blank description lines, trimmed.
pub fn description_lines(description: &str) -> Vec<&str> {
    description
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Prefixes `line` with a bullet glyph unless it already carries one.
pub fn bulleted(line: &str) -> String {
    let line = line.trim();
    if line.starts_with(BULLET) {
        line.to_string()
    } else {
        format!("{BULLET} {line}")
    }
}

/// Present contact fields joined with `separator`.
pub fn contact_line(personal: &PersonalDetails, separator: &str) -> String {
    present_contacts(personal).join(separator)
}

/// Contact fields that are non-blank after trimming, in display order.
pub fn present_contacts(personal: &PersonalDetails) -> Vec<&str> {
    personal
        .contact_fields()
        .into_iter()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// `"<degree> in <field>"`, dropping whichever half is blank.
pub fn degree_line(degree: &str, field: &str) -> String {
    match (degree.trim(), field.trim()) {
        ("", "") => String::new(),
        (d, "") => d.to_string(),
        ("", f) => f.to_string(),
        (d, f) => format!("{d} in {f}"),
    }
}

/// Lowercase, whitespace runs collapsed to a single hyphen. Characters that
/// are unsafe in a file name or a quoted header parameter are dropped.
pub fn slug(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .map(|word| word.chars().filter(|c| filename_safe(*c)).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn filename_safe(c: char) -> bool {
    !c.is_control() && !matches!(c, '"' | '\\' | '/' | ':' | '*' | '?' | '<' | '>' | '|')
}

/// `resume-<slug>.<ext>`, or `resume.<ext>` when the name is blank.
pub fn export_filename(full_name: &str, ext: &str) -> String {
    let slug = slug(full_name);
    if slug.is_empty() {
        format!("resume.{ext}")
    } else {
        format!("resume-{slug}.{ext}")
    }
}
