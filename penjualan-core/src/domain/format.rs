//! Presentation-boundary formatting helpers.
//!
//! Rupiah amounts and dates are rendered the id-ID way ("Rp 1.500.000",
//! "05 Agu 2026"). The core arithmetic never formats; these helpers exist
//! for UI layers and display labels only.

use chrono::{Datelike, NaiveDate};

/// Indonesian month names, 1-indexed via `MONTHS[month - 1]`.
pub const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format a rupiah amount with id-ID dot grouping, e.g. `Rp 1.500.000`.
/// Negative amounts render as `Rp -5.000`.
pub fn format_rupiah(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if negative {
        format!("Rp -{}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Format a date as `05 Agu 2026` (day, abbreviated id-ID month, year).
pub fn format_tanggal(date: NaiveDate) -> String {
    let month_name = MONTHS[date.month0() as usize];
    format!("{:02} {} {}", date.day(), &month_name[..3], date.year())
}

/// Short numeric date form, `05/08/26`.
pub fn format_tanggal_pendek(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}
