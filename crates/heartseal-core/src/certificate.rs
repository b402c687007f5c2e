//! The acceptance certificate ("Decree of Union").
//!
//! The content is fully determined by the proposal details and a year, so
//! what the print dialog receives is the same every time.

use std::fmt::Write as _;

use chrono::Datelike;
use serde::Serialize;

use crate::types::ProposalDetails;

pub const HEADING: &str = "Formal Proclamation";
pub const TITLE: &str = "Decree of Union";
pub const PROCLAMATION: &str = "Be it known to all that on this exceptional day, a sacred bond of affection has been established between:";
pub const TESTAMENT: &str = "\"A testament to a future filled with shared wisdom, enduring patience, and unconditional love.\"";
pub const BELOVED_LABEL: &str = "The Beloved";
pub const DEVOTED_LABEL: &str = "The Devoted";
pub const AUTHENTICATION: &str = "Authenticated by the Heart";
pub const SEAL_TOP: &str = "SEALED";
pub const SEAL_CENTER: &str = "YES";

/// Everything printed on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub recipient: String,
    pub sender: String,
    /// Year in Roman numerals, stamped on the seal
    pub seal_year: String,
}

impl Certificate {
    pub fn new(details: &ProposalDetails, year: i32) -> Self {
        Self {
            recipient: details.recipient.clone(),
            sender: details.sender.clone(),
            seal_year: roman_year(year),
        }
    }

    /// Certificate stamped with the current local year.
    pub fn for_details(details: &ProposalDetails) -> Self {
        Self::new(details, chrono::Local::now().year())
    }

    /// Plain-text rendering, used by the CLI and as the print payload.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", HEADING.to_uppercase());
        let _ = writeln!(out, "{}", TITLE);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", PROCLAMATION);
        let _ = writeln!(out);
        let _ = writeln!(out, "    {}", self.recipient.to_uppercase());
        let _ = writeln!(out, "    and");
        let _ = writeln!(out, "    {}", self.sender.to_uppercase());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", TESTAMENT);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", BELOVED_LABEL, self.recipient);
        let _ = writeln!(out, "{}: {}", DEVOTED_LABEL, self.sender);
        let _ = writeln!(out, "{}", AUTHENTICATION);
        let _ = write!(out, "[{} \u{2665} {} \u{2665} {}]", SEAL_TOP, SEAL_CENTER, self.seal_year);
        out
    }
}

/// Roman numerals for years 1..=3999. Anything else is written in digits.
pub fn roman_year(year: i32) -> String {
    const NUMERALS: [(i32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if !(1..=3999).contains(&year) {
        return year.to_string();
    }

    let mut remaining = year;
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while remaining >= value {
            out.push_str(numeral);
            remaining -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_year() {
        assert_eq!(roman_year(2024), "MMXXIV");
        assert_eq!(roman_year(2026), "MMXXVI");
        assert_eq!(roman_year(1999), "MCMXCIX");
        assert_eq!(roman_year(0), "0");
        assert_eq!(roman_year(4000), "4000");
    }

    #[test]
    fn test_render_is_deterministic() {
        let details = ProposalDetails::new("Will you?", "Alex", "Jamie").with_password("secret");
        let a = Certificate::new(&details, 2024).render_text();
        let b = Certificate::new(&details, 2024).render_text();
        assert_eq!(a, b);
        assert!(a.contains("Decree of Union"));
        assert!(a.contains("The Beloved: Alex"));
        assert!(a.contains("The Devoted: Jamie"));
        assert!(a.contains("MMXXIV"));
        assert!(!a.contains("secret"));
        assert!(!a.contains("Will you?"));
    }

    #[test]
    fn test_recipient_named_first() {
        let text = Certificate::new(&ProposalDetails::new("Q", "Alex", "Jamie"), 2024).render_text();
        let alex = text.find("ALEX").unwrap();
        let jamie = text.find("JAMIE").unwrap();
        assert!(alex < jamie);
    }
}
