//! Human-readable sequential document numbers (`FT0001`, `ST0007`, `P0012`).
//!
//! Allocation is an atomic increment-and-reserve keyed by scope, implemented
//! by each storage backend; the helpers here own the format. On first use a
//! backend seeds its counter from the highest parseable suffix among existing
//! numbers, so pre-existing data continues its sequence.

use crate::entities::teklif::TeklifTipi;
use strum::{Display, EnumString};

/// Numbering scope. Outgoing and incoming quotes count independently;
/// projects share one global sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum DocumentScope {
    #[strum(serialize = "FT")]
    TeklifVerilen,
    #[strum(serialize = "ST")]
    TeklifAlinan,
    #[strum(serialize = "P")]
    Proje,
}

impl DocumentScope {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::TeklifVerilen => "FT",
            Self::TeklifAlinan => "ST",
            Self::Proje => "P",
        }
    }
}

impl From<TeklifTipi> for DocumentScope {
    fn from(tipi: TeklifTipi) -> Self {
        match tipi {
            TeklifTipi::Verilen => Self::TeklifVerilen,
            TeklifTipi::Alinan => Self::TeklifAlinan,
        }
    }
}

/// Formats a sequence value as a document number, zero-padded to 4 digits
/// and widening naturally past 9999.
pub fn format_number(scope: DocumentScope, value: i32) -> String {
    format!("{}{:04}", scope.prefix(), value)
}

/// Parses the numeric suffix of an existing document number in `scope`.
/// Returns `None` for foreign prefixes or unparseable suffixes, which the
/// seeding scan ignores.
pub fn parse_suffix(scope: DocumentScope, number: &str) -> Option<i32> {
    number
        .strip_prefix(scope.prefix())
        .and_then(|suffix| suffix.parse::<i32>().ok())
}

/// Highest parseable suffix among `numbers`, or 0 when none parse.
/// Used to seed a scope's counter from pre-existing records.
pub fn max_suffix<'a, I>(scope: DocumentScope, numbers: I) -> i32
where
    I: IntoIterator<Item = &'a str>,
{
    numbers
        .into_iter()
        .filter_map(|n| parse_suffix(scope, n))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(format_number(DocumentScope::TeklifVerilen, 1), "FT0001");
        assert_eq!(format_number(DocumentScope::TeklifAlinan, 42), "ST0042");
        assert_eq!(format_number(DocumentScope::Proje, 9999), "P9999");
        assert_eq!(format_number(DocumentScope::Proje, 10000), "P10000");
    }

    #[test]
    fn parses_own_prefix_only() {
        assert_eq!(parse_suffix(DocumentScope::TeklifVerilen, "FT0007"), Some(7));
        assert_eq!(parse_suffix(DocumentScope::TeklifVerilen, "ST0007"), None);
        assert_eq!(parse_suffix(DocumentScope::Proje, "P0012"), Some(12));
    }

    #[test]
    fn unparseable_suffixes_are_ignored() {
        assert_eq!(parse_suffix(DocumentScope::TeklifVerilen, "FT-draft"), None);
        assert_eq!(
            max_suffix(
                DocumentScope::TeklifVerilen,
                ["FT0001", "FTxxxx", "FT0009", "ST0044"]
            ),
            9
        );
    }

    #[test]
    fn empty_scan_seeds_from_zero() {
        assert_eq!(max_suffix(DocumentScope::Proje, []), 0);
    }
}
