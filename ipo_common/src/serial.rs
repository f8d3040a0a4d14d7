//! Serial-number classification and subscription row ordering.
//!
//! Exchange subscription tables label their rows with a loose hierarchy:
//! `1`..`5` for investor classes, `2.1` for sub-classes, `3(a)` and `2.1(a)`
//! for breakdowns below those, and `-` for the grand total. The label decides
//! a row's indentation, its emphasis, and its position in the table.
//!
//! Classification is total: every string, however malformed, lands in exactly
//! one [`SerialClass`], with [`SerialClass::Unrecognized`] as the explicit
//! fallback. No row is ever dropped.
use std::cmp::Ordering;

use crate::collate::natural_cmp;
use crate::model::subscription::SubscriptionRecord;

/// Shape of a trimmed serial label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerialClass {
    /// A single digit `1`-`5`, or a lone `-`.
    MainCategory,
    /// `<digits>.<digits>`, e.g. `2.1`.
    Section,
    /// `<digits>(<letter>)`, e.g. `3(a)`.
    Lettered,
    /// `<digits>.<digits>(<letter>)`, e.g. `2.1(a)`.
    SectionLettered,
    /// Anything else, including the empty string.
    Unrecognized,
}

/// Rendering hints derived from a serial label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHints {
    /// Indentation level of the category label (0, 1 or 2).
    pub depth: u8,
    /// Top-level investor class.
    pub is_main_category: bool,
    /// Row is drawn in bold.
    pub is_emphasized: bool,
}

impl SerialClass {
    /// Classifies a serial label. Surrounding whitespace is ignored.
    pub fn classify(serial: &str) -> Self {
        let serial = serial.trim();
        if let [b'1'..=b'5' | b'-'] = serial.as_bytes() {
            return SerialClass::MainCategory;
        }

        let (major, rest) = split_digits(serial);
        if major.is_empty() {
            return SerialClass::Unrecognized;
        }

        let (has_minor, rest) = match rest.strip_prefix('.') {
            Some(after_dot) => {
                let (minor, rest) = split_digits(after_dot);
                if minor.is_empty() {
                    return SerialClass::Unrecognized;
                }
                (true, rest)
            }
            None => (false, rest),
        };

        let has_letter = match rest.as_bytes() {
            [] => false,
            [b'(', b'a'..=b'z', b')'] => true,
            _ => return SerialClass::Unrecognized,
        };

        match (has_minor, has_letter) {
            (true, false) => SerialClass::Section,
            (false, true) => SerialClass::Lettered,
            (true, true) => SerialClass::SectionLettered,
            (false, false) => SerialClass::Unrecognized,
        }
    }

    /// Indentation level.
    pub fn depth(self) -> u8 {
        match self {
            SerialClass::MainCategory => 0,
            SerialClass::Section | SerialClass::Lettered | SerialClass::Unrecognized => 1,
            SerialClass::SectionLettered => 2,
        }
    }

    /// `true` only for top-level investor classes.
    pub fn is_main_category(self) -> bool {
        self == SerialClass::MainCategory
    }

    /// Main categories and `x.y` sections are drawn in bold.
    pub fn is_emphasized(self) -> bool {
        matches!(self, SerialClass::MainCategory | SerialClass::Section)
    }

    /// All three hints at once.
    pub fn hints(self) -> RowHints {
        RowHints {
            depth: self.depth(),
            is_main_category: self.is_main_category(),
            is_emphasized: self.is_emphasized(),
        }
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Where a serial sorts relative to ordinary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Placement {
    Ordinary,
    Blank,
    Total,
}

fn placement(serial: &str) -> Placement {
    match serial {
        "-" => Placement::Total,
        "" => Placement::Blank,
        _ => Placement::Ordinary,
    }
}

/// Orders two trimmed serial labels.
///
/// Ordinary labels compare naturally; blank labels follow them and `-` comes
/// last. Two blanks, or two `-`, compare equal.
pub fn compare_serials(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.trim(), b.trim());
    match (placement(a), placement(b)) {
        (Placement::Ordinary, Placement::Ordinary) => natural_cmp(a, b),
        (left, right) => left.cmp(&right),
    }
}

/// Stable in-place sort of records by serial label.
pub fn sort_by_serial(records: &mut [SubscriptionRecord]) {
    records.sort_by(|a, b| compare_serials(a.serial(), b.serial()));
}

/// A subscription record positioned and annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRow {
    /// The record as fetched.
    pub record: SubscriptionRecord,
    /// Classification of its serial label.
    pub class: SerialClass,
    /// Hints derived from `class`.
    pub hints: RowHints,
}

/// Sorts records by serial label and annotates each with its hints.
pub fn arrange(mut records: Vec<SubscriptionRecord>) -> Vec<SubscriptionRow> {
    sort_by_serial(&mut records);
    records
        .into_iter()
        .map(|record| {
            let class = SerialClass::classify(record.serial());
            SubscriptionRow {
                record,
                class,
                hints: class.hints(),
            }
        })
        .collect()
}
