// File: src/model/months.rs
//! Month-name lookup used by the date matcher.
//!
//! The table is passed to the matcher as a value; no process locale is read.

/// Full Italian month names, January first.
pub const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTable {
    names: &'static [&'static str; 12],
}

impl MonthTable {
    pub const fn new(names: &'static [&'static str; 12]) -> Self {
        Self { names }
    }

    pub const fn italian() -> Self {
        Self::new(&ITALIAN_MONTHS)
    }

    /// Returns the month number (1-12) for a full month name.
    ///
    /// Case is ignored, accents are not: "Marzo" and "marzo" both resolve,
    /// "mar" does not.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        let lower = name.to_lowercase();
        self.names
            .iter()
            .position(|m| *m == lower)
            .map(|idx| idx as u32 + 1)
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self::italian()
    }
}
