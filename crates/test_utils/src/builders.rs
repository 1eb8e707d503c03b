//! Test Data Builders
//!
//! Builder for composing sixteen-digit NIK strings field by field, with
//! defaults matching the reference number. Tests specify only the fields
//! they care about.

/// Builds NIK digit strings from their constituent fields.
///
/// Defaults reproduce [`NumberFixtures::VALID_NIK`].
pub struct NikNumberBuilder {
    region: String,
    day: u32,
    female: bool,
    month: u32,
    year: u32,
    sequence: String,
}

impl Default for NikNumberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NikNumberBuilder {
    pub fn new() -> Self {
        Self {
            region: "327301".to_string(),
            day: 25,
            female: false,
            month: 1,
            year: 99,
            sequence: "0001".to_string(),
        }
    }

    /// Sets the six-digit region prefix.
    pub fn with_region(mut self, code: impl Into<String>) -> Self {
        self.region = code.into();
        self
    }

    /// Sets the true day of birth (1-31), before any offset.
    pub fn with_day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Marks the record female; the day field gets the +40 offset.
    pub fn female(mut self) -> Self {
        self.female = true;
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    /// Sets the embedded two-digit year.
    pub fn with_year_digits(mut self, year: u32) -> Self {
        self.year = year;
        self
    }

    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = sequence.into();
        self
    }

    /// Renders the sixteen-digit string.
    pub fn build(&self) -> String {
        let day = if self.female { self.day + 40 } else { self.day };
        format!(
            "{}{:02}{:02}{:02}{}",
            self.region, day, self.month, self.year, self.sequence
        )
    }
}
