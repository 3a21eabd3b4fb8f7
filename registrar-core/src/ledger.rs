use std::collections::HashMap;

/// Per-student ordered lists of enrolled course codes
///
/// A record is opened the first time a student makes a valid enrollment
/// request and is kept even after every course has been dropped.
#[derive(Debug, Default)]
pub struct Ledger {
    records: HashMap<String, Vec<String>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The student's record, opening an empty one if needed
    pub(crate) fn open_record(&mut self, student_id: &str) -> &mut Vec<String> {
        self.records.entry(student_id.to_string()).or_default()
    }

    pub(crate) fn record_mut(&mut self, student_id: &str) -> Option<&mut Vec<String>> {
        self.records.get_mut(student_id)
    }

    /// Course codes in enrollment order, if the student has a record
    pub fn courses(&self, student_id: &str) -> Option<&[String]> {
        self.records.get(student_id).map(Vec::as_slice)
    }

    pub fn has_record(&self, student_id: &str) -> bool {
        self.records.contains_key(student_id)
    }

    pub fn is_enrolled(&self, student_id: &str, course_code: &str) -> bool {
        self.courses(student_id)
            .is_some_and(|codes| codes.iter().any(|code| code == course_code))
    }

    /// Number of open records, including empty ones
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_survives_emptying() {
        let mut ledger = Ledger::new();
        assert!(!ledger.has_record("S1"));

        ledger.open_record("S1").push("CS101".to_string());
        assert!(ledger.is_enrolled("S1", "CS101"));

        if let Some(record) = ledger.record_mut("S1") {
            record.retain(|code| code != "CS101");
        }
        assert!(ledger.has_record("S1"));
        assert_eq!(ledger.courses("S1"), Some(&[][..]));
        assert!(!ledger.is_enrolled("S1", "CS101"));
    }
}
