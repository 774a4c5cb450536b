use crate::employees::EmployeeId;
use chrono::Utc;

/// Timestamp-based id source
///
/// Ids are decimal millisecond timestamps. The generator never goes backwards and
/// never repeats, so adds within the same millisecond still get distinct ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id that `taken` does not already claim
    pub fn next_id<F>(&mut self, taken: F) -> EmployeeId
    where
        F: Fn(&EmployeeId) -> bool,
    {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        loop {
            let id = EmployeeId::new(candidate.to_string());
            if !taken(&id) {
                self.last = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}
