use interview_types::IdGenerator;
use uuid::Uuid;

/// The default [`IdGenerator`]: random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// A deterministic [`IdGenerator`] for tests: `rewind-0`, `rewind-1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequenceGenerator {
    next: u64,
}

impl SequenceGenerator {
    /// Create a generator starting at `rewind-0`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceGenerator {
    fn generate(&mut self) -> String {
        let id = format!("rewind-{}", self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_deterministic() {
        let mut ids = SequenceGenerator::new();
        assert_eq!(ids.generate(), "rewind-0");
        assert_eq!(ids.generate(), "rewind-1");
        assert_eq!(ids.generate(), "rewind-2");
    }

    #[test]
    fn uuids_are_distinct() {
        let mut ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
