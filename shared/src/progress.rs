/// Cosmetic milestones emitted while a request is outstanding. Not derived
/// from real request telemetry.
pub const PROGRESS_STEPS: [u8; 8] = [10, 25, 40, 55, 70, 82, 90, 95];

/// Spacing between progress ticks.
pub const TICK_INTERVAL_MS: u32 = 300;

/// Hands out the milestone values one tick at a time, strictly increasing,
/// then clamps by yielding `None`. The consumer jumps to 100 itself when the
/// request resolves; this sequence never reaches it on its own.
#[derive(Debug, Default)]
pub struct ProgressSequence {
    next: usize,
}

impl ProgressSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let step = PROGRESS_STEPS.get(self.next).copied();
        if step.is_some() {
            self.next += 1;
        }
        step
    }

    /// True once every milestone has been handed out; the driving timer has
    /// nothing left to do and should be torn down.
    pub fn is_exhausted(&self) -> bool {
        self.next >= PROGRESS_STEPS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_the_configured_sequence_once() {
        let mut seq = ProgressSequence::new();
        let mut emitted = Vec::new();
        while let Some(step) = seq.advance() {
            emitted.push(step);
        }
        assert_eq!(emitted, PROGRESS_STEPS);
        assert!(seq.is_exhausted());
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.advance(), None);
    }

    #[test]
    fn never_exceeds_95_and_is_strictly_increasing() {
        let mut seq = ProgressSequence::new();
        let mut last = 0u8;
        while let Some(step) = seq.advance() {
            assert!(step > last);
            assert!(step <= 95);
            last = step;
        }
    }
}
