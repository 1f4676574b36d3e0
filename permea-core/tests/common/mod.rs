use permea_core::RandomSource;

/// Replays a fixed draw sequence, ignoring the requested range.
///
/// Panics when the script runs dry so a test that consumes more randomness
/// than planned fails loudly instead of looping forever.
pub struct ScriptedSource {
    draws: Vec<usize>,
    next: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        let draw = *self
            .draws
            .get(self.next)
            .expect("scripted source exhausted its draws");
        assert!(
            (low..=high).contains(&draw),
            "scripted draw {draw} outside [{low}, {high}]"
        );
        self.next += 1;
        draw
    }
}
