use fastrand::Rng;

/// Uniform question sampling that never repeats the previous pick when
/// there is anything else to choose. Sampling is unbounded.
pub struct QuestionPicker {
    rng: Rng,
    last: Option<usize>,
}

impl QuestionPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            Rng::with_seed(s)
        } else {
            Rng::new()
        };
        Self { rng, last: None }
    }

    /// `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        let idx = match self.last {
            Some(last) if len > 1 && last < len => {
                // draw from the other len-1 slots, skipping over `last`
                let i = self.rng.usize(..len - 1);
                if i >= last {
                    i + 1
                } else {
                    i
                }
            }
            _ => self.rng.usize(..len),
        };
        self.last = Some(idx);
        idx
    }

    pub fn last(&self) -> Option<usize> {
        self.last
    }
}
