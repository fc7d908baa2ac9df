/// Discrete word rotation: one index advanced on a fixed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotation {
    word_count: usize,
    index: usize,
}

impl WordRotation {
    pub const INTERVAL_MS: u32 = 3000;

    pub fn new(word_count: usize) -> Self {
        Self {
            word_count,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tick(&mut self) {
        if self.word_count > 0 {
            self.index = (self.index + 1) % self.word_count;
        }
    }

    /// Whether the word at `index` is the one currently shown.
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Index reached after `elapsed_ms` of uninterrupted ticking from the start.
    pub fn index_after(&self, elapsed_ms: u64) -> usize {
        if self.word_count == 0 {
            return 0;
        }
        let ticks = elapsed_ms / u64::from(Self::INTERVAL_MS);
        (ticks % self.word_count as u64) as usize
    }
}
