#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    PausedFull,
    Deleting,
}

/// Typewriter effect over a fixed word list.
///
/// Each `tick` is one discrete transition. `next_delay_ms` says how long the
/// owner should wait before calling `tick` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    current_text: String,
    phase: TypewriterPhase,
}

impl Typewriter {
    pub const TYPING_MS: u32 = 100;
    pub const PAUSE_MS: u32 = 2000;
    pub const DELETING_MS: u32 = 50;

    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            word_index: 0,
            current_text: String::new(),
            phase: TypewriterPhase::Typing,
        }
    }

    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == TypewriterPhase::Deleting
    }

    pub fn next_delay_ms(&self) -> u32 {
        match self.phase {
            TypewriterPhase::Typing => Self::TYPING_MS,
            TypewriterPhase::PausedFull => Self::PAUSE_MS,
            TypewriterPhase::Deleting => Self::DELETING_MS,
        }
    }

    pub fn tick(&mut self) {
        let Some(word) = self.words.get(self.word_index) else {
            return;
        };
        match self.phase {
            TypewriterPhase::Typing => {
                let typed = self.current_text.chars().count();
                if let Some(next) = word.chars().nth(typed) {
                    self.current_text.push(next);
                }
                if self.current_text.chars().count() >= word.chars().count() {
                    self.phase = TypewriterPhase::PausedFull;
                }
            }
            TypewriterPhase::PausedFull => {
                self.phase = TypewriterPhase::Deleting;
            }
            TypewriterPhase::Deleting => {
                self.current_text.pop();
                if self.current_text.is_empty() {
                    self.phase = TypewriterPhase::Typing;
                    self.word_index = (self.word_index + 1) % self.words.len();
                }
            }
        }
    }
}
