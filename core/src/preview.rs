/// Tags shown on a resource card: the first few inline, the rest collapsed
/// into a "+N more" chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> TagPreview<'a> {
    pub const DEFAULT_LIMIT: usize = 3;

    pub fn new(tags: &'a [String], limit: usize) -> Self {
        let split = tags.len().min(limit);
        Self {
            shown: &tags[..split],
            hidden: tags.len() - split,
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}
