/// Replaces sensitive-looking substrings with category labels.
pub trait Redactor: Send + Sync {
    fn redact(&self, text: &str) -> Redaction;
}

/// Output of one redaction pass, with per-label hit counts for logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Redaction {
    pub text: String,
    pub hits: Vec<(&'static str, usize)>,
}

impl Redaction {
    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(|(_, count)| count).sum()
    }
}
