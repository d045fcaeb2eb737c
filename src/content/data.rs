/// Contents of a plain file: a sequence of words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Data {
    tokens: Vec<String>,
}

impl Data {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Number of characters the file takes when printed: every word plus a
    /// single separator between each two of them.
    pub fn size(&self) -> usize {
        if self.tokens.is_empty() {
            return 0;
        }

        let chars: usize = self.tokens.iter().map(|token| token.len()).sum();

        chars + self.tokens.len() - 1
    }

    pub fn read(&self) -> &[String] {
        &self.tokens
    }

    pub fn write(&mut self, tokens: Vec<String>) {
        self.tokens = tokens;
    }
}
