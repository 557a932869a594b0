/// Bounded buffer of log lines shown in the panel next to the chat.
#[derive(Debug)]
pub struct LogView {
    pub entries: Vec<String>,
}

impl LogView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, entry: String) {
        self.entries.push(entry);
        if self.entries.len() > 200 {
            self.entries.remove(0);
        }
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new()
    }
}
