//! Append-only console transcript.

/// Marker prepended to echoed input lines
pub const INPUT_PREFIX: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of what the user submitted
    Input,
    /// Response text, possibly multi-line
    Output,
}

/// A single transcript line group. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    kind: EntryKind,
    text: String,
}

impl Entry {
    /// Echo entry for a raw submission (prefix added here)
    pub fn input(raw: &str) -> Self {
        Self {
            kind: EntryKind::Input,
            text: format!("{INPUT_PREFIX}{raw}"),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Output,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_input(&self) -> bool {
        self.kind == EntryKind::Input
    }
}

/// Ordered log of entries; render order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// Transcript holding a single output entry
    pub fn seeded(text: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry::output(text)],
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Drop every entry and start over from a single output
    pub fn reset(&mut self, text: impl Into<String>) {
        self.entries.clear();
        self.entries.push(Entry::output(text));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Newest output entry, if any
    pub fn last_output(&self) -> Option<&Entry> {
        self.entries.iter().rev().find(|e| !e.is_input())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_entry_is_prefixed() {
        let entry = Entry::input(" Help ");
        assert_eq!(entry.text(), ">  Help ");
        assert_eq!(entry.kind(), EntryKind::Input);
    }

    #[test]
    fn test_reset_leaves_single_output() {
        let mut transcript = Transcript::seeded("welcome");
        transcript.push(Entry::input("about"));
        transcript.push(Entry::output("about text"));
        transcript.reset("cleared");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.entries()[0], Entry::output("cleared"));
    }

    #[test]
    fn test_last_output_skips_inputs() {
        let mut transcript = Transcript::seeded("welcome");
        transcript.push(Entry::input("x"));
        assert_eq!(transcript.last_output().map(Entry::text), Some("welcome"));
    }
}
