/// Single-line editor. `cursor` counts chars, not bytes.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
    history: History,
}

/// Submitted lines, oldest first. While recalling, `draft` holds the line
/// that was being typed so walking forward past the newest entry restores it.
#[derive(Debug, Default)]
struct History {
    lines: Vec<String>,
    recall: Option<usize>,
    draft: String,
}

impl Input {
    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    fn byte_offset(&self) -> usize {
        self.buf
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buf.len(), |(i, _)| i)
    }

    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
        self.history.recall = None;
    }

    pub(super) fn set(&mut self, s: String) {
        self.cursor = s.chars().count();
        self.buf = s;
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if let Some(prev) = self.cursor.checked_sub(1) {
            self.cursor = prev;
            let at = self.byte_offset();
            self.buf.remove(at);
        }
    }

    pub(super) fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset();
            self.buf.remove(at);
        }
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = self.char_len().min(self.cursor + 1);
    }

    /// What the line looks like on screen; secrets show one `*` per char.
    pub(super) fn display(&self, secret: bool) -> String {
        if secret {
            "*".repeat(self.char_len())
        } else {
            self.buf.clone()
        }
    }

    /// Blank lines and immediate repeats are not recorded.
    pub(super) fn push_history(&mut self, line: &str) {
        let line = line.trim();
        let h = &mut self.history;
        h.recall = None;
        if !line.is_empty() && h.lines.last().is_none_or(|last| last != line) {
            h.lines.push(line.to_string());
        }
    }

    pub(super) fn history_up(&mut self) {
        let idx = match self.history.recall {
            Some(i) => i.saturating_sub(1),
            None if self.history.lines.is_empty() => return,
            None => {
                self.history.draft = self.buf.clone();
                self.history.lines.len() - 1
            }
        };
        self.history.recall = Some(idx);
        self.set(self.history.lines[idx].clone());
    }

    pub(super) fn history_down(&mut self) {
        let Some(i) = self.history.recall else {
            return;
        };
        match self.history.lines.get(i + 1) {
            Some(line) => {
                let line = line.clone();
                self.history.recall = Some(i + 1);
                self.set(line);
            }
            None => {
                self.history.recall = None;
                let draft = std::mem::take(&mut self.history.draft);
                self.set(draft);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_multibyte_text_at_cursor() {
        let mut input = Input::default();
        input.set("café".to_string());
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.buf, "cafxé");
        input.move_right();
        input.backspace();
        assert_eq!(input.buf, "cafx");
        assert_eq!(input.display(true), "****");
    }

    #[test]
    fn history_skips_repeats_and_restores_draft() {
        let mut input = Input::default();
        input.push_history("companies");
        input.push_history("jobs");
        input.push_history("jobs");
        input.push_history("   ");
        assert_eq!(input.history.lines, vec!["companies", "jobs"]);

        input.set("pro".to_string());
        input.history_up();
        assert_eq!(input.buf, "jobs");
        input.history_up();
        assert_eq!(input.buf, "companies");
        input.history_up();
        assert_eq!(input.buf, "companies");
        input.history_down();
        assert_eq!(input.buf, "jobs");
        input.history_down();
        assert_eq!(input.buf, "pro");
        assert_eq!(input.cursor, 3);
        assert_eq!(input.history.recall, None);
    }
}
