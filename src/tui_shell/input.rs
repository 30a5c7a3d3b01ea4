/// Editable text with a cursor. `cursor` is a byte offset that always sits on
/// a char boundary.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    pub(super) fn set(&mut self, s: String) {
        self.buf = s;
        self.cursor = self.buf.len();
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn insert_str(&mut self, s: &str) {
        self.buf.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub(super) fn backspace(&mut self) {
        let Some(prev) = self.prev_boundary() else {
            return;
        };
        self.buf.remove(prev);
        self.cursor = prev;
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.buf.len() {
            return;
        }
        self.buf.remove(self.cursor);
    }

    pub(super) fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub(super) fn move_right(&mut self) {
        if let Some(c) = self.buf[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub(super) fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.line_end();
    }

    pub(super) fn move_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = self.buf[start..self.cursor].chars().count();
        let prev_start = self.buf[..start - 1].rfind('\n').map_or(0, |i| i + 1);
        self.cursor = offset_at_column(&self.buf, prev_start, start - 1, col);
    }

    pub(super) fn move_down(&mut self) {
        let end = self.line_end();
        if end >= self.buf.len() {
            self.cursor = self.buf.len();
            return;
        }
        let col = self.buf[self.line_start()..self.cursor].chars().count();
        let next_start = end + 1;
        let next_end = self.buf[next_start..]
            .find('\n')
            .map_or(self.buf.len(), |i| next_start + i);
        self.cursor = offset_at_column(&self.buf, next_start, next_end, col);
    }

    /// Zero-based (line, column) of the cursor, column counted in chars.
    pub(super) fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.buf[..self.cursor];
        let line = before.matches('\n').count();
        let col = before[self.line_start()..].chars().count();
        (line, col)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buf[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn line_start(&self) -> usize {
        self.buf[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.buf[self.cursor..]
            .find('\n')
            .map_or(self.buf.len(), |i| self.cursor + i)
    }
}

fn offset_at_column(buf: &str, start: usize, end: usize, col: usize) -> usize {
    buf[start..end]
        .char_indices()
        .nth(col)
        .map_or(end, |(i, _)| start + i)
}
