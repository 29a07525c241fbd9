//! Cursor-based editing of multi-line text
//!
//! The text itself lives in the session; [`TextCursor`] only remembers a
//! (row, column) position and knows how to apply an edit at that position to
//! a `String`. Columns count characters, not bytes.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCursor {
    pub row: usize,
    pub col: usize,
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

fn line_len(text: &str, row: usize) -> usize {
    text.split('\n').nth(row).map_or(0, |line| line.chars().count())
}

impl TextCursor {
    pub fn new(row: usize, col: usize) -> Self {
        TextCursor { row, col }
    }

    /// Byte offset of the cursor in `text`
    fn offset(&self, text: &str) -> usize {
        let mut offset = 0;
        for (row, line) in text.split('\n').enumerate() {
            if row == self.row {
                return offset
                    + line
                        .char_indices()
                        .nth(self.col)
                        .map_or(line.len(), |(idx, _)| idx);
            }
            offset += line.len() + 1;
        }
        text.len()
    }

    pub fn insert_char(&mut self, text: &mut String, c: char) {
        if c == '\n' {
            self.insert_newline(text);
            return;
        }
        let offset = self.offset(text);
        text.insert(offset, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self, text: &mut String) {
        let offset = self.offset(text);
        text.insert(offset, '\n');
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self, text: &mut String) {
        let offset = self.offset(text);
        if self.col > 0 {
            if let Some(prev) = text[..offset].chars().next_back() {
                text.replace_range(offset - prev.len_utf8()..offset, "");
                self.col -= 1;
            }
        } else if self.row > 0 {
            let prev_len = line_len(text, self.row - 1);
            text.replace_range(offset - 1..offset, "");
            self.row -= 1;
            self.col = prev_len;
        }
    }

    /// Delete the character under the cursor, joining lines at line end
    pub fn delete(&mut self, text: &mut String) {
        let offset = self.offset(text);
        if let Some(next) = text[offset..].chars().next() {
            text.replace_range(offset..offset + next.len_utf8(), "");
        }
    }

    pub fn move_left(&mut self, text: &str) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = line_len(text, self.row);
        }
    }

    pub fn move_right(&mut self, text: &str) {
        if self.col < line_len(text, self.row) {
            self.col += 1;
        } else if self.row + 1 < line_count(text) {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self, text: &str) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(line_len(text, self.row));
        }
    }

    pub fn move_down(&mut self, text: &str) {
        if self.row + 1 < line_count(text) {
            self.row += 1;
            self.col = self.col.min(line_len(text, self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self, text: &str) {
        self.col = line_len(text, self.row);
    }
}
