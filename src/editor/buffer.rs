use ropey::Rope;

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (byte offset within the line).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Ordered-line view of a document that grades can be written into.
///
/// Lines are reported without their trailing newline and columns are
/// byte offsets within a line.
pub trait TextBuffer {
    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// Content of a line, or `None` past the end of the buffer.
    fn line_at(&self, line_idx: usize) -> Option<String>;

    /// Insert `text` at `(line, col)`. Positions past the end are clamped.
    fn insert_at(&mut self, line: usize, col: usize, text: &str);
}

/// A text buffer backed by a rope data structure.
///
/// Only `\n` ends a line; a lone `\r` or a Unicode line separator stays
/// inside the line it appears on. Holds the feedback document for the duration of one grading command.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line_idx).to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.len())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert(char_idx, s);

        // Move cursor to end of inserted text
        let lines: Vec<&str> = s.split('\n').collect();
        if lines.len() > 1 {
            self.cursor.line += lines.len() - 1;
            self.cursor.col = lines.last().map_or(0, |l| l.len());
        } else {
            self.cursor.col += s.len();
        }
        self.dirty = true;
    }

    /// Move cursor to a specific line and column.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let max_col = self.line_len(self.cursor.line);
        self.cursor.col = col.min(max_col);
    }

    /// Convert cursor position to a ropey char index.
    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        let line_str: String = self.rope.line(self.cursor.line).chars().collect();
        // Convert byte offset to char offset within the line
        let mut byte_col = self.cursor.col.min(line_str.len());
        while !line_str.is_char_boundary(byte_col) {
            byte_col -= 1;
        }
        line_start + line_str[..byte_col].chars().count()
    }
}

impl TextBuffer for EditorBuffer {
    fn line_count(&self) -> usize {
        Self::line_count(self)
    }

    fn line_at(&self, line_idx: usize) -> Option<String> {
        Self::line_at(self, line_idx)
    }

    fn insert_at(&mut self, line: usize, col: usize, text: &str) {
        self.move_to(line, col);
        self.insert_str(text);
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
