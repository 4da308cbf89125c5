use super::buffer::TextBuffer;

/// A queued insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub line: usize,
    pub col: usize,
    pub text: String,
}

/// Scoped edit over a [`TextBuffer`].
///
/// Insertions are collected first and applied together on [`Edit::commit`],
/// so a command either lands all of its writes or none of them. Positions
/// always refer to the buffer as it was when the edit was opened.
#[derive(Debug)]
pub struct Edit<'a, B: TextBuffer + ?Sized> {
    buffer: &'a mut B,
    pending: Vec<Insertion>,
}

impl<'a, B: TextBuffer + ?Sized> Edit<'a, B> {
    pub fn begin(buffer: &'a mut B) -> Self {
        Self {
            buffer,
            pending: Vec::new(),
        }
    }

    pub fn insert(&mut self, line: usize, col: usize, text: impl Into<String>) {
        self.pending.push(Insertion {
            line,
            col,
            text: text.into(),
        });
    }

    pub fn pending(&self) -> &[Insertion] {
        &self.pending
    }

    /// Apply every queued insertion and return how many were applied.
    ///
    /// Insertions go in bottom-up so that earlier positions are not shifted
    /// by later ones.
    pub fn commit(mut self) -> usize {
        self.pending
            .sort_by(|a, b| (b.line, b.col).cmp(&(a.line, a.col)));
        for insertion in &self.pending {
            tracing::debug!(
                line = insertion.line,
                col = insertion.col,
                text = %insertion.text,
                "insert"
            );
            crate::perf::log_event(
                "edit.insert",
                format!(
                    "line={} col={} text={:?}",
                    insertion.line, insertion.col, insertion.text
                ),
            );
            self.buffer
                .insert_at(insertion.line, insertion.col, &insertion.text);
        }
        self.pending.len()
    }
}
