/// Scan position over a borrowed source buffer.
///
/// `offset` is a byte index and always sits on a character boundary because
/// the cursor only ever moves past whole slices of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl ScanCursor {
    pub fn new() -> ScanCursor {
        ScanCursor {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves past `text`, which must be the source slice starting at `offset`.
    ///
    /// Each `\n` bumps the line and resets the column; after the last newline
    /// the column counts the remaining characters.
    pub fn advance(&mut self, text: &str) {
        self.offset += text.len();

        match text.rfind('\n') {
            Some(last) => {
                self.line += text.matches('\n').count() as u32;
                self.column = text[last + 1..].chars().count() as u32 + 1;
            }
            None => self.column += text.chars().count() as u32,
        }
    }
}

impl Default for ScanCursor {
    fn default() -> Self {
        ScanCursor::new()
    }
}
