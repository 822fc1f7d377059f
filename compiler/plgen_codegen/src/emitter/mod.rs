//! Output Emitter
//!
//! Abstraction for text production during code generation.

/// Sink for generated text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation as the given number of spaces.
    fn emit_indent(&mut self, spaces: usize);

    /// Emit a single space.
    fn emit_space(&mut self);

    /// Emit `text` with `spaces` of indentation added to every line that
    /// has non-whitespace content. Other lines are copied unchanged.
    fn emit_block(&mut self, text: &str, spaces: usize) {
        for line in text.split_inclusive('\n') {
            if !line.trim().is_empty() {
                self.emit_indent(spaces);
            }
            self.emit(line);
        }
    }
}

/// String-based emitter for in-memory generation.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Ensure the output ends with a newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}
