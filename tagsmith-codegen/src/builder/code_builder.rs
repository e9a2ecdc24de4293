//! Code builder utility for generating properly indented code.

use super::Indent;

/// Builder for line-oriented code with managed indentation.
///
/// Output is assembled by appending whole lines, never by substituting into
/// a template, so no input text can be mistaken for structure.
///
/// # Example
///
/// ```
/// use tagsmith_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder.push_block("pub mod ids {", "}", |b| {
///     b.push_line("pub const A: &str = \"a\";");
/// });
///
/// assert_eq!(builder.build(), "pub mod ids {\n    pub const A: &str = \"a\";\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block: header line, indented body, closing line.
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Add a Rust line comment (`// text`).
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::rust();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_line("impl Foo {")
            .push_indent()
            .push_line("const A: u8 = 1;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "impl Foo {\n    const A: u8 = 1;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_block("mod a {", "}", |b| {
            b.push_block("struct B {", "}", |b| {
                b.push_line("c: u8,");
            });
        });
        assert_eq!(builder.build(), "mod a {\n\tstruct B {\n\t\tc: u8,\n\t}\n}\n");
    }

    #[test]
    fn test_comment() {
        let mut builder = CodeBuilder::rust();
        builder.push_comment("@generated");
        assert_eq!(builder.build(), "// @generated\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::rust();
        builder.push_dedent();
        assert_eq!(builder.current_indent(), 0);
        builder.push_line("x");
        assert_eq!(builder.build(), "x\n");
    }
}
