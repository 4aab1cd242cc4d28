const INDENT: &str = "    ";

/// Line-oriented text builder with brace-delimited indentation.
#[derive(Debug, Default)]
pub(crate) struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.out.push('\n');
            return self;
        }
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        // Never stack blank lines.
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
        self
    }

    /// Multi-line snippet, each line indented at the current depth.
    pub(crate) fn lines(&mut self, snippet: &str) -> &mut Self {
        for l in snippet.lines() {
            self.line(l);
        }
        self
    }

    /// `header {`, the body one level deeper, then `}`. An empty body renders as `header {}`.
    pub(crate) fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        let mark = self.out.len();
        self.line(&format!("{header} {{"));
        let body_start = self.out.len();
        self.depth += 1;
        body(self);
        self.depth -= 1;

        if self.out.len() == body_start {
            self.out.truncate(mark);
            self.line(&format!("{header} {{}}"));
        } else {
            while self.out.ends_with("\n\n") {
                self.out.pop();
            }
            self.line("}");
        }
        self
    }

    pub(crate) fn finish(mut self) -> String {
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        self.out
    }
}

/// Quote `s` as a Swift string literal.
pub(crate) fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/writer.rs"]
mod tests;
