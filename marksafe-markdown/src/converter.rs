use crate::error::Result;
use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown-to-HTML conversion, abstracted so the pipeline does not
/// depend on which engine performs the parse. Implementations perform
/// syntactic transformation only; they never execute embedded content.
pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, markdown: &str) -> Result<String>;
}

/// Converter backed by pulldown-cmark with GitHub-flavored extensions
/// (tables, strikethrough, footnotes, task lists) and soft line breaks
/// rendered as hard breaks.
#[derive(Debug, Clone)]
pub struct CmarkConverter {
    options: Options,
}

impl CmarkConverter {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);

        Self { options }
    }
}

impl MarkdownConverter for CmarkConverter {
    fn convert(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            event => event,
        });

        let mut out = String::new();
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

impl Default for CmarkConverter {
    fn default() -> Self {
        Self::new()
    }
}
