use telegram_markdown_text::{Bold, Fragment, InlineCode, InlineUrl, Italic, QuoteBlock, Underline};

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_message(sections: usize) -> anyhow::Result<Fragment> {
    let mut message = Fragment::new(Vec::<Fragment>::new())?;

    for section in 0..sections {
        message
            .append(Bold::new(format!("Section {section}."))?)?
            .append_newline()
            .append("Some text with reserved characters: 1+1=2 (really)!")?
            .append(Italic::new(Underline::new("nested")?)?)?
            .append(InlineCode::new("fn x() {}")?)?
            .append_newline()
            .append(InlineUrl::new("link", "https://example.com/a_(b)")?)?
            .append_newline()
            .append(QuoteBlock::new(["quoted\nlines\n"])?)?
            .append_newline();
    }

    Ok(message)
}
