//! RTF document assembly
//!
//! Headings are set in 28pt Arial, tasks in 20pt with a ballot box glyph
//! (U+2610) in front. Each date starts on a new page.

const HEADER: &str = "{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Arial;}}\n";
const FOOTER: &str = "}";
const SPACER: &str = "\\fs40 {\\pard \\par}\n";
const CHECKBOX: &str =
    "\\fs40 {\\pard {\\rtlch\\fcs1 \\af44 \\ltrch\\fcs0 \\f44\\insrsid13374959\\charrsid13374959 \\u9744\\'3f}  ";

/// Incrementally built RTF document
pub struct RtfDocument {
    body: String,
}

impl RtfDocument {
    pub fn new() -> Self {
        Self {
            body: HEADER.to_string(),
        }
    }

    /// Add a date heading; `text` must already be escaped
    pub fn heading(&mut self, text: &str) {
        self.body.push_str("\n\\f0\\fs56 {\\pard ");
        self.body.push_str(text);
        self.body.push_str("\\par}\n");
    }

    /// Add a checkbox line; `text` must already be escaped
    pub fn task(&mut self, text: &str, page_break: bool) {
        self.body.push_str(SPACER);
        self.body.push_str(CHECKBOX);
        self.body.push_str(text);
        if page_break {
            self.body.push_str("\\page");
        }
        self.body.push_str("\\par}\n");
    }

    pub fn finish(mut self) -> String {
        self.body.push_str(FOOTER);
        self.body
    }
}
