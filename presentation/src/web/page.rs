//! HTML rendering for the single-page UI
//!
//! The page is sent in pieces: the head with the form, one fragment per
//! block as its stage finishes, then the tail. Every piece of user or model
//! text goes through [`escape_html`] before it lands in the page.

use codegen_domain::{RenderBlock, Stage};

const TEMPLATE: &str = include_str!("page.html");

const OUTPUT_SLOT: &str = "{{OUTPUT}}";

fn template_parts() -> (&'static str, &'static str) {
    TEMPLATE.split_once(OUTPUT_SLOT).unwrap_or((TEMPLATE, ""))
}

/// The empty form
pub fn render_form() -> String {
    let mut html = render_head("");
    html.push_str(render_tail());
    html
}

/// Everything up to the output area, with the submitted task kept in the
/// textarea
pub fn render_head(task: &str) -> String {
    template_parts().0.replace("{{TASK}}", &escape_html(task))
}

/// Closes the output area and the document
pub fn render_tail() -> &'static str {
    template_parts().1
}

pub fn render_block(block: &RenderBlock) -> String {
    match block {
        RenderBlock::Heading { text } => format!("<h2>{}</h2>", escape_html(text)),
        RenderBlock::Markdown { text } => {
            format!("<div class=\"markdown\">{}</div>", escape_html(text))
        }
        RenderBlock::Code { language, code } => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_html(language),
            escape_html(code)
        ),
        RenderBlock::Success { text } => {
            format!("<div class=\"banner success\">{}</div>", escape_html(text))
        }
        RenderBlock::Error { text } => {
            format!("<div class=\"banner error\">{}</div>", escape_html(text))
        }
    }
}

/// Status line shown while a stage waits on the model
pub fn render_activity(stage: &Stage) -> String {
    format!(
        "<div class=\"activity\" id=\"{}\">{}</div>",
        activity_id(stage),
        escape_html(stage.activity())
    )
}

/// Hides the stage's status line once its agent has replied
pub fn render_activity_done(stage: &Stage) -> String {
    format!("<style>#{} {{ display: none; }}</style>", activity_id(stage))
}

fn activity_id(stage: &Stage) -> String {
    format!("stage-{}-activity", stage.number())
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
