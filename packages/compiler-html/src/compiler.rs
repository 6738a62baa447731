use codeframe_evaluator::escape::{escape_attribute, escape_text};
use codeframe_evaluator::{evaluate_preview, render_preview, RenderOptions};
use codeframe_parser::ast::{Document, Node};

/// Options for page compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit a full HTML document (doctype, head, body) around the content
    pub standalone: bool,
    /// Page title for the standalone shell
    pub title: Option<String>,
    /// Optional stylesheet link for the standalone shell
    pub stylesheet: Option<String>,
    /// Render listing blocks expanded
    pub open_listing: bool,
    /// Indentation string for the standalone shell
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            standalone: true,
            title: None,
            stylesheet: None,
            open_listing: false,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.buffer.push_str(&indent);
        }
        self.add(text);
        self.add("\n");
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn into_output(self) -> String {
        self.buffer
    }
}

/// Compile a parsed document to a static HTML page.
///
/// Markup nodes are emitted verbatim; each preview widget is replaced by
/// its rendered form. Compilation itself cannot fail — malformed input is
/// rejected earlier, at parse time.
pub fn compile_page(document: &Document, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    if ctx.options.standalone {
        compile_shell_open(document, &mut ctx);
    }
    compile_content(document, &mut ctx);
    if ctx.options.standalone {
        compile_shell_close(&mut ctx);
    }

    ctx.into_output()
}

fn compile_shell_open(_document: &Document, ctx: &mut Context) {
    let title = ctx
        .options
        .title
        .clone()
        .unwrap_or_else(|| "Codeframe".to_string());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_text(&title)));
    if let Some(stylesheet) = ctx.options.stylesheet.clone() {
        ctx.add_line(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_attribute(&stylesheet)
        ));
    }
    ctx.dedent();
    ctx.add_line("</head>");
    ctx.add_line("<body>");
}

fn compile_shell_close(ctx: &mut Context) {
    ctx.add_line("</body>");
    ctx.add_line("</html>");
}

fn compile_content(document: &Document, ctx: &mut Context) {
    for node in &document.nodes {
        match node {
            Node::Markup { text, .. } => ctx.add(text),
            Node::Preview(preview) => {
                let fragments = evaluate_preview(preview);
                let render_options = RenderOptions {
                    open_listing: ctx.options.open_listing,
                    frame_title: preview.title.clone(),
                };
                ctx.add(&render_preview(&fragments, &render_options));
            }
        }
    }
}
