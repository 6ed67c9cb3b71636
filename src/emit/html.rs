//! HTML page rendering
//!
//! Templates are plain format strings; the stylesheet and page data are
//! passed in explicitly.

use crate::compiler::{PageModel, Theme};

pub const DEFAULT_BACKGROUND: &str = "#fdfdfd";
pub const DEFAULT_TITLE_COLOR: &str = "#1a1a1a";
pub const DEFAULT_BODY_COLOR: &str = "#333333";

/// Stylesheet placed in the head of both pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// Built-in styles with theme colors applied
    Builtin(Theme),
    /// Raw CSS that fully replaces the built-in styles
    External(String),
}

impl Stylesheet {
    pub fn render(&self) -> String {
        match self {
            Stylesheet::Builtin(theme) => builtin_stylesheet(theme),
            Stylesheet::External(css) => format!("<style>{css}</style>"),
        }
    }
}

fn builtin_stylesheet(theme: &Theme) -> String {
    let background = theme.background.as_deref().unwrap_or(DEFAULT_BACKGROUND);
    let title = theme.title.as_deref().unwrap_or(DEFAULT_TITLE_COLOR);
    let body = theme.body.as_deref().unwrap_or(DEFAULT_BODY_COLOR);
    format!(
        r#"<style>
		html {{
			background: {background};
			color: {body};
			padding-left: 2rem;
			padding-right: 2rem;
			padding-top: 1rem;
		}}
		h1 {{
			color: {title};
		}}
		* {{
			padding: 0;
			margin-bottom: 0.5rem;
		}}
		div {{
			display: grid;
			max-width: 600px;
			align-items: center;
		}}
</style>
"#
    )
}

/// Escape text for use inside HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the form page
pub fn render_form_page(page: &PageModel, stylesheet: &str) -> String {
    let title = escape_html(&page.title);
    let body = page.body();
    let mut meta = String::new();
    if let Some(description) = &page.description {
        meta.push_str(&format!(
            "\t\t<meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    if let Some(image) = &page.image {
        meta.push_str(&format!(
            "\t\t<meta property=\"og:image\" content=\"{}\">\n",
            escape_html(image)
        ));
    }
    format!(
        r#"<!DOCTYPE html>
<html>
	<head>
		<title>{title}</title>
{meta}		{stylesheet}
	</head>
	<body>
	{body}
	</body>
</html>"#
    )
}

/// Render the receipt page; `{{ .Data }}` is left for the form server to fill
pub fn render_response_page(stylesheet: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
	<head>
		<title>Form submitted</title>
		{stylesheet}
	</head>
	<body>
		<h1>Response successful</h1>
		<p>Your response: </p>
		<pre>
		<code>
{{{{ .Data }}}}
		</code>
		</pre>
		<p><b>Bookmark this page</b> as a receipt or if you want to review what you responded some time in the future</p>
	</body>
</html>"#
    )
}
