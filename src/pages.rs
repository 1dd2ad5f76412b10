// 📄 Pages - Server-rendered HTML
// Every page: one <html>, one <title>, one <h1>, one item form posting `text`

use crate::db::{Item, List};
use crate::validation::ItemError;

pub const PAGE_TITLE: &str = "To-Do lists";
pub const HOME_HEADING: &str = "Start a new To-Do list";
pub const LIST_HEADING: &str = "Your To-Do list";
pub const NEW_LIST_ACTION: &str = "/lists/new";

/// The single-field item form as rendered on a page.
///
/// `text` is what the user last submitted (empty on a fresh page) and
/// `error` the rejection to show inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub text: String,
    pub error: Option<ItemError>,
}

impl ItemForm {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rejected(text: impl Into<String>, error: ItemError) -> Self {
        Self {
            text: text.into(),
            error: Some(error),
        }
    }
}

pub fn render_home(form: &ItemForm) -> String {
    layout(HOME_HEADING, &render_form(NEW_LIST_ACTION, form), "")
}

pub fn render_list(list: &List, items: &[Item], form: &ItemForm) -> String {
    let mut rows = String::new();
    for (n, item) in items.iter().enumerate() {
        rows.push_str(&format!(
            "        <tr><td>{}: {}</td></tr>\n",
            n + 1,
            escape_html(&item.text)
        ));
    }

    let table = format!("      <table id=\"id_list_table\">\n{}      </table>\n", rows);

    layout(LIST_HEADING, &render_form(&list.url(), form), &table)
}

pub fn render_not_found() -> String {
    "<html>\n  <head>\n    <title>Not Found</title>\n  </head>\n  <body>\n    <h1>Not Found</h1>\n    <p>The requested list does not exist.</p>\n  </body>\n</html>\n".to_string()
}

fn render_form(action: &str, form: &ItemForm) -> String {
    let mut html = format!(
        "      <form method=\"POST\" action=\"{}\">\n        <input name=\"text\" id=\"id_text\" placeholder=\"Enter a to-do item\" value=\"{}\" />\n",
        escape_html(action),
        escape_html(&form.text)
    );

    if let Some(error) = form.error {
        html.push_str(&format!(
            "        <div class=\"error\">{}</div>\n",
            escape_html(error.message())
        ));
    }

    html.push_str("      </form>\n");
    html
}

fn layout(heading: &str, form: &str, body: &str) -> String {
    format!(
        "<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n  </head>\n  <body>\n    <div class=\"container\">\n      <h1>{heading}</h1>\n{form}{body}    </div>\n  </body>\n</html>\n",
        title = PAGE_TITLE,
        heading = escape_html(heading),
        form = form,
        body = body,
    )
}

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
