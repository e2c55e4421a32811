/// A named region of the page whose contents a presenter owns.
///
/// Rendering always replaces the whole contents, like assigning `innerHTML`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    id: String,
    inner_html: String,
}

impl Container {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            inner_html: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    pub fn clear(&mut self) {
        self.inner_html.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner_html.is_empty()
    }

    /// The container as a `<div id=…>` wrapping its contents.
    pub fn outer_html(&self) -> String {
        format!(
            "<div id=\"{}\">{}</div>",
            super::html::escape(&self.id),
            self.inner_html
        )
    }
}
