//! Pure rendering from client state to a markup tree.
//!
//! # Design
//! [`render`] builds a small [`Node`] tree; it reads the store and never
//! mutates anything. Interactive elements carry an [`Action`] binding so a
//! host can map a gesture (click, keystroke) back to a controller call
//! without knowing the layout. The same tree serializes to HTML for browser
//! style hosts and to plain text for terminals.

use std::fmt::Write as _;

use crate::notice::Notice;
use crate::store::Store;
use crate::types::Status;

pub const ADD_LABEL: &str = "Add Todo";
pub const DELETE_LABEL: &str = "Delete";
pub const MARK_COMPLETED_LABEL: &str = "Mark Completed";
pub const MARK_INCOMPLETE_LABEL: &str = "Mark Incomplete";
pub const EMPTY_PLACEHOLDER: &str = "No todos found";

pub const CLASS_COMPLETED: &str = "todo-completed";
pub const CLASS_INCOMPLETE: &str = "todo-incomplete";

/// Event binding attached to an interactive element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Two-way binding of the text input to the draft.
    EditDraft,
    Add,
    Delete(i64),
    /// Carries the status the record had when rendered.
    Toggle { id: i64, current: Status },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub action: Option<Action>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            action: None,
            children: Vec::new(),
        }
    }

    fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    fn on(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn is_void(&self) -> bool {
        self.tag == "input"
    }

    fn is_block(&self) -> bool {
        matches!(self.tag, "div" | "ul" | "li")
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Label of the toggle button for a record in `status`.
pub fn toggle_label(status: &Status) -> &'static str {
    if status.is_completed() {
        MARK_INCOMPLETE_LABEL
    } else {
        MARK_COMPLETED_LABEL
    }
}

/// Render the whole page. `notice` is shown as an alert above the form.
pub fn render(store: &Store, notice: Option<&Notice>) -> Node {
    let mut root = Element::new("div").attr("class", "todo-app");

    if let Some(notice) = notice {
        root = root.child(
            Element::new("div")
                .attr("class", "notice")
                .attr("role", "alert")
                .text(notice.message.clone()),
        );
    }

    root = root
        .child(
            Element::new("input")
                .attr("type", "text")
                .attr("placeholder", ADD_LABEL)
                .attr("value", store.draft())
                .on(Action::EditDraft),
        )
        .child(Element::new("button").on(Action::Add).text(ADD_LABEL));

    let mut list = Element::new("ul").attr("class", "todo-list");
    if store.is_empty() {
        list = list.child(Element::new("li").text(EMPTY_PLACEHOLDER));
    } else {
        for todo in store.items() {
            let class = if todo.completed.is_completed() {
                CLASS_COMPLETED
            } else {
                CLASS_INCOMPLETE
            };
            let item = Element::new("li")
                .attr("data-id", todo.id.to_string())
                .child(Element::new("span").attr("class", class).text(todo.title.clone()))
                .child(
                    Element::new("button")
                        .on(Action::Delete(todo.id))
                        .text(DELETE_LABEL),
                )
                .child(
                    Element::new("button")
                        .on(Action::Toggle {
                            id: todo.id,
                            current: todo.completed.clone(),
                        })
                        .text(toggle_label(&todo.completed)),
                );
            list = list.child(item);
        }
    }

    root.child(list).into()
}

impl Node {
    /// Every event binding in document order.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if let Some(action) = &el.action {
                out.push(action);
            }
        });
        out
    }

    /// All elements with the given tag in document order.
    pub fn elements(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if el.tag == tag {
                out.push(el);
            }
        });
        out
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        if let Node::Element(el) = self {
            visit(el);
            for child in &el.children {
                child.walk(visit);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape_html(value));
                }
                out.push('>');
                if el.is_void() {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    /// Plain-text rendering, one line per block element.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        self.text_lines(&mut lines);
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn is_block(&self) -> bool {
        matches!(self, Node::Element(el) if el.is_block())
    }

    fn text_lines(&self, lines: &mut Vec<String>) {
        let el = match self {
            Node::Element(el) if el.is_block() => el,
            _ => {
                lines.push(self.inline_text());
                return;
            }
        };

        let prefix = if el.tag == "li" {
            "- "
        } else if el.get_attr("role") == Some("alert") {
            "! "
        } else {
            ""
        };
        let mut inline: Vec<String> = Vec::new();
        let flush = |inline: &mut Vec<String>, lines: &mut Vec<String>| {
            if !inline.is_empty() {
                lines.push(format!("{prefix}{}", inline.join(" ")));
                inline.clear();
            }
        };
        for child in &el.children {
            if child.is_block() {
                flush(&mut inline, lines);
                child.text_lines(lines);
            } else {
                inline.push(child.inline_text());
            }
        }
        flush(&mut inline, lines);
    }

    fn inline_text(&self) -> String {
        let el = match self {
            Node::Text(text) => return text.clone(),
            Node::Element(el) => el,
        };
        match el.tag {
            "input" => format!(
                "{}: {}",
                el.get_attr("placeholder").unwrap_or_default(),
                el.get_attr("value").unwrap_or_default()
            ),
            "button" => format!("[{}]", self.text_content()),
            "span" if el.has_class(CLASS_COMPLETED) => format!("(done) {}", self.text_content()),
            _ => self.text_content(),
        }
    }
}

fn escape_html(text: &str) -> String {
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
