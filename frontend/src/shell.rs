//! Typed commands and their mapping onto rendered view bindings.

use std::io::{self, Write};

use todo_core::view::Action;
use todo_core::{App, Node, Transport};

pub const USAGE: &str = "\
commands:
  draft <text>   set the input field
  add            add the drafted todo
  delete <id>    delete a todo
  toggle <id>    flip a todo between completed and incomplete
  html           print the page as HTML
  show           print the page again
  help           this text
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Draft(String),
    Add,
    Delete(i64),
    Toggle(i64),
    Html,
    Show,
    Help,
    Quit,
}

/// Parse one input line. `None` means the line is not a command.
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };
    let command = match word {
        "draft" => Command::Draft(rest.to_string()),
        "add" => Command::Add,
        "delete" => Command::Delete(rest.trim().parse().ok()?),
        "toggle" => Command::Toggle(rest.trim().parse().ok()?),
        "html" => Command::Html,
        "" | "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Find the binding on `page` that `command` triggers, plus the input value
/// for draft edits. `None` when the page has no such control.
pub fn resolve(command: &Command, page: &Node) -> Option<(Action, Option<String>)> {
    let action = page
        .actions()
        .into_iter()
        .find(|a| match (command, a) {
            (Command::Draft(_), Action::EditDraft) | (Command::Add, Action::Add) => true,
            (Command::Delete(id), Action::Delete(target)) => id == target,
            (Command::Toggle(id), Action::Toggle { id: target, .. }) => id == target,
            _ => false,
        })?
        .clone();
    let value = match command {
        Command::Draft(text) => Some(text.clone()),
        _ => None,
    };
    Some((action, value))
}

/// Print the page, then dismiss the notice it displayed.
pub fn show<T: Transport>(app: &mut App<T>, out: &mut impl Write) -> io::Result<()> {
    if let Some(page) = app.render() {
        write!(out, "{}", page.to_text())?;
    }
    app.take_notice();
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use todo_core::notice;
    use todo_core::{ApiError, Controller, HttpRequest, HttpResponse, Operation, Status, Store};

    struct Scripted(VecDeque<Result<HttpResponse, ApiError>>);

    impl Transport for Scripted {
        fn execute(&mut self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.0.pop_front().expect("unexpected request")
        }
    }

    fn printed(app: &mut App<Scripted>) -> String {
        let mut out = Vec::new();
        show(app, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn page_with(body: &str) -> Node {
        let mut store = Store::new();
        Controller::default()
            .complete(&mut store, Operation::LoadAll, Ok(HttpResponse::new(200, body)))
            .unwrap();
        todo_core::view::render(&store, None)
    }

    #[test]
    fn parse_keeps_draft_text_verbatim() {
        assert_eq!(parse("draft  buy milk "), Some(Command::Draft(" buy milk ".to_string())));
        assert_eq!(parse("draft"), Some(Command::Draft(String::new())));
    }

    #[test]
    fn parse_ids() {
        assert_eq!(parse("delete 3"), Some(Command::Delete(3)));
        assert_eq!(parse("toggle  12\n"), Some(Command::Toggle(12)));
        assert_eq!(parse("delete x"), None);
        assert_eq!(parse("toggle"), None);
    }

    #[test]
    fn parse_blank_line_shows_page() {
        assert_eq!(parse(""), Some(Command::Show));
        assert_eq!(parse("   "), Some(Command::Show));
    }

    #[test]
    fn parse_rejects_unknown_words() {
        assert_eq!(parse("remove 1"), None);
    }

    #[test]
    fn toggle_resolves_with_rendered_status() {
        let page = page_with(r#"[{"id":1,"title":"a","completed":"completed"}]"#);
        assert_eq!(
            resolve(&Command::Toggle(1), &page),
            Some((
                Action::Toggle {
                    id: 1,
                    current: Status::Completed
                },
                None
            ))
        );
    }

    #[test]
    fn unknown_id_does_not_resolve() {
        let page = page_with(r#"[{"id":1,"title":"a","completed":"incomplete"}]"#);
        assert_eq!(resolve(&Command::Delete(2), &page), None);
        assert_eq!(resolve(&Command::Toggle(2), &page), None);
    }

    #[test]
    fn draft_resolves_to_input_binding() {
        let page = page_with("[]");
        assert_eq!(
            resolve(&Command::Draft("x".to_string()), &page),
            Some((Action::EditDraft, Some("x".to_string())))
        );
    }

    #[test]
    fn show_prints_notice_once_then_dismisses_it() {
        let responses = VecDeque::from(vec![
            Ok(HttpResponse::new(200, "[]")),
            Ok(HttpResponse::new(500, "")),
        ]);
        let mut app = App::new(Controller::default(), Scripted(responses));
        app.mount().unwrap();
        app.delete(1).unwrap_err();

        let first = printed(&mut app);
        assert_eq!(first.matches(notice::DELETE_FAILED).count(), 1);
        assert!(first.starts_with("! "));
        assert!(app.notice().is_none());

        let second = printed(&mut app);
        assert!(!second.contains(notice::DELETE_FAILED));
        assert!(second.contains(todo_core::view::EMPTY_PLACEHOLDER));
    }

    #[test]
    fn show_prints_nothing_when_unmounted() {
        let mut app = App::new(Controller::default(), Scripted(VecDeque::new()));
        assert_eq!(printed(&mut app), "");
    }
}
