//! Terminal host for the todo front-end.
//!
//! Mounts the app against `DEFAULT_BASE_URL`, prints the rendered page, and
//! turns each typed line into a gesture on one of the page's bindings.

mod shell;
mod transport;

use std::io::{self, BufRead, Write};

use todo_core::{App, Controller, TodoClient, DEFAULT_BASE_URL};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::shell::Command;
use crate::transport::UreqTransport;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let client = TodoClient::new(DEFAULT_BASE_URL);
    info!(base_url = client.base_url(), "mounting");
    let mut app = App::new(Controller::new(client), UreqTransport::new());
    // A failed load is shown as a notice on the first page.
    let _ = app.mount();

    let mut out = io::stdout().lock();
    shell::show(&mut app, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = shell::parse(&line) else {
            writeln!(out, "{}", shell::USAGE)?;
            continue;
        };
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", shell::USAGE)?,
            Command::Show => shell::show(&mut app, &mut out)?,
            Command::Html => {
                if let Some(page) = app.render() {
                    writeln!(out, "{}", page.to_html())?;
                }
            }
            command => {
                let resolved = app.render().and_then(|page| shell::resolve(&command, &page));
                match resolved {
                    Some((action, value)) => {
                        // Failures are recorded as the app's notice and rendered by `show`.
                        let _ = app.dispatch(&action, value.as_deref());
                        shell::show(&mut app, &mut out)?;
                    }
                    None => writeln!(out, "no such todo on the page")?,
                }
            }
        }
    }

    app.unmount();
    Ok(())
}
