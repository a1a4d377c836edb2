//! Ask the Operator a question from the command line.

use std::sync::Arc;

use chrono::Utc;

use auro_admin::mock::MockCatalog;
use auro_admin::operator::{Dispatcher, Reply};

/// Dispatch `text` against a freshly seeded catalog.
#[must_use]
pub fn ask(text: &str) -> Reply {
    let dispatcher = Dispatcher::new(Arc::new(MockCatalog::seed(Utc::now())));
    dispatcher.dispatch(text)
}

/// Render a reply for the terminal: the text, then the panel kind if any.
#[must_use]
pub fn summary(reply: &Reply) -> String {
    match &reply.panel {
        Some(panel) => format!("{}\n\n[panel: {}]", reply.text, panel.kind()),
        None => reply.text.clone(),
    }
}

/// Run the `ask` command.
///
/// # Errors
///
/// Returns an error if the reply cannot be serialized.
pub fn run(text: &str, json: bool) -> Result<(), serde_json::Error> {
    let reply = ask(text);
    tracing::debug!(intent = ?reply.intent, "Operator answered");

    let output = if json {
        serde_json::to_string_pretty(&reply)?
    } else {
        summary(&reply)
    };

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}
