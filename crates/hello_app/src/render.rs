use std::io::{self, Write};

use hello_core::{MessageView, PageViewModel};
use page_logging::page_warn;
use serde::Serialize;

const CURSOR: char = '▌';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderMode {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    t_ms: u64,
    view: &'a PageViewModel,
}

pub(crate) fn print_frame(view: &PageViewModel, mode: RenderMode) {
    let frame = match mode {
        RenderMode::Text => render_text(view),
        RenderMode::Json => {
            let frame = JsonFrame {
                t_ms: page_logging::virtual_time_ms(),
                view,
            };
            match serde_json::to_string(&frame) {
                Ok(line) => line,
                Err(err) => {
                    page_warn!("Failed to serialize frame: {}", err);
                    return;
                }
            }
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{frame}").and_then(|()| stdout.flush()) {
        page_warn!("Failed to write frame: {}", err);
    }
}

pub(crate) fn render_text(view: &PageViewModel) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &view.title {
        let marker = if title.typing_class { " ✨" } else { "" };
        lines.push(format!("# {}{}", title.text, marker));
    }

    for message in &view.messages {
        match message {
            Some(message) => lines.push(format!("  {}", message_line(message))),
            None => lines.push("  (missing message)".to_string()),
        }
    }

    if !view.terms.is_empty() {
        let terms: Vec<String> = view
            .terms
            .iter()
            .map(|term| {
                if term.highlighted {
                    format!("*{}*", term.text)
                } else {
                    term.text.clone()
                }
            })
            .collect();
        lines.push(format!("  terms: {}", terms.join(", ")));
    }

    if view.flyout_visible {
        lines.push("  [slang glossary open]".to_string());
    }
    if let Some(toast) = view.toast.as_ref().filter(|toast| toast.visible) {
        lines.push(format!("  >> {}", toast.text));
    }

    lines.join("\n")
}

fn message_line(message: &MessageView) -> String {
    let text = message.display();
    if message.complete {
        text
    } else {
        format!("{text}{CURSOR}")
    }
}
