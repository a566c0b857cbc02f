use std::io::{self, BufRead, BufReader};
use std::thread::{self, JoinHandle};

use chrono::Utc;
use hello_core::{ClickTarget, Key, Msg, SHARE_PHRASES};
use page_logging::{page_debug, page_warn};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const HELP: &str = "commands: emoji | emoji-key <enter|space|esc> | close | esc \
                    | click [flyout|emoji] | term <n> [enter|space] | copy | share | cancel | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Send(Msg),
    Quit,
    Help,
}

/// Reads page commands from stdin on a plain OS thread.
///
/// A blocked read must not hold up runtime shutdown, so this stays off the
/// tokio blocking pool; the thread simply dies with the process.
pub(crate) fn spawn_stdin_reader(
    tx: mpsc::UnboundedSender<Msg>,
    shutdown: CancellationToken,
) -> io::Result<JoinHandle<()>> {
    spawn_reader(BufReader::new(io::stdin()), tx, shutdown)
}

fn spawn_reader<R>(
    reader: R,
    tx: mpsc::UnboundedSender<Msg>,
    shutdown: CancellationToken,
) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("stdin-commands".to_string())
        .spawn(move || forward_lines(reader, &tx, &shutdown))
}

/// Forwards commands until EOF, `quit`, shutdown or a closed inbox.
fn forward_lines<R: BufRead>(
    reader: R,
    tx: &mpsc::UnboundedSender<Msg>,
    shutdown: &CancellationToken,
) {
    for line in reader.lines() {
        if shutdown.is_cancelled() {
            break;
        }
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                page_warn!("Failed to read stdin: {}", err);
                break;
            }
        };
        match parse_command(&line, random_phrase_index()) {
            Some(Command::Send(msg)) => {
                page_debug!("stdin -> {:?}", msg);
                if tx.send(msg).is_err() {
                    break;
                }
            }
            Some(Command::Quit) => {
                shutdown.cancel();
                break;
            }
            Some(Command::Help) => eprintln!("{HELP}"),
            None if line.trim().is_empty() => {}
            None => eprintln!("unknown command {:?}; {HELP}", line.trim()),
        }
    }
}

pub(crate) fn parse_command(line: &str, phrase_index: usize) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_ascii_lowercase();
    let arg = words.next();

    let msg = match command.as_str() {
        "quit" | "exit" => return Some(Command::Quit),
        "help" | "?" => return Some(Command::Help),
        "emoji" => Msg::EmojiActivated,
        "emoji-key" => Msg::EmojiKeyPressed(parse_key(arg?)),
        "close" => Msg::CloseFlyoutClicked,
        "esc" | "escape" => Msg::KeyPressed(Key::Escape),
        "click" => Msg::DocumentClicked(match arg {
            Some("flyout") => ClickTarget::Flyout,
            Some("emoji") => ClickTarget::SecretEmoji,
            _ => ClickTarget::Elsewhere,
        }),
        "term" => {
            let index = arg?.parse().ok()?;
            match words.next() {
                Some(key) => Msg::TermKeyPressed {
                    index,
                    key: parse_key(key),
                },
                None => Msg::TermActivated(index),
            }
        }
        "copy" => Msg::CopyLinkClicked,
        "share" => Msg::ShareTwitterClicked { phrase_index },
        "cancel" | "reset" => Msg::CancelAnimations,
        _ => return None,
    };
    Some(Command::Send(msg))
}

fn parse_key(word: &str) -> Key {
    match word.to_ascii_lowercase().as_str() {
        "enter" => Key::Enter,
        "space" => Key::Space,
        "esc" | "escape" => Key::Escape,
        _ => Key::Other,
    }
}

fn random_phrase_index() -> usize {
    Utc::now().timestamp_subsec_nanos() as usize % SHARE_PHRASES.len()
}
