use dich_types::UiEvent;

pub const HELP: &str = "\
Type text and press Enter to translate it.
  /from <code>   source language (auto to detect)
  /to <code>     target language
  /swap          swap languages and text
  /translate     translate the current input again
  /clear         clear input and output
  /copy          copy the translation
  /cancel        cancel the running translation
  /langs         list language codes
  /quit          exit
Start a line with // to translate text that begins with /.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the app, in order
    Send(Vec<UiEvent>),
    Help,
    /// Message for the user, nothing sent
    Invalid(String),
}

pub fn parse(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(literal) = line.strip_prefix("//") {
        return translate_text(&format!("/{literal}"));
    }

    let Some(command) = line.trim_start().strip_prefix('/') else {
        if line.trim().is_empty() {
            return Command::Send(vec![UiEvent::Translate]);
        }
        return translate_text(line);
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("from", Some(code)) => Command::Send(vec![UiEvent::SelectSource(code.to_string())]),
        ("to", Some(code)) => Command::Send(vec![UiEvent::SelectTarget(code.to_string())]),
        ("from", None) => Command::Invalid("usage: /from <code>".to_string()),
        ("to", None) => Command::Invalid("usage: /to <code>".to_string()),
        ("swap", _) => Command::Send(vec![UiEvent::Swap]),
        ("translate", _) => Command::Send(vec![UiEvent::Translate]),
        ("clear", _) => Command::Send(vec![UiEvent::Clear]),
        ("copy", _) => Command::Send(vec![UiEvent::Copy]),
        ("cancel", _) => Command::Send(vec![UiEvent::Cancel]),
        ("langs", _) => Command::Send(vec![UiEvent::ListLanguages]),
        ("quit" | "exit", _) => Command::Send(vec![UiEvent::Quit]),
        ("help", _) => Command::Help,
        (other, _) => Command::Invalid(format!("unknown command /{other}, try /help")),
    }
}

fn translate_text(text: &str) -> Command {
    Command::Send(vec![
        UiEvent::InputChanged(text.to_string()),
        UiEvent::Translate,
    ])
}
