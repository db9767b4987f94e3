use crate::domain::catalog::ItemId;

// ============================================================================
// Operator Input
// ============================================================================
//
//   <id> | +<id> | add <id>     one more of an item
//   -<id> | rm <id>             one fewer of an item
//   pay <amount>                cash handed over (anything else clears it)
//   done                        complete the order
//   help | ?                    show commands
//   quit | q | exit             leave
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Add(ItemId),
    Remove(ItemId),
    Pay(String),
    Complete,
    Help,
    Quit,
    /// Empty line, just redraw
    Refresh,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("'{0}' needs an item id")]
    MissingItemId(String),

    #[error("'{0}' is not an item id")]
    InvalidItemId(String),
}

pub const HELP: &str = "\
Commands:
  <id>, +<id>, add <id>   add one of an item
  -<id>, rm <id>          remove one of an item
  pay <amount>            record cash handed over
  done                    complete the order
  help                    show this list
  quit                    exit";

pub fn parse_action(line: &str) -> Result<UiAction, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(UiAction::Refresh);
    }

    if let Some(rest) = trimmed.strip_prefix('+') {
        return parse_item_id("+", rest).map(UiAction::Add);
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        return parse_item_id("-", rest).map(UiAction::Remove);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_lowercase().as_str() {
        "add" | "a" => parse_item_id(word, rest).map(UiAction::Add),
        "rm" | "remove" | "r" => parse_item_id(word, rest).map(UiAction::Remove),
        "pay" | "p" => Ok(UiAction::Pay(rest.to_string())),
        "done" | "complete" | "d" => Ok(UiAction::Complete),
        "help" | "h" | "?" => Ok(UiAction::Help),
        "quit" | "q" | "exit" => Ok(UiAction::Quit),
        _ if rest.is_empty() && word.chars().all(|c| c.is_ascii_digit()) => {
            parse_item_id(word, word).map(UiAction::Add)
        }
        _ => Err(InputError::UnknownCommand(word.to_string())),
    }
}

fn parse_item_id(command: &str, raw: &str) -> Result<ItemId, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::MissingItemId(command.to_string()));
    }

    raw.parse::<u32>()
        .map(ItemId)
        .map_err(|_| InputError::InvalidItemId(raw.to_string()))
}
