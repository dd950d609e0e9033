//! Parsing of the line-oriented commands typed at the prompt.

use crate::model::ProductId;
use crate::screen::ScreenEvent;
use crate::shell::ShellError;

pub const HELP: &str = "\
Commands:
  select <id>   pick a product
  clear         clear the product pick
  qty <n>       set the quantity
  add           add the picked product to the order
  submit        send the order
  dismiss       hide the current message
  refresh       redraw the screen
  help          show this help
  quit          exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forwarded to the screen actor.
    Screen(ScreenEvent),
    Help,
    Quit,
}

/// Parses one input line.
///
/// Blank lines redraw the screen.
pub fn parse(line: &str) -> Result<Command, ShellError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Screen(ScreenEvent::Refresh));
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "select" => {
            let raw = words.next().ok_or(ShellError::MissingArgument("select"))?;
            let id = raw
                .parse::<u32>()
                .map_err(|_| ShellError::InvalidProductId(raw.to_string()))?;
            Command::Screen(ScreenEvent::SelectProduct(Some(ProductId(id))))
        }
        "clear" => Command::Screen(ScreenEvent::SelectProduct(None)),
        "qty" => {
            let raw = words.next().ok_or(ShellError::MissingArgument("qty"))?;
            Command::Screen(ScreenEvent::SetQuantity(raw.to_string()))
        }
        "add" => Command::Screen(ScreenEvent::AddItem),
        "submit" => Command::Screen(ScreenEvent::Submit),
        "dismiss" => Command::Screen(ScreenEvent::Dismiss),
        "refresh" => Command::Screen(ScreenEvent::Refresh),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}
