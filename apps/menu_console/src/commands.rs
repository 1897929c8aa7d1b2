//! Console command grammar, parsed with clap from one input line.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct ConsoleLine {
    #[command(subcommand)]
    pub command: ConsoleCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Show the menu in serving order
    #[command(alias = "ls")]
    List,
    /// Fill one field of the form
    Set {
        field: DraftField,
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Show the form
    Draft,
    /// Add the drafted item, or save changes to the item being edited
    #[command(alias = "save")]
    Submit,
    /// Load an item into the form for editing
    Edit { id: String },
    /// Abandon the current edit
    Cancel,
    /// Flip an item between available and unavailable
    Toggle { id: String },
    /// Move the item at INDEX one place towards the top
    Up { index: usize },
    /// Move the item at INDEX one place towards the bottom
    Down { index: usize },
    /// Remove an item from the menu
    Delete { id: String },
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DraftField {
    Name,
    Price,
    Category,
    Available,
}

/// Splits on whitespace, keeping double-quoted runs together.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

pub fn parse_switch(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Some(true),
        "off" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
