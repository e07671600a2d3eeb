//! Prompt primitives for the menu loop.
//!
//! When stdin is a terminal, prompts go through dialoguer. When input is
//! piped (scripts, tests), the same flows fall back to numbered menus and
//! line reads so a session can be driven non-interactively. Malformed
//! numeric input re-prompts in both paths; end of input surfaces as
//! [`InputClosed`] so the caller can exit the loop cleanly.

use std::fmt;
use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// Stdin was closed mid-session. Treated as a request to exit.
#[derive(Debug)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Check whether an error means stdin was closed.
pub fn input_closed(err: &anyhow::Error) -> bool {
    err.is::<InputClosed>()
}

/// Prompting front-end for the shell.
pub struct Prompt {
    interactive: bool,
}

impl Prompt {
    /// Create a prompt; `interactive` enables the dialoguer path.
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    fn read_line(&self) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Pick one item from a menu. Returns the selected index.
    pub fn select(&self, title: &str, items: &[&str]) -> anyhow::Result<usize> {
        if self.interactive {
            return Ok(Select::with_theme(&ColorfulTheme::default())
                .with_prompt(title)
                .items(items)
                .default(0)
                .interact()?);
        }

        loop {
            println!("\n{}", title);
            for (index, item) in items.iter().enumerate() {
                println!("{}. {}", index + 1, item);
            }
            print!("Enter your choice: ");
            io::stdout().flush()?;

            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(choice - 1),
                _ => println!("Invalid option. Please try again."),
            }
        }
    }

    /// Read a free-text value. Empty input is allowed.
    pub fn input(&self, label: &str) -> anyhow::Result<String> {
        if self.interactive {
            return Ok(Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()?);
        }

        print!("{}: ", label);
        io::stdout().flush()?;
        self.read_line()
    }

    /// Read a numeric id, re-prompting until the input parses.
    pub fn input_u32(&self, label: &str) -> anyhow::Result<u32> {
        loop {
            let value = self.input(label)?;
            match value.parse::<u32>() {
                Ok(number) => return Ok(number),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }

    /// Ask a yes/no question, defaulting to no.
    pub fn confirm(&self, label: &str) -> anyhow::Result<bool> {
        if self.interactive {
            return Ok(Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(label)
                .default(false)
                .interact()?);
        }

        print!("{} [y/N]: ", label);
        io::stdout().flush()?;
        let line = self.read_line()?.to_lowercase();
        Ok(line == "y" || line == "yes")
    }
}
