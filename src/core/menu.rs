//! The guided action menu as configuration data.
//!
//! [`MenuChoice`] is the single source of truth for menu numbering: the
//! dispatcher renders and parses it, and the status guidance references the
//! same keys, so renumbering the menu cannot silently desynchronize the
//! guidance text.

use std::fmt;

/// One selectable action in the guided loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Refresh,
    Pull,
    Push,
    Commit,
    Add,
    Tag,
    Exit,
}

impl MenuChoice {
    /// Canonical display/parse order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Refresh,
        MenuChoice::Pull,
        MenuChoice::Push,
        MenuChoice::Commit,
        MenuChoice::Add,
        MenuChoice::Tag,
        MenuChoice::Exit,
    ];

    /// The single-character key the user types.
    pub fn key(&self) -> char {
        match self {
            MenuChoice::Refresh => '0',
            MenuChoice::Pull => '1',
            MenuChoice::Push => '2',
            MenuChoice::Commit => '3',
            MenuChoice::Add => '4',
            MenuChoice::Tag => '5',
            MenuChoice::Exit => '6',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuChoice::Refresh => "REFRESH and display current status",
            MenuChoice::Pull => "PULL changes from remote repository",
            MenuChoice::Push => "PUSH changes to remote repository",
            MenuChoice::Commit => "COMMIT changes to local repository",
            MenuChoice::Add => "ADD changes/files to staging area",
            MenuChoice::Tag => "TAG the repository",
            MenuChoice::Exit => "Exit the application",
        }
    }

    /// Parse a raw input line; `None` means re-prompt.
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let (first, rest) = (chars.next()?, chars.next());
        if rest.is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|c| c.key() == first)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.description())
    }
}
