// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password using the saved settings, with optional overrides
    Generate {
        /// Password length (6-32)
        #[arg(long, short)]
        length: Option<usize>,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: Option<bool>,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: Option<bool>,

        /// Include numbers
        #[arg(long)]
        numbers: Option<bool>,

        /// Include symbols
        #[arg(long)]
        symbols: Option<bool>,

        /// Leave out look-alike characters (i, l, 1, L, o, 0, I, O)
        #[arg(long)]
        exclude_similar: Option<bool>,

        /// Copy the password to the clipboard
        #[arg(long, short)]
        copy: bool,
    },

    /// Rate the strength of a password
    Strength {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },

    /// Show recently generated passwords
    History,

    /// Copy a password from the history (1 is the most recent)
    Copy {
        #[arg(default_value_t = 1)]
        index: usize,
    },

    /// Delete the password history
    ClearHistory {
        /// Confirm deletion
        #[arg(long, short)]
        yes: bool,
    },

    /// Switch between the dark and light theme
    Theme,

    /// Open the interactive menu
    Menu,
}
