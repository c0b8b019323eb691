//! Operator-facing commands.
//!
//! - [`setup`]: the idempotent bootstrap pipeline
//! - [`seeder`]: baseline account seeding
//! - [`directories`]: filesystem provisioning
//! - [`reset`]: the confirmed drop-and-rebuild gate

pub mod directories;
pub mod reset;
pub mod seeder;
pub mod setup;

use clap::Parser;

/// Argument value selecting the destructive reset.
pub const RESET_COMMAND: &str = "reset";

#[derive(Parser, Debug)]
#[command(name = "attendance-setup", disable_help_flag = true)]
#[command(
    about = "Attendance setup - initialize or reset the Student Attendance System database",
    long_about = None
)]
pub struct Cli {
    /// Pass `reset` to drop and rebuild the database; anything else, `--help`
    /// included, runs setup
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn action(&self) -> Action {
        Action::from_arg(self.args.first().map(String::as_str))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Setup,
    Reset,
}

impl Action {
    /// Only an exact `reset` selects the reset; everything else, including no
    /// argument at all, runs setup.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(RESET_COMMAND) => Action::Reset,
            _ => Action::Setup,
        }
    }
}

/// Prints a `=`-ruled banner around `title`.
pub(crate) fn print_banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}
