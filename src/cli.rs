use std::io::{self, Write};
use std::path::PathBuf;

use activity_signup_core::app::RegistrationForm;
use activity_signup_core::config::{ClientConfig, DEFAULT_SERVER_URL, DEFAULT_SESSION_FILE};
use activity_signup_core::error::{ErrorKind, Result};
use clap::{Parser, Subcommand};
use rpassword::prompt_password;

#[derive(Debug, Parser)]
#[command(
    name = "activity-signup",
    version,
    about = "Register students for extracurricular activities as a teacher"
)]
struct RawArgs {
    /// Root URL of the signup server
    #[arg(
        long,
        value_name = "URL",
        env = "SIGNUP_SERVER_URL",
        default_value = DEFAULT_SERVER_URL
    )]
    server: String,
    /// File holding the stored login token
    #[arg(
        long,
        value_name = "PATH",
        env = "SIGNUP_SESSION_FILE",
        default_value = DEFAULT_SESSION_FILE
    )]
    session_file: PathBuf,
    #[command(subcommand)]
    command: Option<RawCommand>,
}

#[derive(Debug, Subcommand)]
enum RawCommand {
    /// Show every activity with its capacity and participants
    List,
    /// Show the activity names accepted by signup/unregister
    Activities,
    /// Show who is logged in
    Whoami,
    /// Log in as a teacher; missing values are prompted for
    Login {
        #[arg(short = 'u', long, value_name = "USER")]
        username: Option<String>,
        #[arg(short = 'p', long, value_name = "PASSWORD")]
        password: Option<String>,
    },
    /// Forget the stored login
    Logout,
    /// Register a student for an activity
    Signup {
        email: String,
        activity: String,
    },
    /// Remove a student from an activity
    Unregister {
        email: String,
        activity: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Activities,
    Whoami,
    Login { username: String, password: String },
    Logout,
    Signup(RegistrationForm),
    Unregister(RegistrationForm),
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub client: ClientConfig,
    pub command: Command,
}

impl CliConfig {
    pub fn parse() -> Result<Self> {
        Self::try_from(RawArgs::parse())
    }
}

impl TryFrom<RawArgs> for CliConfig {
    type Error = activity_signup_core::error::Error;

    fn try_from(args: RawArgs) -> Result<Self> {
        let client = ClientConfig::new(&args.server, args.session_file)?;
        let command = match args.command.unwrap_or(RawCommand::List) {
            RawCommand::List => Command::List,
            RawCommand::Activities => Command::Activities,
            RawCommand::Whoami => Command::Whoami,
            RawCommand::Login { username, password } => {
                let username = match username {
                    Some(username) => username,
                    None => prompt_line("Username: ", "username")?,
                };
                let password = match password {
                    Some(password) => password,
                    None => prompt_password("Password: ")?,
                };
                Command::Login { username, password }
            }
            RawCommand::Logout => Command::Logout,
            RawCommand::Signup { email, activity } => {
                Command::Signup(RegistrationForm::new(email.trim(), activity))
            }
            RawCommand::Unregister { email, activity } => {
                Command::Unregister(RegistrationForm::new(email.trim(), activity))
            }
        };
        Ok(Self { client, command })
    }
}

fn prompt_line(prompt: &str, field: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    required(field, &line)
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ErrorKind::ParseError(format!("{field} must not be empty")).into());
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_prompt_answer_reads_as_message() {
        let err = required("username", "  \n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ParseError(_)));
        assert_eq!(err.to_string(), "username must not be empty");
    }

    #[test]
    fn prompt_answer_is_trimmed() {
        assert_eq!(required("username", " admin\n").unwrap(), "admin");
    }

    #[test]
    fn missing_command_lists_activities() {
        let args = RawArgs::parse_from(["activity-signup"]);
        let config = CliConfig::try_from(args).unwrap();
        assert_eq!(config.command, Command::List);
    }
}
