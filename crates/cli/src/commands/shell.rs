//! Interactive console shell.
//!
//! Reads one command per line, applies it to an [`App`] and prints the
//! resulting screen. The loop awaits input on the Tokio runtime, so the
//! notification countdown keeps running between commands.

use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use author_desk_admin::App;
use author_desk_admin::config::AdminConfig;
use author_desk_admin::error::AppError;
use author_desk_admin::models::FormField;
use author_desk_admin::routes::View;
use author_desk_core::AuthorId;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  browse | admin | login       switch view
  login <user> <password>      log in
  logout                       log out
  search [term]                filter authors by name (no term clears)
  new                          open an empty author form
  edit <id>                    open the form for an author
  set <first|last|bio> <text>  fill a form field
  save | cancel                submit or discard the form
  delete <id>                  delete an author
  help                         show this text
  quit                         exit
";

/// Errors from parsing a shell line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid author id '{0}'")]
    InvalidId(String),

    #[error("Unknown field '{0}' (expected first, last or bio)")]
    UnknownField(String),
}

/// One parsed shell command.
#[derive(Debug)]
pub enum ShellCommand {
    Navigate(View),
    Login {
        username: String,
        password: SecretString,
    },
    Logout,
    Search(String),
    New,
    Edit(AuthorId),
    Set {
        field: FormField,
        value: String,
    },
    Save,
    Cancel,
    Delete(AuthorId),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line.
    ///
    /// The first word is the command. `search` and `set` keep the rest of
    /// the line verbatim so values may contain spaces.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` describing why the line is not a command.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (name, rest) = split_word(line);
        match name {
            "browse" => Ok(Self::Navigate(View::Browse)),
            "admin" => Ok(Self::Navigate(View::AdminPanel)),
            "login" if rest.is_empty() => Ok(Self::Navigate(View::Login)),
            "login" => {
                let (username, password) = split_word(rest);
                if password.is_empty() {
                    return Err(ParseError::MissingArgument("password"));
                }
                Ok(Self::Login {
                    username: username.to_string(),
                    password: SecretString::from(password),
                })
            }
            "logout" => Ok(Self::Logout),
            "search" => Ok(Self::Search(rest.to_string())),
            "new" => Ok(Self::New),
            "edit" => parse_id(rest).map(Self::Edit),
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(ParseError::MissingArgument("field"));
                }
                let field = FormField::from_str(field)
                    .map_err(|_| ParseError::UnknownField(field.to_string()))?;
                Ok(Self::Set {
                    field,
                    value: value.to_string(),
                })
            }
            "save" => Ok(Self::Save),
            "cancel" => Ok(Self::Cancel),
            "delete" => parse_id(rest).map(Self::Delete),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(s: &str) -> (&str, &str) {
    s.split_once(char::is_whitespace)
        .map_or((s, ""), |(word, rest)| (word, rest.trim()))
}

fn parse_id(raw: &str) -> Result<AuthorId, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument("id"));
    }
    raw.parse()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}

/// Apply a command to the app. `Help` and `Quit` are handled by the loop.
///
/// A rejected login is not an error here: the app has already posted the
/// failure notification.
fn apply(app: &mut App, command: ShellCommand) -> Result<(), AppError> {
    match command {
        ShellCommand::Navigate(view) => {
            app.navigate(view);
        }
        ShellCommand::Login { username, password } => {
            if let Err(e) = app.login(&username, &password) {
                debug!(error = %e, "Shell login rejected");
            }
        }
        ShellCommand::Logout => app.logout(),
        ShellCommand::Search(term) => app.set_search(term),
        ShellCommand::New => app.open_new_form()?,
        ShellCommand::Edit(id) => app.open_edit_form(id)?,
        ShellCommand::Set { field, value } => app.set_form_field(field, value)?,
        ShellCommand::Save => {
            app.submit_form()?;
        }
        ShellCommand::Cancel => app.cancel_form(),
        ShellCommand::Delete(id) => {
            app.delete_author(id)?;
        }
        ShellCommand::Help | ShellCommand::Quit => {}
    }
    Ok(())
}

/// Drive `app` from `input` until end of input or `quit`, writing screens
/// to `output`.
///
/// # Errors
///
/// Returns an error if reading input, writing output or rendering fails.
pub async fn drive<R, W>(app: &mut App, input: R, output: &mut W) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_screen(app, output).await?;

    while let Some(line) = lines.next_line().await? {
        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => {
                debug!("Quit requested");
                break;
            }
            Ok(ShellCommand::Help) => {
                output.write_all(HELP.as_bytes()).await?;
                output.write_all(PROMPT.as_bytes()).await?;
                output.flush().await?;
                continue;
            }
            Ok(command) => {
                if let Err(e) = apply(app, command) {
                    output.write_all(format!("! {e}\n").as_bytes()).await?;
                }
            }
            // A blank line redraws the screen
            Err(ParseError::Empty) => {}
            Err(e) => {
                output.write_all(format!("! {e}\n").as_bytes()).await?;
            }
        }
        write_screen(app, output).await?;
    }

    Ok(())
}

async fn write_screen<W>(app: &App, output: &mut W) -> Result<(), Box<dyn std::error::Error>>
where
    W: AsyncWrite + Unpin,
{
    let screen = app.render()?;
    output.write_all(screen.as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

/// Run the shell on stdin/stdout.
///
/// # Errors
///
/// Returns an error if terminal I/O or rendering fails.
pub async fn run(config: &AdminConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(data_dir = %config.data_dir.display(), "Starting shell");
    let mut app = App::open(config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    drive(&mut app, stdin, &mut stdout).await?;

    info!("Shell closed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use author_desk_admin::db::{AuthorRepository, MemorySlot};
    use author_desk_admin::services::{AuthorStore, NotificationChannel};

    use super::*;

    fn app() -> App {
        let store = AuthorStore::open(AuthorRepository::new(MemorySlot::new()));
        App::new(store, NotificationChannel::default())
    }

    async fn session(input: &str) -> (App, String) {
        let mut app = app();
        let mut out = Vec::new();
        drive(&mut app, input.as_bytes(), &mut out).await.unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_navigation() {
        assert!(matches!(ShellCommand::parse("browse"), Ok(ShellCommand::Navigate(View::Browse))));
        assert!(matches!(ShellCommand::parse("  admin "), Ok(ShellCommand::Navigate(View::AdminPanel))));
        assert!(matches!(ShellCommand::parse("login"), Ok(ShellCommand::Navigate(View::Login))));
    }

    #[test]
    fn test_parse_login() {
        let Ok(ShellCommand::Login { username, password }) = ShellCommand::parse("login admin admin") else {
            panic!("expected login");
        };
        assert_eq!(username, "admin");
        assert_eq!(password.expose_secret(), "admin");

        assert_eq!(
            ShellCommand::parse("login admin").unwrap_err(),
            ParseError::MissingArgument("password")
        );
    }

    #[test]
    fn test_parse_search_keeps_spaces() {
        let Ok(ShellCommand::Search(term)) = ShellCommand::parse("search  Anna Liep ") else {
            panic!("expected search");
        };
        assert_eq!(term, "Anna Liep");
        assert!(matches!(ShellCommand::parse("search"), Ok(ShellCommand::Search(t)) if t.is_empty()));
    }

    #[test]
    fn test_parse_set() {
        let Ok(ShellCommand::Set { field, value }) = ShellCommand::parse("set bio Poet and critic.") else {
            panic!("expected set");
        };
        assert_eq!(field, FormField::Bio);
        assert_eq!(value, "Poet and critic.");

        assert_eq!(
            ShellCommand::parse("set middle X").unwrap_err(),
            ParseError::UnknownField("middle".to_string())
        );
        assert_eq!(ShellCommand::parse("set").unwrap_err(), ParseError::MissingArgument("field"));
    }

    #[test]
    fn test_parse_ids() {
        assert!(matches!(ShellCommand::parse("edit 3"), Ok(ShellCommand::Edit(id)) if id == AuthorId::new(3)));
        assert!(matches!(ShellCommand::parse("delete 4"), Ok(ShellCommand::Delete(id)) if id == AuthorId::new(4)));
        assert_eq!(ShellCommand::parse("edit").unwrap_err(), ParseError::MissingArgument("id"));
        assert_eq!(
            ShellCommand::parse("delete four").unwrap_err(),
            ParseError::InvalidId("four".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(ShellCommand::parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(
            ShellCommand::parse("dance").unwrap_err(),
            ParseError::UnknownCommand("dance".to_string())
        );
        assert!(matches!(ShellCommand::parse("quit"), Ok(ShellCommand::Quit)));
        assert!(matches!(ShellCommand::parse("?"), Ok(ShellCommand::Help)));
    }

    #[tokio::test]
    async fn test_drive_admin_adds_author() {
        let (app, out) = session(
            "login admin admin\nadmin\nnew\nset first Rūdolfs\nset last Blaumanis\nset bio Writer.\nsave\nquit\n",
        )
        .await;

        assert_eq!(app.authors().len(), 5);
        assert!(out.contains(">> Author added successfully!"));
        assert!(out.contains("Blaumanis"));
    }

    #[tokio::test]
    async fn test_drive_reports_errors_and_continues() {
        let (app, out) = session("bogus\ndelete 1\nlogin user user\nadmin\n").await;

        assert!(out.contains("! Unknown command 'bogus'"));
        assert!(out.contains("! Forbidden"));
        assert!(out.contains("You do not have permission to access the admin panel."));
        assert_eq!(app.authors().len(), 4);
    }

    #[tokio::test]
    async fn test_drive_delete_refused_while_editing() {
        let (app, out) = session("login admin admin\nadmin\nedit 2\ndelete 2\ncancel\n").await;

        assert!(out.contains("! Save or cancel the open author form first"));
        assert_eq!(app.authors().len(), 4);
        assert!(app.form().is_none());
    }

    #[tokio::test]
    async fn test_drive_failed_login_is_notified() {
        let (app, out) = session("login admin nope\n").await;
        assert!(out.contains(">> Invalid username or password."));
        assert!(!app.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_drive_help_and_quit_stop_reading() {
        let (_, out) = session("help\nquit\nlogin admin admin\n").await;
        assert!(out.contains("set <first|last|bio> <text>"));
        assert!(!out.contains("Logged in successfully"));
    }
}
