//! Line-oriented terminal front end
//!
//! Reads one command per line, activates the matching control on the page and
//! prints the page again.

use std::io::Write;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use network_api::PostId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::context::{Alerts, PageContext};
use crate::error::ClientResult;
use crate::pages::{FeedPage, FollowingPage, PageController, ProfilePage};

pub const HELP: &str = "\
commands:
  next | prev            change page
  like <id>              like or unlike a post
  edit <id>              enter or cancel edit mode
  type <id> <text>       replace the text of a post being edited
  save <id>              save the edited post
  post <text>            create a post (feed only)
  follow                 follow or unfollow (profile only)
  show | help | quit";

/// Which page to open
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageKind {
    Feed,
    Following,
    Profile(String),
}

impl PageKind {
    /// Parse `feed`, `following` or `profile <username>`; no argument means feed
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        match args {
            [] => Ok(Self::Feed),
            [page] if page == "feed" => Ok(Self::Feed),
            [page] if page == "following" => Ok(Self::Following),
            [page, username] if page == "profile" => Ok(Self::Profile(username.clone())),
            [page] if page == "profile" => Err("profile requires a username".to_string()),
            other => Err(format!("unrecognised arguments: {}", other.join(" "))),
        }
    }
}

/// Bootstrap the requested page (loads page 1)
pub async fn open(kind: &PageKind, ctx: &PageContext) -> Box<dyn PageController> {
    match kind {
        PageKind::Feed => Box::new(FeedPage::bootstrap(ctx).await),
        PageKind::Following => Box::new(FollowingPage::bootstrap(ctx).await),
        PageKind::Profile(username) => Box::new(ProfilePage::bootstrap(ctx, username).await),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Like(PostId),
    Edit(PostId),
    Type(PostId, String),
    Save(PostId),
    Post(String),
    Follow,
    Show,
    Help,
    Quit,
}

fn parse_id(arg: Option<&str>) -> Result<PostId, String> {
    let arg = arg.ok_or_else(|| "missing post id".to_string())?;
    arg.trim()
        .parse()
        .map_err(|_| format!("invalid post id: {}", arg))
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim_start())),
            None => (line, None),
        };

        match word {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "like" => parse_id(rest).map(Self::Like),
            "edit" => parse_id(rest).map(Self::Edit),
            "save" => parse_id(rest).map(Self::Save),
            "type" => {
                let rest = rest.ok_or_else(|| "usage: type <id> <text>".to_string())?;
                let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Self::Type(parse_id(Some(id))?, text.to_string()))
            }
            // content is sent as typed; validation happens on submit
            "post" => Ok(Self::Post(rest.unwrap_or_default().to_string())),
            "follow" | "unfollow" => Ok(Self::Follow),
            "show" | "" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// Activate the control behind `command`
pub async fn execute(page: &mut dyn PageController, command: Command) -> ClientResult<()> {
    match command {
        Command::Next => page.next().await,
        Command::Previous => page.previous().await,
        Command::Like(id) => page.toggle_like(id).await,
        Command::Edit(id) => page.toggle_edit(id),
        Command::Type(id, text) => page.edit_text(id, &text),
        Command::Save(id) => page.save_edit(id).await,
        Command::Post(content) => page.submit_post(&content).await,
        Command::Follow => page.toggle_follow().await,
        Command::Show | Command::Help | Command::Quit => Ok(()),
    }
}

/// Command loop; returns when input ends or on `quit`. Alerts raised by a
/// command are written to `out` ahead of the page.
pub async fn run<R, W>(
    page: &mut dyn PageController,
    alerts: &TerminalAlerts,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    alerts.flush(out)?;
    writeln!(out, "{}", page.render())?;
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "! {}", message)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            command => {
                debug!(?command, "Executing command");
                match execute(page, command).await {
                    Err(e) if e.needs_reporting() => writeln!(out, "! {}", e)?,
                    Err(e) => debug!(error = %e, "Command failed"),
                    Ok(()) => {}
                }
            }
        }

        alerts.flush(out)?;
        writeln!(out, "{}", page.render())?;
    }

    Ok(())
}

/// Alerts queued until the command loop prints them
#[derive(Default)]
pub struct TerminalAlerts {
    pending: Mutex<Vec<String>>,
}

impl TerminalAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write and clear every queued alert
    pub fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let pending = std::mem::take(&mut *self.lock());
        for message in pending {
            writeln!(out, "[alert] {}", message)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Alerts for TerminalAlerts {
    fn alert(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
