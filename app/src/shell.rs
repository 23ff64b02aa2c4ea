//! The command loop: one page on screen at a time, one command per line.

use std::io::Write;
use std::sync::Arc;

use crud_core::{ApiError, Entity, Page, Post, Route, Submitted, Transport, User};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::command::{is_yes, Command, HELP};
use crate::render;

const NO_PAGE: &str = "nothing to act on here; open /users or /posts first";

enum Screen<T> {
    Home,
    Users(Page<User, T>),
    Posts(Page<Post, T>),
}

/// Owns the page currently on screen. Navigating away drops the page and
/// its state; navigating back mounts a fresh one.
pub struct Shell<T> {
    base_url: String,
    transport: Arc<T>,
    screen: Screen<T>,
}

impl<T: Transport> Shell<T> {
    pub fn new(base_url: &str, transport: Arc<T>) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
            screen: Screen::Home,
        }
    }

    pub fn route(&self) -> Route {
        match self.screen {
            Screen::Home => Route::Home,
            Screen::Users(_) => Route::Users,
            Screen::Posts(_) => Route::Posts,
        }
    }

    /// Replaces the current page and mounts the new one.
    pub async fn navigate(&mut self, route: Route) {
        tracing::info!(%route, "navigating");
        self.screen = match route {
            Route::Home => Screen::Home,
            Route::Users => Screen::Users(Page::open(&self.base_url, Arc::clone(&self.transport))),
            Route::Posts => Screen::Posts(Page::open(&self.base_url, Arc::clone(&self.transport))),
        };
        let mounted = match &self.screen {
            Screen::Home => Ok(0),
            Screen::Users(page) => page.mount().await,
            Screen::Posts(page) => page.mount().await,
        };
        if let Err(err) = mounted {
            tracing::debug!(%route, error = %err, "mount settled with an error");
        }
    }

    pub async fn render(&self) -> String {
        match &self.screen {
            Screen::Home => render::home(),
            Screen::Users(page) => {
                render::page(Route::Users, &page.snapshot().await, page.pending_delete())
            }
            Screen::Posts(page) => {
                render::page(Route::Posts, &page.snapshot().await, page.pending_delete())
            }
        }
    }

    /// Reads commands from `input` until `quit` or end of input, rendering
    /// the page to `out` after each one.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        write!(out, "{}", self.render().await)?;
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            tracing::debug!(?command, "command");
            match command {
                Command::Quit => break,
                Command::Help => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                Command::Show => {}
                Command::Go(route) => self.navigate(route).await,
                Command::Delete(id) => self.delete(id, &mut lines, out).await?,
                other => {
                    let outcome = match &mut self.screen {
                        Screen::Home => {
                            writeln!(out, "{NO_PAGE}")?;
                            continue;
                        }
                        Screen::Users(page) => apply(page, other).await,
                        Screen::Posts(page) => apply(page, other).await,
                    };
                    if let Ok(Some(note)) = outcome {
                        writeln!(out, "{note}")?;
                    }
                }
            }
            write!(out, "{}", self.render().await)?;
        }
        Ok(())
    }

    /// Two-step delete: mark the row, ask, then act on the answer. End of
    /// input counts as "no".
    async fn delete<R, W>(&mut self, id: u64, lines: &mut Lines<R>, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let kind = match &mut self.screen {
            Screen::Home => {
                writeln!(out, "{NO_PAGE}")?;
                return Ok(());
            }
            Screen::Users(page) => {
                page.request_delete(id);
                User::KIND
            }
            Screen::Posts(page) => {
                page.request_delete(id);
                Post::KIND
            }
        };
        write!(out, "delete {kind} {id}? [y/N] ")?;
        out.flush()?;
        let answer = lines.next_line().await?.unwrap_or_default();
        let confirmed = is_yes(&answer);
        let deleted = match &mut self.screen {
            Screen::Home => Ok(None),
            Screen::Users(page) => page.confirm_delete(confirmed).await,
            Screen::Posts(page) => page.confirm_delete(confirmed).await,
        };
        match deleted {
            Ok(Some(id)) => writeln!(out, "deleted {kind} {id}")?,
            Ok(None) => writeln!(out, "kept {kind} {id}")?,
            Err(_) => {}
        }
        Ok(())
    }
}

/// Runs a page-level command. Failures are already recorded on the page and
/// shown by the next render; the returned note is for successes.
async fn apply<E: Entity, T: Transport>(
    page: &mut Page<E, T>,
    command: Command,
) -> Result<Option<String>, ApiError> {
    match command {
        Command::Refresh => page
            .refresh()
            .await
            .map(|count| Some(format!("fetched {count} {}(s)", E::KIND))),
        Command::Edit(id) => page.edit(id).await.map(|()| None),
        Command::Set { field, value } => page.set_field(&field, &value).await.map(|()| None),
        Command::Submit => page.submit().await.map(|submitted| {
            Some(match submitted {
                Submitted::Created(id) => format!("created {} {id}", E::KIND),
                Submitted::Updated(id) => format!("updated {} {id}", E::KIND),
            })
        }),
        Command::Cancel => {
            page.cancel().await;
            Ok(None)
        }
        Command::Show | Command::Go(_) | Command::Delete(_) | Command::Help | Command::Quit => {
            Ok(None)
        }
    }
}
