//! Interactive shell over the collection and detail screens.

use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use blog_core::BlogId;
use blog_view::{CollectionView, DetailView, Field, Route};

use crate::gateway::CliApi;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Screen to open first: / or /blog/<id>
    #[arg(default_value = "/")]
    pub route: Route,
}

const HELP: &str = "\
Collection screen:
  search [term]        filter the list (no term clears the filter)
  edit <id>            load a blog from the list into the form
  set <field> <value>  fill in title, author, tags or content
  submit               create or update from the form
  cancel               empty the form
  delete <id>          delete a blog
Anywhere:
  open <id>            show one blog
  back                 return to the collection
  go <route>           open / or /blog/<id>
  reload               fetch the current screen again
  show                 redraw the current screen
  help                 this text
  quit                 leave the shell";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Open(BlogId),
    Back,
    Go(Route),
    Edit(BlogId),
    Set(Field, String),
    Submit,
    Cancel,
    Delete(BlogId),
    Reload,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "search" | "s" => ShellCommand::Search(rest.to_string()),
            "open" => ShellCommand::Open(id_arg(word, rest)?),
            "back" => ShellCommand::Back,
            "go" => ShellCommand::Go(Route::from_str(rest).context("Invalid route")?),
            "edit" => ShellCommand::Edit(id_arg(word, rest)?),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim_start()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    bail!("usage: set <field> <value>");
                }
                ShellCommand::Set(Field::from_str(field)?, value.to_string())
            }
            "submit" | "save" => ShellCommand::Submit,
            "cancel" => ShellCommand::Cancel,
            "delete" | "rm" => ShellCommand::Delete(id_arg(word, rest)?),
            "reload" => ShellCommand::Reload,
            "show" | "ls" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => bail!("unknown command '{}' (try 'help')", other),
        };

        Ok(Some(command))
    }

    /// Whether the command only makes sense on the collection screen.
    fn needs_collection(&self) -> bool {
        matches!(
            self,
            ShellCommand::Search(_)
                | ShellCommand::Edit(_)
                | ShellCommand::Set(..)
                | ShellCommand::Submit
                | ShellCommand::Cancel
                | ShellCommand::Delete(_)
        )
    }
}

fn id_arg(command: &str, rest: &str) -> Result<BlogId> {
    if rest.is_empty() {
        bail!("usage: {} <id>", command);
    }
    BlogId::new(rest).context("Invalid blog id")
}

enum Screen {
    Collection(CollectionView),
    Detail(DetailView),
}

impl Screen {
    fn route(&self) -> Route {
        match self {
            Screen::Collection(_) => Route::Collection,
            Screen::Detail(view) => Route::Detail(view.id().clone()),
        }
    }

    fn render(&self) {
        match self {
            Screen::Collection(view) => render::collection(view),
            Screen::Detail(view) => render::detail(view),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

struct Shell<'a> {
    api: &'a CliApi,
    screen: Screen,
}

impl<'a> Shell<'a> {
    async fn open(api: &'a CliApi, route: Route) -> Self {
        let mut shell = Shell {
            api,
            screen: Screen::Collection(CollectionView::new()),
        };
        shell.navigate(route).await;
        shell
    }

    /// Switch screens. Failures are kept in the screen's state and rendered.
    async fn navigate(&mut self, route: Route) {
        match route {
            Route::Detail(id) => {
                if let Screen::Detail(view) = &mut self.screen {
                    // Refetches only when the id changed
                    if let Err(e) = view.navigate(self.api, id).await {
                        debug!(error = %e, "Detail load failed");
                    }
                    return;
                }

                let mut view = DetailView::new(id);
                if let Err(e) = view.load(self.api).await {
                    debug!(error = %e, "Detail load failed");
                }
                self.screen = Screen::Detail(view);
            }
            Route::Collection => {
                let mut view = CollectionView::new();
                if let Err(e) = view.mount(self.api).await {
                    debug!(error = %e, "List load failed");
                }
                self.screen = Screen::Collection(view);
            }
        }
    }

    async fn apply(&mut self, command: ShellCommand) -> Flow {
        if command.needs_collection() && !matches!(self.screen, Screen::Collection(_)) {
            output::error("Only available on the collection screen; use 'back' first");
            return Flow::Continue;
        }

        match command {
            ShellCommand::Quit => return Flow::Quit,
            ShellCommand::Help => {
                println!("{}", HELP);
                return Flow::Continue;
            }
            ShellCommand::Show => {}
            ShellCommand::Open(id) => self.navigate(Route::Detail(id)).await,
            ShellCommand::Back => self.navigate(Route::Collection).await,
            ShellCommand::Go(route) => self.navigate(route).await,
            ShellCommand::Reload => {
                let result = match &mut self.screen {
                    Screen::Collection(view) => view.load(self.api).await.map(|_| ()),
                    Screen::Detail(view) => view.load(self.api).await.map(|_| ()),
                };
                if let Err(e) = result {
                    debug!(error = %e, "Reload failed");
                }
            }
            command => {
                if let Screen::Collection(view) = &mut self.screen {
                    apply_to_collection(view, self.api, command).await;
                }
            }
        }

        self.screen.render();
        Flow::Continue
    }
}

async fn apply_to_collection(view: &mut CollectionView, api: &CliApi, command: ShellCommand) {
    match command {
        ShellCommand::Search(term) => {
            if let Err(e) = view.search(api, term).await {
                debug!(error = %e, "Search failed");
            }
        }
        ShellCommand::Edit(id) => {
            if !view.edit(&id) {
                output::error(&format!("Blog {} is not in the list", id));
            }
        }
        ShellCommand::Set(field, value) => view.form_mut().set(field, value),
        ShellCommand::Cancel => view.cancel_edit(),
        ShellCommand::Submit => match view.submit(api).await {
            Ok(blog) => output::success(&format!("Saved blog {}", blog.id)),
            Err(e) => debug!(error = %e, "Submit failed"),
        },
        ShellCommand::Delete(id) => match view.delete(api, id.clone()).await {
            Ok(()) => output::success(&format!("Deleted blog {}", id)),
            Err(e) => debug!(error = %e, "Delete failed"),
        },
        other => debug!(?other, "Not a collection command"),
    }
}

fn prompt(route: &Route) -> Result<()> {
    print!("blog:{}> ", route);
    std::io::stdout().flush().context("Failed to write prompt")
}

pub async fn run(args: ShellArgs, api: &CliApi) -> Result<()> {
    let mut shell = Shell::open(api, args.route).await;
    shell.screen.render();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&shell.screen.route())?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            println!();
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                output::error(&e.to_string());
                continue;
            }
        };

        if let Flow::Quit = shell.apply(command).await {
            break;
        }
    }

    Ok(())
}
