//! The `scorecard browse` command.
//!
//! Reads one command per line from stdin and re-renders the page after each
//! one that changes what is visible. `email`/`module` only edit the search
//! inputs; nothing is filtered until `search`.

use std::io::{BufRead, Write};

use anyhow::Result;

use scorecard_core::{Phase, Scorecard};
use scorecard_report::render_text;

use crate::SourceArgs;

const HELP: &str = "\
Commands:
  email <text>    set the email search input (empty to reset)
  module <text>   set the module search input (empty to reset)
  search          apply both search inputs
  clear           reset both inputs and show all records
  next | prev     move one page
  page <n>        jump to page n
  show            redraw the current page
  help            show this help
  quit            leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Email(String),
    Module(String),
    Search,
    Clear,
    Next,
    Prev,
    Page(usize),
    Show,
    Help,
    Quit,
    Blank,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Command::Blank,
        "email" => Command::Email(rest.to_string()),
        "module" => Command::Module(rest.to_string()),
        "search" => Command::Search,
        "clear" => Command::Clear,
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "page" => match rest.parse::<usize>() {
            Ok(n) => Command::Page(n),
            Err(_) => Command::Invalid(format!("page expects a number, got '{rest}'")),
        },
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command '{other}', type 'help'")),
    }
}

pub async fn execute(source: SourceArgs) -> Result<()> {
    let mut card = super::mount(&source).await?;

    if card.phase() != Phase::Ready {
        println!("{}", render_text(&card.view()));
        return super::ensure_loaded(&card);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut card, stdin.lock(), stdout.lock())
}

/// Drive `card` from line commands until `quit` or end of input.
fn run_session<R: BufRead, W: Write>(card: &mut Scorecard, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", render_text(&card.view()))?;

    for line in input.lines() {
        let redraw = match parse_command(&line?) {
            Command::Email(text) => {
                card.set_email_query(text);
                false
            }
            Command::Module(text) => {
                card.set_module_query(text);
                false
            }
            Command::Search => {
                card.search();
                writeln!(out, "{} matching record(s)", card.filtered_len())?;
                true
            }
            Command::Clear => {
                card.clear();
                true
            }
            Command::Next => {
                card.next_page();
                true
            }
            Command::Prev => {
                card.prev_page();
                true
            }
            Command::Page(n) => {
                card.go_to_page(n);
                true
            }
            Command::Show => true,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                false
            }
            Command::Quit => break,
            Command::Blank => false,
            Command::Invalid(hint) => {
                writeln!(out, "{hint}")?;
                false
            }
        };

        if redraw {
            writeln!(out, "{}", render_text(&card.view()))?;
        }
    }

    out.flush()?;
    Ok(())
}
