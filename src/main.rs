use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use folio_core::{Faceted, FacetedListView};
use std::process;

mod cli;
mod errors;
mod handlers;
mod logging;
mod state;
mod ui;

use cli::{Cli, ListArgs, View};
use errors::map_file_load_error;
use handlers::apply_list_args;
use state::AppState;
use ui::{render_facets, render_list, render_profile, ItemDetails};

fn main() {
    let cli = Cli::parse();

    logging::init_cli_logger(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut state = AppState::new(today);

    if let Err(err) = state.load_from_file(cli.file.clone()) {
        let (title, message, details) = map_file_load_error(&err, &cli.file);
        eprintln!("{} {}", format!("{}:", title).red().bold(), message);
        eprintln!("\n{}", details);
        process::exit(1);
    }
    tracing::debug!(title = %state.get_title(), "portfolio ready");

    if let Err(err) = run(&state, &cli.view) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(state: &AppState, view: &View) -> anyhow::Result<()> {
    match view {
        View::Profile => {
            print!("{}", render_profile(&state.data.profile, state.today));
        }
        View::Courses(args) => {
            let list = state
                .course_view(args.per_page)
                .context("Invalid --per-page")?;
            show_list(list, args, state);
        }
        View::Books(args) => {
            let list = state
                .book_view(args.per_page)
                .context("Invalid --per-page")?;
            show_list(list, args, state);
        }
    }
    Ok(())
}

fn show_list<T: Faceted + ItemDetails>(mut list: FacetedListView<T>, args: &ListArgs, state: &AppState) {
    apply_list_args(&mut list, args);

    if args.facets {
        println!("{}", render_facets(&list));
    }
    print!("{}", render_list(&list, args.sort_by(), state.today));
}
