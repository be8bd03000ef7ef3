// UI layer: the interactive menu loop and the prompts around it, built on
// `dialoguer`. Everything here is thin glue; the components it drives
// (tmdb, pick, catalog, present) hold the actual logic. Component errors are
// turned into printed messages at the point of occurrence so a failed lookup
// or a corrupt catalog never takes the session down.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

use crate::catalog::{Catalog, SaveOutcome};
use crate::pick;
use crate::present;
use crate::tmdb::{SearchOutcome, TmdbClient};

/// Main interactive menu. Runs a select loop until the user chooses "Exit".
pub fn main_menu(api: TmdbClient, catalog: Catalog) -> Result<()> {
    loop {
        clear_screen()?;
        let items = vec!["Show saved movies", "Look up a movie", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                show_saved(&catalog);
                pause()?;
            }
            1 => {
                query_movie(&api, &catalog)?;
                pause()?;
            }
            2 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Print the saved list. A corrupt catalog file is reported, not fatal.
fn show_saved(catalog: &Catalog) {
    match catalog.list() {
        Ok(rows) if rows.is_empty() => println!("Your movie list is empty."),
        Ok(rows) => {
            println!("===== Saved movies =====");
            for (index, name, year) in rows {
                println!("{}. {} - {}", index, name, year);
            }
        }
        Err(e) => println!("Could not read your movie list: {:#}", e),
    }
}

/// One lookup flow: prompt for a query, search, disambiguate, fetch details,
/// display, and offer to save. Remote failures abort the flow with a message;
/// they never propagate out of here.
fn query_movie(api: &TmdbClient, catalog: &Catalog) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Which movie do you want to look up?")
        .allow_empty(true)
        .interact_text()?;
    let query = query.trim().to_string();
    if query.is_empty() {
        println!("Nothing to search for.");
        return Ok(());
    }

    let spinner = start_spinner("Searching...");
    let outcome = api.search(&query);
    spinner.finish_and_clear();

    let candidates = match outcome {
        Err(e) => {
            println!("Search failed: {:#}", e);
            return Ok(());
        }
        Ok(SearchOutcome::NotFound) => {
            println!("No movie matched that search.");
            return Ok(());
        }
        Ok(SearchOutcome::Found(candidates)) => candidates,
    };

    // Even a single hit goes through the selection step, so the user can
    // confirm the match or back out.
    let id = match pick::choose(&candidates)? {
        Some(id) => id,
        None => return Ok(()),
    };

    let spinner = start_spinner("Fetching details...");
    let fetched = api.fetch_details(id);
    spinner.finish_and_clear();

    let record = match fetched {
        Ok(record) => record,
        Err(e) => {
            println!("Could not fetch the movie details: {:#}", e);
            return Ok(());
        }
    };

    println!("{}", present::format_details(&record));

    let save = Confirm::new()
        .with_prompt("Save this movie to your list?")
        .default(false)
        .interact()?;
    if save {
        match catalog.append(&record) {
            Ok(SaveOutcome::Saved) => println!("Movie saved."),
            Ok(SaveOutcome::AlreadyExists) => {
                println!("That movie is already on your list.")
            }
            Err(e) => println!("Could not save the movie: {:#}", e),
        }
    }
    Ok(())
}

fn start_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn pause() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
