// Entrypoint for the CLI application.
// - Keeps `main` small: build the config, wire up the client and catalog,
//   and hand them to the UI loop.
// - Returns `anyhow::Result` so a missing API key prints a clear message.

use movielog_cli::{catalog::Catalog, config::Config, tmdb::TmdbClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let api = TmdbClient::new(&config)?;
    let catalog = Catalog::new(config.catalog_path.clone());

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(api, catalog)?;
    Ok(())
}
