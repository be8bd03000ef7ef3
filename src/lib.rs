// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive movie tool.
//
// Module responsibilities:
// - `config`: builds the runtime configuration (API key, URLs, catalog
//   path) from the environment, once, at startup.
// - `tmdb`: the metadata client — blocking HTTP search and detail fetch
//   against the movie provider, mapped into normalized records.
// - `pick`: disambiguation of multiple search candidates into one id.
// - `catalog`: the persisted saved-movies list with idempotent appends.
// - `present`: formatting of a movie record for display.
// - `ui`: the terminal menu and prompts, delegating to everything above.
//
// Keeping this separation makes the core operations (dedup, selection,
// response mapping) testable without a terminal or a network.
pub mod catalog;
pub mod config;
pub mod pick;
pub mod present;
pub mod tmdb;
pub mod ui;
