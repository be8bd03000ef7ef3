// Presentation module: turns a MovieRecord into the text block shown after a
// lookup. List-valued fields are comma-joined here, at the display boundary,
// and nowhere else.

use crate::tmdb::MovieRecord;

const WRAP_WIDTH: usize = 80;

/// Render the detail view for one movie.
pub fn format_details(record: &MovieRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title: {}\n", record.name));
    out.push_str(&format!("Year: {}\n", record.year));
    out.push_str(&format!("Plot: {}\n", wrap(&record.plot, WRAP_WIDTH)));
    out.push_str(&format!("Poster: {}\n", record.poster_url));
    out.push_str(&format!("Rating: {}\n", record.rating));
    out.push_str(&format!("Popularity: {}\n", record.popularity));
    out.push_str(&format!("Genres: {}\n", record.genres.join(", ")));
    out.push_str(&format!("Languages: {}\n", record.languages.join(", ")));
    out.push_str(&format!(
        "Production companies: {}\n",
        record.production_companies.join(", ")
    ));
    out.push_str(&format!(
        "Production countries: {}\n",
        record.production_countries.join(", ")
    ));
    out
}

// Greedy word wrap; words longer than the width get a line of their own.
fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}
