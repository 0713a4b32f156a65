use std::io::{self, Write};

use crate::tmdb::MovieDetails;

const BORDER: &str = "========================================";

/// Write the bordered detail block for one movie.
///
/// Returns whether a record was actually rendered; `None` writes nothing, so
/// callers know not to follow up with a retry prompt.
pub fn present<W: Write>(out: &mut W, record: Option<&MovieDetails>) -> io::Result<bool> {
    let Some(record) = record else {
        return Ok(false);
    };

    writeln!(out)?;
    writeln!(out, "{}", BORDER)?;
    writeln!(out, "Movie Title: {}", record.title)?;
    writeln!(out, "{}", BORDER)?;
    writeln!(out, "Rating (TMDB): {}", record.rating_display())?;
    writeln!(out, "Release Date:  {}", record.release_date_display())?;
    writeln!(out, "Runtime:       {}", record.runtime_display())?;
    writeln!(out, "Main Cast:     {}", record.cast_display())?;
    writeln!(out, "{}", BORDER)?;
    writeln!(out)?;
    Ok(true)
}
