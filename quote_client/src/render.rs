//! Plain-text output of selections and category listings.
use std::io::{self, Write};

use quote_selector::{Category, QuoteService, SelectionResponse};

/// Write a response as text. Failures go to `err`, quotes to `out`.
pub fn write_response<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    response: &SelectionResponse,
) -> io::Result<()> {
    match (&response.quotes, &response.error) {
        (Some(quotes), _) if response.success => {
            for quote in quotes {
                writeln!(out, "[{}] {}", quote.id, quote)?;
            }
            Ok(())
        }
        (_, Some(message)) => writeln!(err, "{}", message),
        _ => writeln!(err, "Failed to fetch quotes"),
    }
}

/// Write a response as a single line of JSON.
pub fn write_json_line<W: Write>(out: &mut W, response: &SelectionResponse) -> crate::result::Result<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    Ok(())
}

/// One line per category: key, quote count, and label/description when known.
pub fn write_categories<W: Write>(out: &mut W, service: &QuoteService) -> io::Result<()> {
    for key in service.available_categories() {
        let count = service.quote_count(&key);
        match Category::from_key(&key) {
            Some(category) => writeln!(
                out,
                "{:<15} {:>3} quotes  {}: {}",
                key,
                count,
                category.label(),
                category.description()
            )?,
            None => writeln!(out, "{:<15} {:>3} quotes", key, count)?,
        }
    }
    Ok(())
}
