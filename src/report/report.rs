use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use chrono::Local;
use tracing::info;

use crate::errors::errors::Error;

pub const REPORT_TITLE: &str = "**** Syntactic analyzer : output data ****";

/// Printed once a report has been written.
pub const SUCCESS_MESSAGE: &str = "\nTokens/Lexemes file created with success.";

/// The two banner lines heading a report.
pub fn generation_banner(timestamp: &str) -> String {
    format!("\n {}\n**** Generation date: {} ****\n\n", REPORT_TITLE, timestamp)
}

/// Writes the banner and one diagnostic line per token to `out`, echoing each
/// diagnostic line to `echo`.
pub fn write_report<W, E, S>(out: &mut W, echo: &mut E, lines: &[S], generated_at: &str) -> io::Result<()>
where
    W: Write,
    E: Write,
    S: AsRef<str>,
{
    out.write_all(generation_banner(generated_at).as_bytes())?;

    for line in lines {
        write!(out, "\n{}", line.as_ref())?;
        writeln!(echo, "{}", line.as_ref())?;
    }

    out.flush()?;
    echo.flush()
}

/// Creates the report file at `path`, stamped with the local date and time,
/// echoing the lines to stdout.
pub fn create_report<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| Error::report_unwritable(path.display(), e))?;
    let mut out = BufWriter::new(file);
    let generated_at = Local::now().format("%x %X").to_string();

    let stdout = io::stdout();
    let mut echo = stdout.lock();

    write_report(&mut out, &mut echo, lines, &generated_at)
        .map_err(|e| Error::report_unwritable(path.display(), e))?;

    info!(path = %path.display(), lines = lines.len(), "report written");
    Ok(())
}
