//! Line writer for settings files.

use std::io::{self, Write};

/// Writes each line followed by `\n`, then flushes.
///
/// # Errors
///
/// Returns the first I/O error from `writer`.  Lines already written stay
/// written; there is no rollback.
pub fn write_lines<W, I, S>(writer: &mut W, lines: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
