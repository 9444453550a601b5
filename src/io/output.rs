use crate::core::Sequence;
use crate::errors::Result;
use std::fmt::Write as _;
use std::io::Write;

/// Writes each term in decimal followed by a single space. No trailing newline.
pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        for term in sequence {
            write!(self.writer, "{} ", term)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Pure rendering of the same text `PlainWriter` emits.
pub fn render(sequence: &Sequence) -> String {
    let mut out = String::with_capacity(sequence.len() * 12);
    for term in sequence {
        // Writing into a String cannot fail
        let _ = write!(out, "{} ", term);
    }
    out
}

/// Print the sequence to stdout.
pub fn print_sequence(sequence: &Sequence) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = PlainWriter::new(stdout.lock());
    writer.write_sequence(sequence)
}
