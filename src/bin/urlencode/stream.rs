use crate::{
    config::{Config, Direction, Mode},
    error::CliError,
};
use std::io::{BufRead, Write};
use tracing::trace;
use urlencode::{escape_to, unescape};

/// Encodes or decodes every value read from `reader`, writing each result
/// to `writer` followed by a newline.
///
/// Stops at the first value that fails to decode, after flushing the
/// results of the values before it. Returns the number of values written.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    reader: R,
    mut writer: W,
) -> Result<u64, CliError> {
    let mut sink = Sink {
        config,
        writer: &mut writer,
        buf: String::new(),
        count: 0,
    };

    let result = match config.mode {
        Mode::Lines => sink.lines(reader),
        Mode::All => sink.all(reader),
    };
    let count = sink.count;
    let flushed = writer.flush().map_err(CliError::Write);

    result.and(flushed).map(|()| count)
}

struct Sink<'a, W> {
    config: &'a Config,
    writer: &'a mut W,
    buf: String,
    count: u64,
}

impl<W: Write> Sink<'_, W> {
    fn lines<R: BufRead>(&mut self, reader: R) -> Result<(), CliError> {
        for line in reader.split(b'\n') {
            let mut line = line.map_err(CliError::Read)?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            self.value(&line)?;
        }
        Ok(())
    }

    fn all<R: BufRead>(&mut self, mut reader: R) -> Result<(), CliError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).map_err(CliError::Read)?;
        self.value(&input)
    }

    fn value(&mut self, value: &[u8]) -> Result<(), CliError> {
        let index = self.count + 1;
        trace!(value = index, len = value.len(), "processing");

        match self.config.direction {
            Direction::Encode => {
                self.buf.clear();
                escape_to(self.config.kind, value, &mut self.buf);
                write_value(self.writer, self.buf.as_bytes())?;
            }
            Direction::Decode => {
                let decoded = unescape(self.config.kind, value)
                    .map_err(|source| CliError::Malformed { value: index, source })?;
                write_value(self.writer, &decoded)?;
            }
        }
        self.count = index;
        Ok(())
    }
}

fn write_value<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<(), CliError> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.write_all(b"\n"))
        .map_err(CliError::Write)
}
