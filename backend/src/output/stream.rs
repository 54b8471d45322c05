//! Raw byte streams for harnesses that read from a pipe
//!
//! Words are written little-endian, one after another. A limited stream
//! writes exactly `limit` bytes, truncating the final word if needed; an
//! unlimited stream runs until the sink fails.

use std::io::{self, ErrorKind, Write};

use rand_core::RngCore;
use tracing::debug;

use super::source::BitSource;
use crate::error::GeneratorError;

/// Write little-endian 64-bit words from `rng`
///
/// Returns the number of bytes written. With `limit == None` the stream
/// only ends when the sink fails; a closed pipe (`BrokenPipe`) counts as a
/// normal end.
///
/// # Errors
/// Returns [`GeneratorError::Io`] for any other sink failure.
///
/// # Example
/// ```
/// use weylmix_core_rs::output::stream::write_words;
/// use weylmix_core_rs::rng::Generator;
///
/// let mut out = Vec::new();
/// let written = write_words(&mut out, &mut Generator::new(), Some(8)).unwrap();
/// assert_eq!(written, 8);
/// assert_eq!(out, 0xb5ad_4ece_da1c_e2a9u64.to_le_bytes());
/// ```
pub fn write_words<W: Write, R: RngCore>(
    writer: &mut W,
    rng: &mut R,
    limit: Option<u64>,
) -> Result<u64, GeneratorError> {
    write_stream(writer, limit, || rng.next_u64().to_le_bytes())
}

/// Write little-endian 32-bit words from a projected source
///
/// Same contract as [`write_words`], with each word being one
/// [`BitSource::next_u32`] call.
///
/// # Errors
/// Returns [`GeneratorError::Io`] for sink failures other than a closed
/// pipe on an unlimited stream.
pub fn write_projected<W: Write>(
    writer: &mut W,
    source: &mut BitSource,
    limit: Option<u64>,
) -> Result<u64, GeneratorError> {
    write_stream(writer, limit, || source.next_u32().to_le_bytes())
}

fn write_stream<W, F, const N: usize>(
    writer: &mut W,
    limit: Option<u64>,
    mut next_word: F,
) -> Result<u64, GeneratorError>
where
    W: Write,
    F: FnMut() -> [u8; N],
{
    debug!(word_bytes = N, ?limit, "starting byte stream");

    let written = match limit {
        Some(limit) => write_limited(writer, limit, &mut next_word)?,
        None => write_unlimited(writer, &mut next_word)?,
    };

    debug!(written, "byte stream finished");
    Ok(written)
}

fn write_limited<W, F, const N: usize>(
    writer: &mut W,
    limit: u64,
    next_word: &mut F,
) -> Result<u64, GeneratorError>
where
    W: Write,
    F: FnMut() -> [u8; N],
{
    let word_len = N as u64;

    for _ in 0..(limit / word_len) {
        writer.write_all(&next_word())?;
    }

    let tail = (limit % word_len) as usize;
    if tail > 0 {
        writer.write_all(&next_word()[..tail])?;
    }

    writer.flush()?;
    Ok(limit)
}

fn write_unlimited<W, F, const N: usize>(
    writer: &mut W,
    next_word: &mut F,
) -> Result<u64, GeneratorError>
where
    W: Write,
    F: FnMut() -> [u8; N],
{
    let mut written = 0u64;

    loop {
        let word = next_word();
        let mut offset = 0;

        // count bytes as the sink accepts them so a pipe closed mid-word
        // still reports the true total
        while offset < N {
            match writer.write(&word[offset..]) {
                Ok(0) => return Err(io::Error::from(ErrorKind::WriteZero).into()),
                Ok(n) => {
                    offset += n;
                    written += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(written, "sink closed the pipe");
                    return Ok(written);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
