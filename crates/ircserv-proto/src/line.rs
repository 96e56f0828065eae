//! Inbound line framing and tokenisation.
//!
//! IRC input is a byte stream framed into newline-terminated lines; a
//! read may deliver half a line or several at once, so the per-connection
//! buffer carries the trailing fragment between reads. The tokeniser
//! splits on whitespace only and does not reassemble `:`-trailing
//! parameters — handlers that need the trailing text call [`rejoin`] on
//! the tail arguments.

/// Drain every complete line from `buffer`, leaving any trailing
/// incomplete fragment in place.
///
/// Lines are separated by `\n`; a terminating `\r` is stripped. Bytes
/// that are not valid UTF-8 are replaced lossily rather than dropping
/// the line.
pub fn extract_lines(buffer: &mut Vec<u8>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
        let mut raw: Vec<u8> = buffer.drain(..=pos).collect();
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        lines.push(String::from_utf8_lossy(&raw).into_owned());
    }
    lines
}

/// Split one line into the command name and its arguments.
///
/// Returns `None` for blank (whitespace-only) lines. The name is looked
/// up literally by the dispatcher; no case folding happens here.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace().map(str::to_owned);
    let name = words.next()?;
    Some((name, words.collect()))
}

/// Rejoin `args[from..]` with single spaces and strip one leading `:`.
///
/// This is how a handler recovers a trailing parameter; runs of
/// whitespace in the incoming text collapse to single spaces.
pub fn rejoin(args: &[String], from: usize) -> String {
    let joined = args.get(from..).unwrap_or(&[]).join(" ");
    match joined.strip_prefix(':') {
        Some(rest) => rest.to_string(),
        None => joined,
    }
}
