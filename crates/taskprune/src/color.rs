//! Styling for terminal output.
//!
//! `if_supports_color()` decides per stream, so `NO_COLOR`, `FORCE_COLOR`
//! and redirected output are honored without extra checks here.

use owo_colors::{OwoColorize, Stream};

/// Must run before the tokio runtime starts worker threads.
pub fn set_no_color() {
    // SAFETY: main calls this while the process is still single-threaded.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

type Rgb = (u8, u8, u8);

const COUNT: Rgb = (124, 180, 200);
const SUCCESS: Rgb = (107, 143, 94);
const CAUTION: Rgb = (196, 154, 92);
const FAILURE: Rgb = (184, 112, 96);

fn styled(text: &str, stream: Stream, (r, g, b): Rgb) -> String {
    text.if_supports_color(stream, |t| t.truecolor(r, g, b))
        .to_string()
}

/// Numbers in progress lines.
pub fn count(text: &str) -> String {
    styled(text, Stream::Stdout, COUNT)
}

pub fn success(text: &str) -> String {
    styled(text, Stream::Stdout, SUCCESS)
}

/// Dry-run and about-to-mutate notices.
pub fn caution(text: &str) -> String {
    styled(text, Stream::Stdout, CAUTION)
}

/// Error prefix; written to stderr, so it checks that stream.
pub fn failure(text: &str) -> String {
    styled(text, Stream::Stderr, FAILURE)
}
