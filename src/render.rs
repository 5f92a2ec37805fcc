//! Turn a finished segment sequence into the prompt string.

use crate::segment::Segment;
use crate::shell::Shell;

/// Draw every segment with its separator chained into the next one's
/// background, then reset the palette once.
pub fn render(segments: &[Segment], shell: Shell) -> String {
    let mut out = String::new();
    let nexts = segments.iter().skip(1).map(Some).chain(std::iter::once(None));

    for (segment, next) in segments.iter().zip(nexts) {
        out.push_str(&segment.draw(next, shell));
    }

    out.push_str(&shell.reset());
    out
}
