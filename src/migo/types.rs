//! Types used through multiple phases of the MiGo front end, mostly
//! in an auxiliary fashion to support (better) error reporting.

use core::fmt::{Display, Formatter};

/// A Location simply consists of a line and column position.
///
/// Locations are immutable snapshots of a [`Position`]; mutating the tracker
/// afterwards never changes a Location that was already handed out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "Locations are always line+col - if we ever switch to offset-based locations, this is a breaking change."
)]
pub struct Location {
    /// Line of the location, 1-indexed.
    pub line: usize,
    /// Column of the location, 0-indexed. This is the number of characters
    /// consumed on the current line so far.
    pub col: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Source Spans define locations of elements in the source code,
/// given both their start and end positions as [`Locations`](Location).
///
/// The start is taken before the first character of an element is consumed,
/// the end after its last one, so a Span with equal ends covers no characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive] // Filename might be added.
pub struct Span {
    /// Start of the Span
    pub start: Location,
    /// End of the Span
    pub end: Location,
}

impl Span {
    /// Construct a source span from given start and end positions
    #[must_use]
    #[inline]
    pub const fn from(start: Location, end: Location) -> Self {
        Span { start, end }
    }

    /// Whether this span covers no characters at all.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Names of processes, channels and variables inside the MiGo language.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Identifiers stay as Strings.")]
pub struct Identifier(pub String);

impl Identifier {
    /// The name exactly as it was written in the source code.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// The scanner's cursor into the source text.
///
/// Instead of storing a line number directly, the tracker remembers the length
/// of every line it has already left. That history is what makes stepping back
/// over a line break exact: [`retreat`](Position::retreat) pops the length of
/// the previous line and continues from its end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Characters consumed on the current line.
    char: usize,
    /// Lengths of all fully consumed lines, oldest first.
    lines: Vec<usize>,
}

impl Position {
    /// A position at the very start of the input.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `consumed` was just read from the source.
    #[inline]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "a line longer than usize::MAX characters cannot be held in memory to begin with."
    )]
    pub fn advance(&mut self, consumed: char) {
        if consumed == '\n' {
            self.lines.push(self.char);
            self.char = 0;
        } else {
            self.char += 1;
        }
    }

    /// Undoes the most recent [`advance`](Position::advance).
    ///
    /// Must only be called directly after a character was read, and at most once
    /// per read. At the start of the input there is nothing to undo, so the
    /// position stays as it is.
    #[inline]
    pub fn retreat(&mut self) {
        if let Some(char) = self.char.checked_sub(1) {
            self.char = char;
        } else if let Some(previous_line) = self.lines.pop() {
            self.char = previous_line;
        } else {
            // Nothing has been read yet.
        }
    }

    /// Captures the current position as an immutable [`Location`].
    #[must_use]
    #[inline]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "the line history cannot hold usize::MAX entries."
    )]
    pub fn snapshot(&self) -> Location {
        Location {
            line: self.lines.len() + 1,
            col: self.char,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}

#[cfg(test)]
mod test {
    use super::{Location, Position, Span};

    /// Every character class the tracker distinguishes, plus a few ordinary ones.
    const ALPHABET: [char; 5] = ['a', '\n', ' ', '\r', '-'];

    /// Drives a fresh tracker through `consumed`.
    fn after(consumed: &[char]) -> Position {
        let mut position = Position::new();
        for &char in consumed {
            position.advance(char);
        }
        position
    }

    #[test]
    fn starts_at_line_one() {
        assert_eq!(Position::new().to_string(), "1:0");
    }

    #[test]
    fn newline_moves_to_next_line() {
        let position = after(&['a', 'b', '\n', 'c']);
        assert_eq!(position.snapshot(), Location { line: 2, col: 1 });
    }

    #[test]
    fn carriage_return_is_an_ordinary_column() {
        let position = after(&['a', '\r', '\n']);
        assert_eq!(position.snapshot(), Location { line: 2, col: 0 });
        assert_eq!(after(&['a', '\r']).snapshot(), Location { line: 1, col: 2 });
    }

    #[test]
    fn retreat_over_line_break_restores_previous_line() {
        let mut position = after(&['a', 'b', 'c', '\n']);
        position.retreat();
        assert_eq!(position, after(&['a', 'b', 'c']));
        assert_eq!(position.to_string(), "1:3");
    }

    #[test]
    fn retreat_over_empty_line() {
        let mut position = after(&['\n', '\n']);
        position.retreat();
        assert_eq!(position, after(&['\n']));
    }

    #[test]
    fn retreat_at_start_is_a_no_op() {
        let mut position = Position::new();
        position.retreat();
        assert_eq!(position, Position::new());
    }

    #[test]
    fn snapshots_do_not_follow_the_tracker() {
        let mut position = after(&['x']);
        let snapshot = position.snapshot();
        position.advance('\n');
        position.advance('y');
        assert_eq!(snapshot, Location { line: 1, col: 1 });
    }

    /// For every input of up to four characters over [`ALPHABET`], reading one
    /// more character and undoing it must restore the exact previous state.
    #[test]
    fn pushback_is_exact() {
        let mut prefixes: Vec<Vec<char>> = vec![vec![]];
        let mut layer: Vec<Vec<char>> = vec![vec![]];
        for _ in 0..4 {
            layer = layer
                .iter()
                .flat_map(|prefix| {
                    ALPHABET.iter().map(move |&char| {
                        let mut next = prefix.clone();
                        next.push(char);
                        next
                    })
                })
                .collect();
            prefixes.extend(layer.iter().cloned());
        }

        for prefix in &prefixes {
            let before = after(prefix);
            for &char in &ALPHABET {
                let mut position = before.clone();
                position.advance(char);
                position.retreat();
                assert_eq!(position, before, "undoing {char:?} after {prefix:?}");
            }
        }
    }

    #[test]
    fn span_display() {
        let start = Location { line: 1, col: 0 };
        let end = Location { line: 1, col: 3 };
        assert_eq!(Span::from(start, end).to_string(), "1:0-1:3");
        assert_eq!(Span::from(start, start).to_string(), "1:0");
        assert!(Span::from(end, end).is_empty());
    }
}
