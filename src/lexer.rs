//! A sub-document path tokenizer, producing a vector of path segments.
//!
//! The grammar is deliberately forgiving. Nothing here returns an error:
//! malformed input degrades to whatever segments could be read, so call
//! sites can always hand the result to the resolver.

use crate::token::PathSegment;

use std::str::CharIndices;

pub const EOP: char = '\0';

enum State {
    EndOfPath,
    LexProperty,
    LexIndex,
}

struct Lexer<'p> {
    path: &'p str,
    segments: Vec<PathSegment>,

    chars: CharIndices<'p>,
    start: usize,
    pos: usize,
}

impl<'p> Lexer<'p> {
    fn new(path: &'p str) -> Self {
        Self {
            path,
            segments: Vec::new(),
            chars: path.char_indices(),
            start: 0,
            pos: 0,
        }
    }

    fn run(&mut self) {
        let mut state = State::LexProperty;
        loop {
            match state {
                State::EndOfPath => break,
                State::LexProperty => state = lex_property(self),
                State::LexIndex => state = lex_index(self),
            }
        }
    }

    fn emit_property(&mut self) {
        self.segments.push(PathSegment::Property {
            name: self.boxed_value(),
        });
        self.start = self.pos;
    }

    fn emit_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index { index });
        self.start = self.pos;
    }

    fn value(&self) -> &str {
        self.path
            .get(self.start..self.pos)
            .expect("lexer error: slice out of bounds or not on codepoint boundary")
    }

    fn boxed_value(&self) -> Box<str> {
        self.value().to_string().into_boxed_str()
    }

    fn has_value(&self) -> bool {
        self.pos > self.start
    }

    fn next(&mut self) -> Option<char> {
        if let Some((pos, ch)) = self.chars.next() {
            self.pos = pos + ch.len_utf8();
            Some(ch)
        } else {
            None
        }
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn peek(&mut self) -> char {
        if let Some((_, ch)) = self.chars.clone().next() {
            ch
        } else {
            EOP
        }
    }

    fn accept(&mut self, ch: char) -> bool {
        if self.peek() == ch {
            self.next();
            true
        } else {
            false
        }
    }

    fn accept_run(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut accepted = false;
        while self.peek() != EOP && pred(self.peek()) {
            self.next();
            accepted = true;
        }
        accepted
    }
}

/// Tokenizes `path` into an ordered sequence of [`PathSegment`]s.
///
/// An empty `path` produces an empty vector, addressing the root of the tree.
pub fn tokenize(path: &str) -> Vec<PathSegment> {
    let mut lexer = Lexer::new(path);
    lexer.run();
    lexer.segments
}

fn lex_property(l: &mut Lexer) -> State {
    l.accept_run(|ch| ch != '.' && ch != '[');

    match l.peek() {
        '.' => {
            // A dot always flushes, even when nothing has accumulated.
            l.emit_property();
            l.next();
            l.ignore();
            State::LexProperty
        }
        '[' => {
            if l.has_value() {
                l.emit_property();
            }
            l.next();
            l.ignore();
            State::LexIndex
        }
        _ => {
            if l.has_value() {
                l.emit_property();
            }
            State::EndOfPath
        }
    }
}

fn lex_index(l: &mut Lexer) -> State {
    l.accept_run(|ch| ch != ']');

    if l.peek() == EOP {
        // Unterminated bracket. The accumulated text falls back to a
        // trailing property segment.
        if l.has_value() {
            l.emit_property();
        }
        return State::EndOfPath;
    }

    let index = parse_index(l.value());
    l.emit_index(index);
    l.next(); // consume ']'
    l.ignore();

    // An index segment carries its own implicit separator, so a dot
    // immediately after the bracket is not content.
    l.accept('.');
    l.ignore();
    State::LexProperty
}

/// Reads the leading digits of `text` as an unsigned index. Text with no
/// leading digits resolves to index 0.
fn parse_index(text: &str) -> usize {
    let end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_properties() {
        let segments = tokenize("a.b.c");
        assert_eq!(
            segments,
            vec![
                PathSegment::property("a"),
                PathSegment::property("b"),
                PathSegment::property("c"),
            ]
        )
    }

    #[test]
    fn index_between_properties() {
        let segments = tokenize("a[0].b");
        assert_eq!(
            segments,
            vec![
                PathSegment::property("a"),
                PathSegment::index(0),
                PathSegment::property("b"),
            ]
        )
    }

    #[test]
    fn adjacent_indexes() {
        let segments = tokenize("a[0][1]");
        assert_eq!(
            segments,
            vec![
                PathSegment::property("a"),
                PathSegment::index(0),
                PathSegment::index(1),
            ]
        )
    }

    #[test]
    fn index_without_separator_continues_property() {
        let segments = tokenize("a[0]b");
        assert_eq!(
            segments,
            vec![
                PathSegment::property("a"),
                PathSegment::index(0),
                PathSegment::property("b"),
            ]
        )
    }

    #[test]
    fn bare_index() {
        let segments = tokenize("[3]");
        assert_eq!(segments, vec![PathSegment::index(3)])
    }

    #[test]
    fn empty_path() {
        assert_eq!(tokenize(""), vec![])
    }

    #[test]
    fn consecutive_dots_keep_empty_segment() {
        let segments = tokenize("a..b");
        assert_eq!(
            segments,
            vec![
                PathSegment::property("a"),
                PathSegment::property(""),
                PathSegment::property("b"),
            ]
        )
    }

    #[test]
    fn leading_dot_keeps_empty_segment() {
        let segments = tokenize(".a");
        assert_eq!(
            segments,
            vec![PathSegment::property(""), PathSegment::property("a")]
        )
    }

    #[test]
    fn trailing_dot_drops_empty_tail() {
        let segments = tokenize("a.");
        assert_eq!(segments, vec![PathSegment::property("a")])
    }

    #[test]
    fn unterminated_bracket_falls_back_to_property() {
        let segments = tokenize("a[12");
        assert_eq!(
            segments,
            vec![PathSegment::property("a"), PathSegment::property("12")]
        )
    }

    #[test]
    fn unterminated_empty_bracket() {
        assert_eq!(tokenize("a["), vec![PathSegment::property("a")])
    }

    #[test]
    fn non_numeric_index_reads_leading_digits() {
        let segments = tokenize("a[1x2]");
        assert_eq!(
            segments,
            vec![PathSegment::property("a"), PathSegment::index(1)]
        )
    }

    #[test]
    fn index_without_digits_resolves_to_zero() {
        let segments = tokenize("a[xy]");
        assert_eq!(
            segments,
            vec![PathSegment::property("a"), PathSegment::index(0)]
        )
    }
}
