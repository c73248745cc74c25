//! String, comment and macro-line tracking shared by every scanner.
//!
//! A bracket only counts when it is ordinary code: not inside a string
//! literal, a `//` or `/* */` comment, or a preprocessor line. Forward
//! scanners feed each byte through one [`ContextTracker`] and act only on
//! [`Step::Code`] bytes. Backward scanners use [`ReverseTracker`], which
//! replays the same forward classification in reverse order.
//!
//! # Forward rules
//!
//! Per byte `c`, with lookbehind `prev` and lookahead `next`, first match wins:
//!
//! 1. `"` outside a comment, not preceded by `\`, toggles the string state.
//! 2. `#` in plain code starts a macro line.
//! 3. A line terminator (`\n`, or `\r` followed by `\n`) ends a line comment
//!    and, subject to [`MacroContinuation`], a macro line.
//! 4. `*/` inside a block comment ends it.
//! 5. `//` or `/*` outside strings and comments opens a comment.
//! 6. Any other byte is [`Step::Inert`] while a context is active, and
//!    [`Step::Code`] otherwise.
//!
//! The second byte of a two-byte comment delimiter is consumed with the
//! first, so `/*/` does not close the comment it opens.

use bitflags::bitflags;

use crate::SourceView;

bitflags! {
    /// Lexical context the current byte is read in.
    ///
    /// At most one of `STRING`, `LINE_COMMENT` and `BLOCK_COMMENT` is set at
    /// a time. `MACRO_LINE` may combine with any of them.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Context: u8 {
        /// Inside a `"..."` literal.
        const STRING = 1 << 0;
        /// Inside a `//` comment.
        const LINE_COMMENT = 1 << 1;
        /// Inside a `/* */` comment.
        const BLOCK_COMMENT = 1 << 2;
        /// On a preprocessor line (`#include`, `#define`, ...).
        const MACRO_LINE = 1 << 3;
    }
}

impl Context {
    /// Either comment kind.
    pub const COMMENT: Self = Self::LINE_COMMENT.union(Self::BLOCK_COMMENT);

    /// Inside a line or block comment.
    #[inline]
    pub fn in_comment(self) -> bool {
        self.intersects(Self::COMMENT)
    }

    /// Inside a string literal.
    #[inline]
    pub fn in_string(self) -> bool {
        self.contains(Self::STRING)
    }
}

/// How a line terminator interacts with a trailing backslash on a macro line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MacroContinuation {
    /// `\n` always ends the macro line. A `\r\n` pair is checked for a
    /// preceding `\` on the `\r` only, so the `\n` that follows still ends
    /// the line.
    #[default]
    Verbatim,
    /// A `\` directly before `\n` or `\r\n` continues the macro onto the
    /// next line, as the C preprocessor does.
    Backslash,
}

/// What one byte meant to the context state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The byte opened or closed a context (quote, `#`, comment marker,
    /// line terminator). Never significant to bracket tracking.
    Delimiter,
    /// The byte sits inside a string, comment or macro line.
    Inert,
    /// The byte is ordinary code.
    Code(u8),
}

/// Nesting depths tracked by bracket scanners.
///
/// Signed: the backward boundary scanner treats a paren depth of `-1` as
/// "left the enclosing call".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Depths {
    /// `{` / `}` nesting.
    pub brace: i32,
    /// `(` / `)` nesting.
    pub paren: i32,
    /// `<` / `>` nesting.
    pub alligator: i32,
}

impl Depths {
    /// All counters are zero.
    pub fn is_balanced(&self) -> bool {
        self.brace == 0 && self.paren == 0 && self.alligator == 0
    }
}

/// Complete transient state of one scan: lexical context plus depths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    /// Active lexical contexts.
    pub context: Context,
    /// Bracket nesting.
    pub depths: Depths,
}

/// Forward context state machine.
///
/// Feed bytes strictly left to right, one call per byte.
#[derive(Copy, Clone, Debug, Default)]
pub struct ContextTracker {
    context: Context,
    continuation: MacroContinuation,
    /// The next byte completes a two-byte comment delimiter.
    swallow: bool,
    /// A `\` preceded the `\r` of the current `\r\n` pair.
    continued: bool,
}

impl ContextTracker {
    /// A tracker in plain-code context.
    pub fn new(continuation: MacroContinuation) -> Self {
        Self {
            continuation,
            ..Self::default()
        }
    }

    /// Contexts active after the last step.
    #[inline]
    pub fn context(&self) -> Context {
        self.context
    }

    /// Full scan state, combining this tracker's context with `depths`.
    pub fn snapshot(&self, depths: Depths) -> ScanState {
        ScanState {
            context: self.context,
            depths,
        }
    }

    /// Step over `view[index]`, reading its neighbours from the view.
    #[inline]
    pub fn step_at(&mut self, view: &SourceView<'_>, index: u32) -> Step {
        self.step(view.prev_byte(index), view.byte(index), view.byte(index + 1))
    }

    /// Step over byte `c`.
    pub fn step(&mut self, prev: u8, c: u8, next: u8) -> Step {
        if self.swallow {
            self.swallow = false;
            return Step::Delimiter;
        }

        let in_comment = self.context.in_comment();
        let in_string = self.context.in_string();

        if c == b'"' && !in_comment && prev != b'\\' {
            self.context.toggle(Context::STRING);
            return Step::Delimiter;
        }

        if c == b'#' && self.context.is_empty() {
            self.context.insert(Context::MACRO_LINE);
            return Step::Delimiter;
        }

        if c == b'\n' || (c == b'\r' && next == b'\n') {
            self.line_terminator(prev, c, in_string);
            return Step::Delimiter;
        }

        if self.context.contains(Context::BLOCK_COMMENT) && c == b'*' && next == b'/' {
            self.context.remove(Context::BLOCK_COMMENT);
            self.swallow = true;
            return Step::Delimiter;
        }

        if c == b'/' && !in_string && !in_comment {
            let opened = match next {
                b'/' => Context::LINE_COMMENT,
                b'*' => Context::BLOCK_COMMENT,
                _ => Context::empty(),
            };
            if !opened.is_empty() {
                self.context.insert(opened);
                self.swallow = true;
                return Step::Delimiter;
            }
        }

        if self.context.is_empty() {
            Step::Code(c)
        } else {
            Step::Inert
        }
    }

    fn line_terminator(&mut self, prev: u8, c: u8, in_string: bool) {
        if !in_string {
            self.context.remove(Context::LINE_COMMENT);
        }

        let ends_macro = match self.continuation {
            MacroContinuation::Verbatim => c == b'\n' || (prev != b'\\' && !in_string),
            MacroContinuation::Backslash if c == b'\r' => {
                // Defer to the `\n` of the pair.
                self.continued = prev == b'\\';
                false
            }
            MacroContinuation::Backslash => {
                let continued = prev == b'\\' || (prev == b'\r' && self.continued);
                self.continued = false;
                !continued
            }
        };

        if ends_macro {
            self.context.remove(Context::MACRO_LINE);
        }
    }
}

/// Context tracking for scans that walk a view from the end toward the start.
///
/// Whether a byte is code depends on everything before it: a line can begin
/// inside a block comment opened lines earlier, and a `//` on such a line is
/// comment text. The tracker therefore classifies bytes with a forward
/// [`ContextTracker`] running from its origin, extended on demand up to the
/// highest index asked for, and answers every step from that record. Each
/// byte gets exactly the [`Step`] a forward scan from the origin gives it.
///
/// The origin must be a position with no active context: the start of the
/// view, or the byte just past a macro line.
#[derive(Clone, Debug)]
pub struct ReverseTracker<'a> {
    view: SourceView<'a>,
    origin: u32,
    forward: ContextTracker,
    /// Classification of `[origin, origin + steps.len())`.
    steps: Vec<Step>,
}

impl<'a> ReverseTracker<'a> {
    /// A tracker over all of `view`.
    pub fn new(view: SourceView<'a>) -> Self {
        Self::with_origin(view, 0, MacroContinuation::default())
    }

    /// A tracker that classifies bytes from `origin` onward.
    ///
    /// # Panics
    ///
    /// Panics if `origin` lies past the end of `view`.
    pub fn with_origin(
        view: SourceView<'a>,
        origin: u32,
        continuation: MacroContinuation,
    ) -> Self {
        assert!(
            origin <= view.len(),
            "origin {origin} exceeds buffer length {}",
            view.len()
        );
        Self {
            view,
            origin,
            forward: ContextTracker::new(continuation),
            steps: Vec::new(),
        }
    }

    /// What `view[index]` means.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies below the origin or past the end of the view.
    pub fn step_at(&mut self, index: u32) -> Step {
        assert!(
            index >= self.origin,
            "index {index} lies below origin {}",
            self.origin
        );
        assert!(
            index < self.view.len(),
            "index {index} exceeds buffer length {}",
            self.view.len()
        );

        let offset = (index - self.origin) as usize;
        let mut next = self.origin + self.classified();
        while self.steps.len() <= offset {
            let step = self.forward.step_at(&self.view, next);
            self.steps.push(step);
            next += 1;
        }
        self.steps[offset]
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "at most one step per byte of a view, whose length fits in u32"
    )]
    fn classified(&self) -> u32 {
        self.steps.len() as u32
    }
}
