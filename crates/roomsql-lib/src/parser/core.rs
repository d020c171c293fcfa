//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNodeBuilder, TextRange, TextSize};

use super::Parse;
use super::cst::{SyntaxKind, TokenSet};
use super::expected::{Expected, expectation_message};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

const DEBUG_FUEL: u32 = 256;

/// Recursive-descent parser over a materialized token vector.
///
/// Trivia tokens are buffered and flushed before the next node, checkpoint or token, so
/// they belong to the node that is open at that point; nodes never start with trivia.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    /// Alternatives tested since the last consumed token.
    pub(super) expected: Vec<Expected>,
    pub(super) depth: u32,
    pub(super) recursion_limit: u32,
    /// Set once the recursion limit swallowed the rest of the input.
    pub(super) gave_up: bool,
    pub(super) debug_fuel: Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            expected: Vec::with_capacity(16),
            depth: 0,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            gave_up: false,
            debug_fuel: Cell::new(DEBUG_FUEL),
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Parse {
        self.parse_file();
        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.diagnostics.len(),
            "parsed"
        );
        Parse::new(self.builder.finish(), self.diagnostics)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    /// LL(k) lookahead past trivia. `nth(0)` is the current token.
    pub(super) fn nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> Option<&'src str> {
        self.skip_trivia_to_buffer();
        let token = self.tokens.get(self.pos)?;
        Some(token_text(self.source, token))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn at_eof(&mut self) -> bool {
        self.current() == SyntaxKind::Eof
    }

    /// Tests the current token and records `kind` as an expected alternative.
    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.expected.push(Expected::Token(kind));
        self.current() == kind
    }

    /// Tests the current token against a FIRST set, recorded as one labelled alternative.
    pub(super) fn at_set(&mut self, set: TokenSet, label: &'static str) -> bool {
        self.expected.push(Expected::Label(label));
        set.contains(self.current())
    }

    /// Tests the current token against a set, recording every member as an alternative.
    pub(super) fn at_one_of(&mut self, set: TokenSet) -> bool {
        self.expected.extend(set.iter().map(Expected::Token));
        set.contains(self.current())
    }

    /// Contextual keyword: an identifier spelled `word` in any case.
    pub(super) fn at_word(&mut self, word: &str, label: &'static str) -> bool {
        self.expected.push(Expected::Label(label));
        self.current() == SyntaxKind::Ident
            && self
                .current_text()
                .is_some_and(|text| text.eq_ignore_ascii_case(word))
    }

    pub(super) fn expect_label(&mut self, label: &'static str) {
        self.expected.push(Expected::Label(label));
    }

    pub(super) fn expect_token(&mut self, kind: SyntaxKind) {
        self.expected.push(Expected::Token(kind));
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    /// Pending trivia goes to the enclosing node first.
    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        assert!(self.pos < self.tokens.len(), "bump called at EOF");
        self.reset_debug_fuel();
        self.expected.clear();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit an empty error node but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_missing();
        false
    }

    /// Message for the alternatives recorded so far; resets them.
    fn take_expectation(&mut self) -> String {
        let found = self.current_text();
        let message = expectation_message(&self.expected, found);
        self.expected.clear();
        message
    }

    fn report(&mut self, kind: DiagnosticKind, range: TextRange, message: String) {
        tracing::trace!(
            start = u32::from(range.start()),
            end = u32::from(range.end()),
            %message,
            "syntax error"
        );
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Zero-width error node at the current position.
    pub(super) fn error_missing(&mut self) {
        if self.gave_up {
            return;
        }
        let message = self.take_expectation();
        let range = self.current_span();
        self.start_node(SyntaxKind::Error);
        self.report(DiagnosticKind::Syntax, range, message);
        self.finish_node();
    }

    /// Wraps the current token in an error node.
    pub(super) fn error_and_bump(&mut self) {
        if self.at_eof() {
            self.error_missing();
            return;
        }
        let message = self.take_expectation();
        let range = self.current_span();
        self.start_node(SyntaxKind::Error);
        self.report(DiagnosticKind::Syntax, range, message);
        self.bump();
        self.finish_node();
    }

    /// Wraps tokens in an error node until one in `recovery` (outside nested parentheses)
    /// or end of input. Emits an empty error node if already at such a token.
    pub(super) fn error_recover(&mut self, recovery: TokenSet) {
        if self.gave_up {
            return;
        }
        let kind = self.current();
        if kind == SyntaxKind::Eof || recovery.contains(kind) {
            self.error_missing();
            return;
        }

        let message = self.take_expectation();
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Error);
        self.report(DiagnosticKind::Syntax, TextRange::empty(start), message);

        let mut depth = 0u32;
        loop {
            let kind = self.current();
            if kind == SyntaxKind::Eof || (depth == 0 && recovery.contains(kind)) {
                break;
            }
            match kind {
                SyntaxKind::ParenOpen => depth += 1,
                SyntaxKind::ParenClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
        self.finish_node();

        let end = self.last_non_trivia_end().unwrap_or(start);
        if let Some(last) = self.diagnostics.last_mut() {
            last.range = TextRange::new(start, end);
        }
        self.expected.clear();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    /// Guards a recursive production. Past the limit, the rest of the input goes into
    /// one error node and the parse unwinds without further diagnostics.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.gave_up {
            return false;
        }
        if self.depth >= self.recursion_limit {
            self.give_up();
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    fn give_up(&mut self) {
        self.gave_up = true;
        self.expected.clear();
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Error);
        self.report(
            DiagnosticKind::RecursionLimit,
            TextRange::new(start, self.eof_offset()),
            "nesting too deep".to_string(),
        );
        while !self.at_eof() {
            self.bump();
        }
        self.finish_node();
    }
}
