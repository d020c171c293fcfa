//! Diagnostics rendering: one line per diagnostic, or annotated source snippets once a
//! source is attached.

use annotate_snippets::{AnnotationKind, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    /// Query text the ranges point into. Without it, output is the one-line form.
    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// File name shown in snippet headers, e.g. `query.sql:1:8`.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Diagnostics in collection order, separated by newlines.
    pub fn render(&self) -> String {
        let Some(source) = self.source else {
            return self
                .diagnostics
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        self.diagnostics
            .iter()
            .map(|diag| self.snippet_report(&renderer, diag, source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The message underlined in the query, plus a help patch for fixable diagnostics
    /// such as unterminated literals.
    fn snippet_report(&self, renderer: &Renderer, diag: &DiagnosticMessage, source: &str) -> String {
        let range = caret_range(diag.range, source);

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range.clone())
                .label(&diag.message),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let mut groups = vec![
            level_for(diag.severity)
                .primary_title(&diag.message)
                .element(snippet),
        ];
        if let Some(fix) = &diag.fix {
            groups.push(
                Level::HELP.secondary_title(&fix.description).element(
                    Snippet::source(source)
                        .line_start(1)
                        .patch(Patch::new(range, &fix.replacement)),
                ),
            );
        }

        renderer.render(&groups).to_string()
    }
}

fn level_for(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Zero-width ranges cover the next character, if there is one.
fn caret_range(range: TextRange, source: &str) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    if start != end {
        return start..end;
    }

    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}

impl Diagnostics {
    pub fn printer<'s>(&self) -> DiagnosticsPrinter<'_, 's> {
        DiagnosticsPrinter::new(self)
    }
}
