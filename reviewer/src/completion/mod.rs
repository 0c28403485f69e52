//! Candidates as delivered by completion sources, and their ranked form.

use scorer::MatchMetrics;
use serde::{Deserialize, Serialize};

mod edit;
mod ranking;

pub use edit::{Edit, Position, RealizedEdit, SnippetGrammar};
pub(crate) use ranking::{dedupe, score_all, sort_ranked, weigh};
#[cfg(test)]
pub(crate) use ranking::{PARALLEL_THRESHOLD, cmp_ranked};

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Buffers,
    Paths,
    TreeSitter,
    Lsp,
    Snippets,
    Tags,
    Tmux,
    Tabnine,
}

impl SourceKind {
    /// Canonical order, also the order sources are consulted in.
    pub const ALL: [SourceKind; 8] = [
        SourceKind::Buffers,
        SourceKind::Paths,
        SourceKind::TreeSitter,
        SourceKind::Lsp,
        SourceKind::Snippets,
        SourceKind::Tags,
        SourceKind::Tmux,
        SourceKind::Tabnine,
    ];

    pub fn default_short_name(self) -> &'static str {
        match self {
            SourceKind::Buffers => "BUF",
            SourceKind::Paths => "PATH",
            SourceKind::TreeSitter => "TS",
            SourceKind::Lsp => "LSP",
            SourceKind::Snippets => "SNIP",
            SourceKind::Tags => "TAG",
            SourceKind::Tmux => "TMUX",
            SourceKind::Tabnine => "T9",
        }
    }

    pub fn default_weight_adjust(self) -> f64 {
        match self {
            SourceKind::Lsp => 0.5,
            SourceKind::Snippets | SourceKind::Tags => 0.1,
            SourceKind::Buffers | SourceKind::Paths | SourceKind::TreeSitter => 0.0,
            SourceKind::Tmux | SourceKind::Tabnine => -0.1,
        }
    }
}

/// One completion candidate from a source.
///
/// Use [`Candidate::new`] and chain the `with_*` builders to customise.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub source: SourceKind,
    /// Text shown in the menu.
    pub label: String,
    /// Comparison key when it differs from `label` (e.g. `foo` for a `foo(a, b)` label).
    pub sort_by: Option<String>,
    pub edit: Edit,
    /// Added to the source's configured weight.
    pub weight_adjust: f64,
    pub kind: Option<String>,
    pub detail: Option<String>,
}

impl Candidate {
    /// A candidate whose edit inserts `label` in place of the typed word.
    pub fn new(source: SourceKind, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            source,
            edit: Edit::plain(label.clone()),
            label,
            sort_by: None,
            weight_adjust: 0.0,
            kind: None,
            detail: None,
        }
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_edit(mut self, edit: Edit) -> Self {
        self.edit = edit;
        self
    }

    pub fn with_weight_adjust(mut self, weight_adjust: f64) -> Self {
        self.weight_adjust = weight_adjust;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The text scored against the typed word.
    pub fn sort_key(&self) -> &str {
        self.sort_by.as_deref().unwrap_or(&self.label)
    }
}

/// A candidate that survived review, with the score that placed it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub candidate: Candidate,
    pub metrics: MatchMetrics,
    /// Candidate weight plus its source's weight.
    pub weight: f64,
    pub(crate) order: usize,
}
