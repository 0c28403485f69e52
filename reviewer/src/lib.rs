//! Candidate review for editor completion.
//!
//! Takes raw candidates from every completion source, scores them with `scorer`, and
//! produces the deduplicated, ranked list the editor shows.
//! Offsets are UTF-8 byte offsets into the cursor line, half-open `[start, end)`.

mod completion;
mod config;
mod context;
mod executor;
mod pass;
mod text_edit;

use std::sync::Arc;

use scorer::Scorer;
use tokio::sync::oneshot;
use tracing::{debug, trace};

pub use completion::{Candidate, Edit, Position, RankedItem, RealizedEdit, SnippetGrammar, SourceKind};
pub use config::{
    ConfigError, DEFAULT_EXACT_MATCHES, DEFAULT_FUZZY_CUTOFF, DEFAULT_MAX_RESULTS,
    DEFAULT_UNIFYING_CHARS, MatchOptions, ResolvedSource, ReviewConfig, SourceOptions, SourcesConfig,
};
pub use context::{Context, Encoding, byte_offset_from_column, column_of, is_word};
pub use executor::{ExecutorError, SingleThreadExecutor, TaskHandle};
pub use pass::{PassHandle, PassToken};
pub use scorer::MatchMetrics;
pub use text_edit::{Span, TextEdit, apply_text_edits};

use pass::Generations;

/// Output of one review pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewResult {
    /// The typed word the candidates were scored against.
    pub cword: String,
    /// Byte span of `cword` in the cursor line.
    pub replace: Span,
    /// Best first.
    pub items: Vec<RankedItem>,
}

/// Scores and orders candidates for one editor.
///
/// Cheap to clone; clones share the pass generation, so a pass started from any clone
/// supersedes passes started from the others.
#[derive(Debug, Clone)]
pub struct Reviewer {
    inner: Arc<Inner>,
    generations: Generations,
}

#[derive(Debug)]
struct Inner {
    config: ReviewConfig,
    scorer: Scorer,
}

impl Reviewer {
    pub fn new(config: ReviewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = Scorer::new(config.matching.scorer_config())?;
        Ok(Self {
            inner: Arc::new(Inner { config, scorer }),
            generations: Generations::default(),
        })
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.inner.config
    }

    /// Builds the cursor context with this reviewer's word rules.
    pub fn context(&self, row: u32, line: impl Into<String>, cursor: usize) -> Context {
        Context::new(
            row,
            line,
            cursor,
            &self.inner.config.matching.unifying_chars,
        )
    }

    /// Reviews `candidates` on the calling thread.
    ///
    /// Not cancellable and does not supersede spawned passes.
    pub fn review(&self, context: &Context, candidates: Vec<Candidate>) -> ReviewResult {
        let token = PassToken::detached();
        match ReviewSession::new(&self.inner, context, &token).run(candidates) {
            Some(result) => result,
            None => ReviewSession::new(&self.inner, context, &token).empty(),
        }
    }

    /// Starts a pass on the rayon pool and supersedes every earlier spawned pass.
    ///
    /// A superseded pass stops scoring early and its handle resolves to `None`.
    pub fn spawn_review(&self, context: Context, candidates: Vec<Candidate>) -> PassHandle {
        let token = self.generations.next();
        let (tx, rx) = oneshot::channel();
        let inner = Arc::clone(&self.inner);
        let pass_token = token.clone();

        rayon::spawn(move || {
            let result = ReviewSession::new(&inner, &context, &pass_token).run(candidates);
            match result {
                Some(result) if !pass_token.is_superseded() => {
                    if tx.send(result).is_err() {
                        trace!("review result dropped by caller");
                    }
                }
                _ => debug!(cword = context.cword(), "review pass superseded"),
            }
        });

        PassHandle::new(rx, token)
    }

    /// Supersedes every spawned pass without starting a new one.
    pub fn cancel(&self) {
        self.generations.next();
    }
}

struct ReviewSession<'a> {
    inner: &'a Inner,
    context: &'a Context,
    token: &'a PassToken,
}

impl<'a> ReviewSession<'a> {
    fn new(inner: &'a Inner, context: &'a Context, token: &'a PassToken) -> Self {
        Self {
            inner,
            context,
            token,
        }
    }

    fn run(self, candidates: Vec<Candidate>) -> Option<ReviewResult> {
        let config = &self.inner.config;
        let received = candidates.len();

        // 1) Drop disabled sources and fold in each source's weight.
        let entries = completion::weigh(candidates, &config.sources);

        // 2) Merge identical comparison keys, keeping the heaviest source.
        let entries = completion::dedupe(entries);
        let unique = entries.len();

        // 3) Prefilter with the estimators, then score exactly.
        let query = self.inner.scorer.query(self.context.cword());
        let mut items = completion::score_all(&query, entries, &config.matching, self.token)?;

        // 4) Order best first.
        completion::sort_ranked(&mut items);

        // 5) Keep what the menu can show.
        items.truncate(config.matching.max_results);

        debug!(
            cword = self.context.cword(),
            received,
            unique,
            kept = items.len(),
            "review pass finished"
        );

        Some(ReviewResult {
            cword: self.context.cword().to_string(),
            replace: self.context.cword_span(),
            items,
        })
    }

    fn empty(self) -> ReviewResult {
        ReviewResult {
            cword: self.context.cword().to_string(),
            replace: self.context.cword_span(),
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
