use crate::{Candidate, ReviewConfig, ReviewResult, Reviewer, SourceKind};

// ----------------------------
// Review Test DSL
// ----------------------------

pub fn t(line_with_cursor: &str) -> ReviewTestBuilder {
    ReviewTestBuilder::new(line_with_cursor)
}

pub struct ReviewTestBuilder {
    line: String,
    cursor: usize,
    candidates: Vec<Candidate>,
    config: ReviewConfig,
    output: Option<ReviewResult>,
}

impl ReviewTestBuilder {
    fn new(line_with_cursor: &str) -> Self {
        let cursor = line_with_cursor
            .find("$0")
            .expect("fixture must contain $0 marker");
        let line = line_with_cursor.replace("$0", "");
        assert!(
            line.len() + 2 == line_with_cursor.len(),
            "fixture must contain exactly one $0 marker"
        );

        Self {
            line,
            cursor,
            candidates: Vec::new(),
            config: ReviewConfig::default(),
            output: None,
        }
    }

    /// Adds buffer-word candidates, in order.
    pub fn buf(self, labels: &[&str]) -> Self {
        self.from(SourceKind::Buffers, labels)
    }

    pub fn from(mut self, source: SourceKind, labels: &[&str]) -> Self {
        self.candidates
            .extend(labels.iter().map(|label| Candidate::new(source, *label)));
        self
    }

    pub fn candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn config_json(mut self, json: &str) -> Self {
        self.config = ReviewConfig::from_json(json).expect("fixture config must be valid");
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config.matching.max_results = max_results;
        self
    }

    fn ensure_run(&mut self) -> &ReviewResult {
        if self.output.is_none() {
            let reviewer = Reviewer::new(self.config.clone()).expect("fixture config must be valid");
            let context = reviewer.context(0, self.line.clone(), self.cursor);
            let candidates = std::mem::take(&mut self.candidates);
            self.output = Some(reviewer.review(&context, candidates));
        }
        self.output.as_ref().unwrap()
    }

    pub fn result(mut self) -> ReviewResult {
        self.ensure_run();
        self.output.take().unwrap()
    }

    pub fn labels(mut self) -> Vec<String> {
        self.ensure_run()
            .items
            .iter()
            .map(|item| item.candidate.label.clone())
            .collect()
    }

    pub fn expect_labels(mut self, expected: &[&str]) -> Self {
        let out = self.ensure_run();
        let actual: Vec<&str> = out
            .items
            .iter()
            .map(|item| item.candidate.label.as_str())
            .collect();
        assert_eq!(actual, expected, "ranked labels for cword {:?}", out.cword);
        self
    }

    pub fn expect_sources(mut self, expected: &[SourceKind]) -> Self {
        let out = self.ensure_run();
        let actual: Vec<SourceKind> = out.items.iter().map(|item| item.candidate.source).collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn expect_not_contains_labels(mut self, labels: &[&str]) -> Self {
        let out = self.ensure_run();
        for label in labels {
            assert!(
                out.items.iter().all(|item| item.candidate.label != *label),
                "did not expect {label:?} in {:?}",
                out.items
            );
        }
        self
    }

    pub fn expect_cword(mut self, cword: &str) -> Self {
        let out = self.ensure_run();
        assert_eq!(out.cword, cword);
        self
    }

    pub fn expect_replace(mut self, start: u32, end: u32) -> Self {
        let out = self.ensure_run();
        assert_eq!((out.replace.start, out.replace.end), (start, end));
        self
    }

    pub fn expect_empty(mut self) -> Self {
        let out = self.ensure_run();
        assert!(
            out.items.is_empty(),
            "expected no items, got {}",
            out.items.len()
        );
        self
    }
}
