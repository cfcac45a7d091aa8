use indexmap::IndexMap;

use super::Token;

/// Per-kind token counts for a lexed source, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSummary {
    pub total: usize,
    pub counts: IndexMap<&'static str, usize>,
}

impl TokenSummary {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = IndexMap::new();
        for token in tokens {
            *counts.entry(token.kind.name()).or_insert(0) += 1;
        }
        Self {
            total: tokens.len(),
            counts,
        }
    }

    pub fn count(&self, kind_name: &str) -> usize {
        self.counts.get(kind_name).copied().unwrap_or(0)
    }

    /// The report printed by `brikc --mode tokens`: totals, per-kind
    /// counts, then the first `limit` tokens.
    pub fn render(&self, tokens: &[Token], limit: usize) -> String {
        let mut out = String::new();
        out.push_str("=== SUMMARY ===\n");
        out.push_str(&format!("Total tokens: {}\n", self.total));
        out.push_str("\nToken kinds:\n");
        for (name, count) in &self.counts {
            out.push_str(&format!("  {}: {} tokens\n", name, count));
        }
        out.push_str(&format!("\n=== FIRST {} TOKENS ===\n", limit));
        for token in tokens.iter().take(limit) {
            out.push_str(&format!("{}\n", token));
        }
        out
    }
}
