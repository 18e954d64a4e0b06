use std::cmp::Reverse;

use super::CommandDef;

/// 100 for an exact match, about 50 for a prefix (shorter candidates win),
/// 10 for a substring, 0 otherwise.
pub(super) fn score_match(q: &str, candidate: &str) -> i32 {
    let q = q.to_lowercase();
    let c = candidate.to_lowercase();
    if c == q {
        100
    } else if let Some(tail) = c.strip_prefix(q.as_str()) {
        50 - tail.len() as i32
    } else if c.contains(q.as_str()) {
        10
    } else {
        0
    }
}

fn best_score(q: &str, def: &CommandDef) -> i32 {
    std::iter::once(def.name)
        .chain(def.aliases.iter().copied())
        .map(|candidate| score_match(q, candidate))
        .max()
        .unwrap_or(0)
}

/// Commands matching `q`. Commands named in `view_first` come first in that
/// order; the rest follow by score, then name.
pub(super) fn rank_suggestions(q: &str, defs: Vec<CommandDef>, view_first: &[&str]) -> Vec<CommandDef> {
    let mut scored: Vec<(i32, CommandDef)> = defs
        .into_iter()
        .map(|d| (best_score(q, &d), d))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by_key(|(score, d)| {
        let pinned = view_first.iter().position(|n| *n == d.name);
        (pinned.is_none(), Reverse(*score), pinned, d.name)
    });
    scored.into_iter().map(|(_, d)| d).collect()
}
