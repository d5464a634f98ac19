//! Normalizer — repairs the non-standard key names in the source text.
//!
//! The word list is hand-edited JSON with a few keys that do not match the
//! trial vocabulary. [`RULES`] is the ordered list of literal substitutions
//! that turn it into JSON the parser accepts. The targets do not overlap, so
//! rule order does not change the result for any input seen so far; it is
//! still applied in declaration order.

/// Bump when [`RULES`] changes.
pub const RULESET_VERSION: u32 = 1;

/// A global literal replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub from: &'static str,
    pub to: &'static str,
}

pub const RULES: &[Substitution] = &[
    Substitution {
        from: "\"test type\":",
        to: "\"testType\":",
    },
    Substitution {
        from: "\"sub-order\":",
        to: "\"subOrder\":",
    },
    Substitution {
        from: "\"student No.\":",
        to: "\"studentNo\":",
    },
    // Bare literal: replaced in values too, not only in key position.
    Substitution {
        from: "备注",
        to: "notes",
    },
];

/// Apply [`RULES`] to `text`.
pub fn normalize(text: &str) -> String {
    normalize_with(text, RULES)
}

/// Apply `rules` in order, each replacing every occurrence.
pub fn normalize_with(text: &str, rules: &[Substitution]) -> String {
    let mut out = text.to_string();
    for rule in rules {
        let hits = out.matches(rule.from).count();
        if hits == 0 {
            continue;
        }
        tracing::debug!(from = rule.from, to = rule.to, hits, "normalizing");
        out = out.replace(rule.from, rule.to);
    }
    out
}
