use super::*;
use crate::language::LanguageRegistry;


pub(super) fn rule(name: &str) -> LanguageRule {
    LanguageRegistry::default()
        .rules_for(name)
        .unwrap_or_else(|e| panic!("{e}"))
        .clone()
}

pub(super) fn stats(total: usize, code: usize, comment: usize, blank: usize) -> LineStats {
    LineStats {
        total,
        code,
        comment,
        blank,
    }
}
