/// Row limit for list commands: `--limit` on the subcommand, then the global
/// `--limit`, then `general.default_limit`.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> u32 {
    local.or(global).unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn subcommand_limit_wins() {
        assert_eq!(effective_limit(Some(3), Some(50), 20), 3);
    }

    #[test]
    fn global_limit_beats_config() {
        assert_eq!(effective_limit(None, Some(50), 20), 50);
    }

    #[test]
    fn configured_default_applies_last() {
        assert_eq!(effective_limit(None, None, 7), 7);
    }
}
