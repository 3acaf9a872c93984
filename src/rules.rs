use std::sync::OnceLock;

/// Matches one labeled digit group of a rule string, e.g. the `B36` and
/// `S23` of `B36/S23`. Anything the pattern doesn't match is ignored.
fn rule_group_regex() -> &'static regex::Regex {
    static CELL: OnceLock<regex::Regex> = OnceLock::new();
    CELL.get_or_init(|| regex::Regex::new(r"(?i)([bs])([0-8]*)").unwrap())
}

/// Birth/survival rule for a binary cellular automaton.
///
/// Each rule is a membership set over live-neighbor counts 0..=8, stored as
/// a 9-bit mask. A dead cell with `n` live neighbors becomes alive when
/// [`born(n)`] holds; a live cell stays alive when [`survives(n)`] holds.
///
/// [`born(n)`]: #method.born
/// [`survives(n)`]: #method.survives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    birth: u16,
    survival: u16,
}

impl RuleSet {
    /// Parses a rule string of labeled digit groups, like `B3/S23`.
    ///
    /// Parsing is deliberately permissive and never fails: labels are
    /// case-insensitive and may appear in either order, duplicate digits
    /// collapse into the mask, digits outside 0..=8 are skipped, and a
    /// missing or unrecognizable group simply leaves that set empty.
    pub fn parse(spec: &str) -> Self {
        let mut birth = 0u16;
        let mut survival = 0u16;
        for (_, [label, digits]) in rule_group_regex()
            .captures_iter(spec)
            .map(|c| c.extract())
        {
            let mask = digits
                .bytes()
                .fold(0u16, |mask, digit| mask | 1 << (digit - b'0'));
            if label.eq_ignore_ascii_case("b") {
                birth |= mask;
            } else {
                survival |= mask;
            }
        }
        Self { birth, survival }
    }

    /// Whether a dead cell with `neighbors` live neighbors becomes alive.
    #[inline]
    pub fn born(&self, neighbors: u8) -> bool {
        self.birth & (1 << neighbors) != 0
    }

    /// Whether a live cell with `neighbors` live neighbors stays alive.
    #[inline]
    pub fn survives(&self, neighbors: u8) -> bool {
        self.survival & (1 << neighbors) != 0
    }
}

impl Default for RuleSet {
    /// Conway's original rule, B3/S23.
    fn default() -> Self {
        Self {
            birth: 1 << 3,
            survival: 1 << 2 | 1 << 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(mask_test: impl Fn(u8) -> bool) -> Vec<u8> {
        (0..=8).filter(|&n| mask_test(n)).collect()
    }

    #[test]
    fn parse_conway() {
        let rules = RuleSet::parse("B3/S23");

        assert_eq!(members(|n| rules.born(n)), vec![3]);
        assert_eq!(members(|n| rules.survives(n)), vec![2, 3]);
    }

    #[test]
    fn parse_highlife() {
        let rules = RuleSet::parse("B36/S23");

        assert_eq!(members(|n| rules.born(n)), vec![3, 6]);
        assert_eq!(members(|n| rules.survives(n)), vec![2, 3]);
    }

    #[test]
    fn parse_is_case_insensitive_and_order_free() {
        assert_eq!(RuleSet::parse("s23/b3"), RuleSet::default());
        assert_eq!(RuleSet::parse("S23B3"), RuleSet::default());
    }

    #[test]
    fn parse_garbage_yields_empty_sets() {
        let rules = RuleSet::parse("garbage");

        assert!(members(|n| rules.born(n)).is_empty());
        assert!(members(|n| rules.survives(n)).is_empty());
    }

    #[test]
    fn parse_skips_out_of_range_digits() {
        let rules = RuleSet::parse("B39/S9");

        assert_eq!(members(|n| rules.born(n)), vec![3]);
        assert!(members(|n| rules.survives(n)).is_empty());
    }

    #[test]
    fn default_is_conway() {
        assert_eq!(RuleSet::default(), RuleSet::parse("B3/S23"));
    }
}
