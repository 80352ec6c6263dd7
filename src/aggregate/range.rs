//! The fixed XP range table used to histogram wallets.
//!
//! Rules are evaluated top to bottom and the first match wins. The two lowest
//! rules both contain 1000; because "1000-9999" is checked first, a wallet
//! with exactly 1000 XP is counted there and never in "0-1000".

use std::fmt;

/// One labeled XP interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XpRange {
    /// 300000 and above.
    From300k,
    /// 200000 to 299999.
    From200k,
    /// 100000 to 199999.
    From100k,
    /// 80000 to 99999.
    From80k,
    /// 60000 to 79999.
    From60k,
    /// 40000 to 59999.
    From40k,
    /// 20000 to 39999.
    From20k,
    /// 10000 to 19999.
    From10k,
    /// 1000 to 9999.
    From1k,
    /// 0 to 1000 (inclusive; 1000 itself is taken by [`XpRange::From1k`]).
    UpTo1k,
}

impl XpRange {
    /// All ranges in evaluation (and report) order.
    pub const ALL: [Self; 10] = [
        Self::From300k,
        Self::From200k,
        Self::From100k,
        Self::From80k,
        Self::From60k,
        Self::From40k,
        Self::From20k,
        Self::From10k,
        Self::From1k,
        Self::UpTo1k,
    ];

    /// Number of ranges in the table.
    pub const COUNT: usize = Self::ALL.len();

    /// Report label, e.g. `"10000-19999"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::From300k => "300000+",
            Self::From200k => "200000-299999",
            Self::From100k => "100000-199999",
            Self::From80k => "80000-99999",
            Self::From60k => "60000-79999",
            Self::From40k => "40000-59999",
            Self::From20k => "20000-39999",
            Self::From10k => "10000-19999",
            Self::From1k => "1000-9999",
            Self::UpTo1k => "0-1000",
        }
    }

    /// Inclusive bounds; `None` as upper bound means unbounded.
    #[must_use]
    pub fn bounds(self) -> (u64, Option<u64>) {
        match self {
            Self::From300k => (300_000, None),
            Self::From200k => (200_000, Some(299_999)),
            Self::From100k => (100_000, Some(199_999)),
            Self::From80k => (80_000, Some(99_999)),
            Self::From60k => (60_000, Some(79_999)),
            Self::From40k => (40_000, Some(59_999)),
            Self::From20k => (20_000, Some(39_999)),
            Self::From10k => (10_000, Some(19_999)),
            Self::From1k => (1_000, Some(9_999)),
            Self::UpTo1k => (0, Some(1_000)),
        }
    }

    /// Whether `xp` satisfies this rule on its own (ignoring evaluation order).
    #[must_use]
    pub fn contains(self, xp: u64) -> bool {
        let (min, max) = self.bounds();
        xp >= min && max.is_none_or(|max| xp <= max)
    }

    /// Position in [`XpRange::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the first rule in table order that contains `xp`.
    #[must_use]
    pub fn classify(xp: u64) -> Self {
        // The table covers every u64, so the fallback is unreachable.
        Self::ALL
            .into_iter()
            .find(|range| range.contains(xp))
            .unwrap_or(Self::UpTo1k)
    }
}

impl fmt::Display for XpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
