//! Running totals folded from leaderboard entries.

use crate::fetch::LeaderboardEntry;

use super::range::XpRange;

/// Entries strictly above this XP also count toward the secondary total.
pub const ABOVE_THRESHOLD_XP: u64 = 10_000;

/// Wallet counts per [`XpRange`], every range present from the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeCounts {
    counts: [u64; XpRange::COUNT],
}

impl RangeCounts {
    /// Count for one range.
    #[must_use]
    pub fn get(&self, range: XpRange) -> u64 {
        self.counts[range.index()]
    }

    /// Sum over all ranges.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(range, count)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (XpRange, u64)> + '_ {
        XpRange::ALL
            .into_iter()
            .map(move |range| (range, self.get(range)))
    }

    fn increment(&mut self, range: XpRange) {
        self.counts[range.index()] += 1;
    }
}

/// What one page added to the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTally {
    /// Entries folded from the page.
    pub entries: u64,
    /// Sum of `totalXp` over the page.
    pub xp: u128,
}

/// Accumulators for a whole run.
///
/// XP sums are kept as `u128`: a single entry may carry up to `u64::MAX`,
/// and 2^64 such entries still fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationState {
    total_xp: u128,
    above_threshold_xp: u128,
    entries: u64,
    range_counts: RangeCounts,
}

impl AggregationState {
    /// Creates an empty state with every range at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of `totalXp` over every folded entry.
    #[must_use]
    pub fn total_xp(&self) -> u128 {
        self.total_xp
    }

    /// Sum of `totalXp` over entries with more than [`ABOVE_THRESHOLD_XP`].
    #[must_use]
    pub fn above_threshold_xp(&self) -> u128 {
        self.above_threshold_xp
    }

    /// Number of entries folded.
    #[must_use]
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Per-range wallet counts.
    #[must_use]
    pub fn range_counts(&self) -> &RangeCounts {
        &self.range_counts
    }

    /// Folds one entry's XP.
    pub fn record(&mut self, xp: u64) {
        self.total_xp += u128::from(xp);
        if xp > ABOVE_THRESHOLD_XP {
            self.above_threshold_xp += u128::from(xp);
        }
        self.range_counts.increment(XpRange::classify(xp));
        self.entries += 1;
    }

    /// Folds a page of entries and returns what it contributed.
    pub fn record_page(&mut self, page: &[LeaderboardEntry]) -> PageTally {
        let mut tally = PageTally::default();
        for entry in page {
            self.record(entry.total_xp);
            tally.entries += 1;
            tally.xp += u128::from(entry.total_xp);
        }
        tally
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page(xp: &[u64]) -> Vec<LeaderboardEntry> {
        xp.iter().copied().map(LeaderboardEntry::new).collect()
    }

    #[test]
    fn test_new_state_has_all_ranges_at_zero() {
        let state = AggregationState::new();
        assert_eq!(state.total_xp(), 0);
        assert_eq!(state.above_threshold_xp(), 0);
        assert_eq!(state.range_counts().iter().count(), XpRange::COUNT);
        assert!(state.range_counts().iter().all(|(_, count)| count == 0));
    }

    #[test]
    fn test_mixed_page_scenario() {
        let mut state = AggregationState::new();
        let tally = state.record_page(&page(&[500, 15_000, 1_000]));

        assert_eq!(tally, PageTally { entries: 3, xp: 16_500 });
        assert_eq!(state.total_xp(), 16_500);
        assert_eq!(state.above_threshold_xp(), 15_000);
        assert_eq!(state.range_counts().get(XpRange::From1k), 1);
        assert_eq!(state.range_counts().get(XpRange::From10k), 1);
        assert_eq!(state.range_counts().get(XpRange::UpTo1k), 1);
        assert_eq!(state.range_counts().total(), 3);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut state = AggregationState::new();
        state.record(10_000);
        assert_eq!(state.above_threshold_xp(), 0);
        assert_eq!(state.range_counts().get(XpRange::From10k), 1);

        state.record(10_001);
        assert_eq!(state.above_threshold_xp(), 10_001);
    }

    #[test]
    fn test_empty_page_contributes_nothing() {
        let mut state = AggregationState::new();
        state.record_page(&page(&[42]));
        let before = state.clone();

        let tally = state.record_page(&[]);
        assert_eq!(tally, PageTally::default());
        assert_eq!(state, before);
    }

    #[test]
    fn test_totals_hold_across_pages() {
        let pages = [
            page(&[0, 999, 1_000, 9_999]),
            page(&[10_000, 10_001, 250_000]),
            page(&[]),
            page(&[300_000, 75_000, 45_000, 30_000, 150_000, 85_000]),
        ];
        let mut state = AggregationState::new();
        for p in &pages {
            state.record_page(p);
        }

        let all: Vec<u64> = pages.iter().flatten().map(|e| e.total_xp).collect();
        assert_eq!(state.total_xp(), all.iter().copied().map(u128::from).sum::<u128>());
        assert_eq!(
            state.above_threshold_xp(),
            all.iter()
                .copied()
                .filter(|xp| *xp > ABOVE_THRESHOLD_XP)
                .map(u128::from)
                .sum::<u128>()
        );
        assert_eq!(state.entries(), all.len() as u64);
        assert_eq!(state.range_counts().total(), all.len() as u64);
        assert!(state.range_counts().iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn test_totals_do_not_overflow_near_u64_max() {
        let entries: Vec<LeaderboardEntry> =
            serde_json::from_str(r#"[{"totalXp":1e30},{"totalXp":5}]"#).unwrap();
        let mut state = AggregationState::new();
        let tally = state.record_page(&entries);
        state.record_page(&page(&[u64::MAX, u64::MAX - 1]));

        let max = u128::from(u64::MAX);
        assert_eq!(tally.xp, max + 5);
        assert_eq!(state.total_xp(), max + 5 + max + max - 1);
        assert_eq!(state.above_threshold_xp(), max + max + max - 1);
        assert_eq!(state.range_counts().get(XpRange::From300k), 3);
        assert_eq!(state.range_counts().get(XpRange::UpTo1k), 1);
        assert_eq!(state.entries(), 4);
    }
}
