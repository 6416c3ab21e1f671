use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// One scored structure file.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<M> {
    pub metric: M,
    pub path: PathBuf,
}

/// Longest helix run of one file.
pub type HelixResult = Entry<usize>;
/// Helical content fraction of one file.
pub type HelicalContentResult = Entry<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<M> {
    /// 1-based place.
    pub rank: usize,
    pub metric: M,
    pub path: PathBuf,
}

impl<M> RankedEntry<M> {
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Results for one contest category, ranked highest metric first.
///
/// Entries with equal metrics keep the order in which they were recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard<M> {
    entries: Vec<Entry<M>>,
}

impl<M> Default for Leaderboard<M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<M: PartialOrd + Copy> Leaderboard<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metric: M, path: PathBuf) {
        self.entries.push(Entry { metric, path });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in final standing order.
    pub fn standings(&self) -> Vec<RankedEntry<M>> {
        let mut sorted: Vec<&Entry<M>> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.metric.partial_cmp(&a.metric).unwrap_or(Ordering::Equal));
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                metric: entry.metric,
                path: entry.path.clone(),
            })
            .collect()
    }

    pub fn champion(&self) -> Option<RankedEntry<M>> {
        self.standings().into_iter().next()
    }

    /// Places 2 through `podium_size`, or fewer when there are not enough entries.
    pub fn runner_ups(&self, podium_size: usize) -> Vec<RankedEntry<M>> {
        self.standings()
            .into_iter()
            .skip(1)
            .take(podium_size.saturating_sub(1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(entries: &[(usize, &str)]) -> Leaderboard<usize> {
        let mut board = Leaderboard::new();
        for (metric, name) in entries {
            board.record(*metric, PathBuf::from(format!("/contest/{}", name)));
        }
        board
    }

    #[test]
    fn standings_sort_descending_by_metric() {
        let board = board(&[(3, "a.pdb"), (9, "b.pdb"), (5, "c.pdb")]);
        let names: Vec<_> = board.standings().iter().map(|e| e.file_name()).collect();
        assert_eq!(names, ["b.pdb", "c.pdb", "a.pdb"]);
        let ranks: Vec<_> = board.standings().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn ties_keep_recording_order() {
        let board = board(&[(4, "first.pdb"), (7, "top.pdb"), (4, "second.pdb"), (4, "third.pdb")]);
        let names: Vec<_> = board.standings().iter().map(|e| e.file_name()).collect();
        assert_eq!(names, ["top.pdb", "first.pdb", "second.pdb", "third.pdb"]);
    }

    #[test]
    fn champion_is_highest_metric_and_absent_for_empty_board() {
        let board = board(&[(2, "a.pdb"), (6, "b.pdb")]);
        let champ = board.champion().unwrap();
        assert_eq!(champ.rank, 1);
        assert_eq!(champ.metric, 6);
        assert_eq!(champ.path, PathBuf::from("/contest/b.pdb"));

        assert!(Leaderboard::<usize>::new().champion().is_none());
    }

    #[test]
    fn runner_ups_cover_places_two_to_podium_size() {
        let board = board(&[
            (1, "a.pdb"),
            (2, "b.pdb"),
            (3, "c.pdb"),
            (4, "d.pdb"),
            (5, "e.pdb"),
            (6, "f.pdb"),
            (7, "g.pdb"),
        ]);
        let runner_ups = board.runner_ups(5);
        let ranks: Vec<_> = runner_ups.iter().map(|e| e.rank).collect();
        let metrics: Vec<_> = runner_ups.iter().map(|e| e.metric).collect();
        assert_eq!(ranks, [2, 3, 4, 5]);
        assert_eq!(metrics, [6, 5, 4, 3]);
    }

    #[test]
    fn runner_ups_shrink_with_few_entries() {
        assert!(board(&[(1, "a.pdb")]).runner_ups(5).is_empty());
        assert_eq!(board(&[(1, "a.pdb"), (2, "b.pdb")]).runner_ups(5).len(), 1);
        assert!(Leaderboard::<usize>::new().runner_ups(5).is_empty());
        assert!(board(&[(1, "a.pdb"), (2, "b.pdb")]).runner_ups(1).is_empty());
    }

    #[test]
    fn float_metrics_rank_by_value() {
        let mut board = Leaderboard::new();
        board.record(0.15, PathBuf::from("a.pdb"));
        board.record(0.6, PathBuf::from("b.pdb"));
        assert_eq!(board.champion().unwrap().file_name(), "b.pdb");
    }

    #[test]
    fn display_name_falls_back_to_full_path() {
        assert_eq!(display_name(Path::new("/x/y/z.pdb")), "z.pdb");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
