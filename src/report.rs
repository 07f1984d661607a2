//! Builds both trees from the same records and compares their widths.

use crate::bst::BstMultiset;
use crate::input::Record;
use crate::treap::TreapMultiset;
use log::debug;

/// The widths of a binary search tree and a treap built from the same records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BreadthReport {
    pub bst_width: usize,
    pub treap_width: usize,
}

impl BreadthReport {
    /// Inserts every record, in order, into an empty binary search tree (value only) and an empty
    /// treap (value and priority), then measures both.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::input::Record;
    /// use tree_breadth::report::BreadthReport;
    ///
    /// let records = vec![
    ///     Record { value: 1, priority: 1 },
    ///     Record { value: 2, priority: 3 },
    ///     Record { value: 3, priority: 2 },
    /// ];
    /// let report = BreadthReport::from_records(&records);
    /// assert_eq!(report.bst_width, 1);
    /// assert_eq!(report.treap_width, 2);
    /// assert_eq!(report.difference(), 1);
    /// ```
    pub fn from_records(records: &[Record]) -> Self {
        let mut bst = BstMultiset::new();
        let mut treap = TreapMultiset::new();
        for record in records {
            bst.insert(record.value);
            treap.insert(record.value, record.priority);
        }

        let report = BreadthReport {
            bst_width: bst.max_width(),
            treap_width: treap.max_width(),
        };
        debug!(
            "built {} nodes: bst width {} (height {}), treap width {} (height {})",
            records.len(),
            report.bst_width,
            bst.height(),
            report.treap_width,
            treap.height(),
        );
        report
    }

    /// Returns the treap width minus the binary search tree width.
    pub fn difference(&self) -> i64 {
        self.treap_width as i64 - self.bst_width as i64
    }
}

#[cfg(test)]
mod tests {
    use super::BreadthReport;
    use crate::input::Record;

    fn records(values: &[i64], priorities: &[u64]) -> Vec<Record> {
        values
            .iter()
            .zip(priorities)
            .map(|(&value, &priority)| Record { value, priority })
            .collect()
    }

    #[test]
    fn test_empty() {
        let report = BreadthReport::from_records(&[]);
        assert_eq!(report.bst_width, 0);
        assert_eq!(report.treap_width, 0);
        assert_eq!(report.difference(), 0);
    }

    #[test]
    fn test_negative_difference() {
        // priorities falling in insertion order give the treap the same shape as the bst
        let report = BreadthReport::from_records(&records(&[2, 1, 3], &[3, 2, 1]));
        assert_eq!(report.bst_width, 2);
        assert_eq!(report.treap_width, 2);

        // rising priorities turn the treap into a chain
        let report = BreadthReport::from_records(&records(&[2, 1, 3], &[1, 2, 3]));
        assert_eq!(report.bst_width, 2);
        assert_eq!(report.treap_width, 1);
        assert_eq!(report.difference(), -1);
    }

    #[test]
    fn test_scenario_a() {
        let report = BreadthReport::from_records(&records(
            &[5, 18, 25, 50, 30, 15, 20, 22, 40, 45],
            &[11, 8, 7, 12, 30, 15, 10, 5, 20, 9],
        ));
        assert_eq!(report.bst_width, 2);
        assert_eq!(report.treap_width, 3);
        assert_eq!(report.difference(), 1);
    }

    #[test]
    fn test_scenario_b() {
        let report = BreadthReport::from_records(&records(
            &[38, 37, 47, 35, 12, 0, 31, 21, 30, 41],
            &[19, 5, 15, 0, 3, 42, 37, 45, 26, 6],
        ));
        assert_eq!(report.difference(), 1);
    }

    #[test]
    fn test_repeated_values() {
        // the second 5 displaces the first and takes it as its left child
        let report = BreadthReport::from_records(&records(&[5, 5, 6], &[1, 2, 0]));
        assert_eq!(report.bst_width, 1);
        assert_eq!(report.treap_width, 2);
        assert_eq!(report.difference(), 1);
    }
}
