use crate::model::ListKey;

/// Position within the current list, as shown under the controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    list: ListKey,
    position: usize,
    total: usize,
}

impl Progress {
    /// `position` is 1-based: the item that was just spoken.
    #[must_use]
    pub fn new(list: ListKey, position: usize, total: usize) -> Self {
        Self {
            list,
            position,
            total,
        }
    }

    #[must_use]
    pub fn list(&self) -> ListKey {
        self.list
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `"<label>: <position> / <total>"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {} / {}", self.list.label(), self.position, self.total)
    }

    /// Completion in the 0..=100 range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.position as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_percent() {
        let progress = Progress::new(ListKey::Verbs, 3, 12);
        assert_eq!(progress.label(), "Verbs: 3 / 12");
        assert!((progress.percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_total_reads_zero() {
        assert!(Progress::new(ListKey::Sentences, 0, 0).percent().abs() < f64::EPSILON);
    }
}
