//! Board configuration: which trains a board shows.

use std::collections::BTreeSet;

use crate::domain::{OperatorCode, RawTrain, TrainCategory};

/// Configuration for building station boards.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Only trains run by this operator are shown.
    pub target_operator: OperatorCode,

    /// Only trains in these categories are shown.
    pub allowed_categories: BTreeSet<TrainCategory>,

    /// How many arriving trains to request from the feed.
    pub arrival_window: u16,

    /// How many departing trains to request from the feed.
    pub departure_window: u16,
}

impl BoardConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        target_operator: OperatorCode,
        allowed_categories: impl IntoIterator<Item = TrainCategory>,
        arrival_window: u16,
        departure_window: u16,
    ) -> Self {
        Self {
            target_operator,
            allowed_categories: allowed_categories.into_iter().collect(),
            arrival_window,
            departure_window,
        }
    }

    /// The train's category, if this board shows the train at all.
    ///
    /// Returns `None` for other operators, for categories outside the
    /// allowed set, and for category names the feed uses that we don't
    /// know.
    pub fn admit(&self, train: &RawTrain) -> Option<TrainCategory> {
        if !self.target_operator.matches(&train.operator_code) {
            return None;
        }
        let category = TrainCategory::parse(&train.category)?;
        self.allowed_categories
            .contains(&category)
            .then_some(category)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            target_operator: OperatorCode::vr(),
            allowed_categories: BTreeSet::from([
                TrainCategory::LongDistance,
                TrainCategory::Commuter,
            ]),
            arrival_window: 15,
            departure_window: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(operator: &str, category: &str) -> RawTrain {
        RawTrain {
            number: "1".to_string(),
            train_type: "IC".to_string(),
            category: category.to_string(),
            operator_code: operator.to_string(),
            timetable_rows: Vec::new(),
        }
    }

    #[test]
    fn default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.target_operator, OperatorCode::vr());
        assert_eq!(config.allowed_categories.len(), 2);
        assert!(config.allowed_categories.contains(&TrainCategory::LongDistance));
        assert!(config.allowed_categories.contains(&TrainCategory::Commuter));
        assert_eq!(config.arrival_window, 15);
        assert_eq!(config.departure_window, 15);
    }

    #[test]
    fn custom_config() {
        let op = OperatorCode::parse("ralb").unwrap();
        let config = BoardConfig::new(op.clone(), [TrainCategory::Commuter], 5, 20);

        assert_eq!(config.target_operator, op);
        assert_eq!(
            config.allowed_categories,
            BTreeSet::from([TrainCategory::Commuter])
        );
        assert_eq!(config.arrival_window, 5);
        assert_eq!(config.departure_window, 20);
    }

    #[test]
    fn admits_target_operator_and_categories() {
        let config = BoardConfig::default();

        assert_eq!(
            config.admit(&train("vr", "Long-distance")),
            Some(TrainCategory::LongDistance)
        );
        assert_eq!(
            config.admit(&train("vr", "Commuter")),
            Some(TrainCategory::Commuter)
        );
    }

    #[test]
    fn rejects_other_operators() {
        let config = BoardConfig::default();

        assert_eq!(config.admit(&train("vr-track", "Long-distance")), None);
        assert_eq!(config.admit(&train("VR", "Commuter")), None);
        assert_eq!(config.admit(&train("", "Commuter")), None);
    }

    #[test]
    fn rejects_other_categories() {
        let config = BoardConfig::default();

        assert_eq!(config.admit(&train("vr", "Cargo")), None);
        assert_eq!(config.admit(&train("vr", "Locomotive")), None);
        assert_eq!(config.admit(&train("vr", "")), None);
    }

    #[test]
    fn respects_narrowed_category_set() {
        let config = BoardConfig::new(OperatorCode::vr(), [TrainCategory::Commuter], 15, 15);

        assert_eq!(config.admit(&train("vr", "Long-distance")), None);
        assert_eq!(
            config.admit(&train("vr", "Commuter")),
            Some(TrainCategory::Commuter)
        );
    }
}
