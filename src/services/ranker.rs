use std::cmp::Ordering;

use crate::models::{OrderCriterion, SymbolRecord};

fn criterion_cmp(criterion: OrderCriterion, a: &SymbolRecord, b: &SymbolRecord) -> Ordering {
    let ordering = match criterion {
        OrderCriterion::Percent => b.percent.partial_cmp(&a.percent),
        OrderCriterion::PercentReverse => a.percent.partial_cmp(&b.percent),
        OrderCriterion::Price => b.change.partial_cmp(&a.change),
        OrderCriterion::PriceReverse => a.change.partial_cmp(&b.change),
    };
    // NaN pairs compare equal so the stable sort keeps their base order.
    ordering.unwrap_or(Ordering::Equal)
}

/// Order records for the detail line.
///
/// Transforms apply in a fixed order: alphabetical base sort, then a
/// stable re-sort by the criterion (ties keep alphabetical order),
/// then whole-list reversal when reverse-mode is active. Criterion and
/// reverse-mode compose independently.
pub fn rank_records(
    records: &mut [SymbolRecord],
    criterion: Option<OrderCriterion>,
    reverse_mode: bool,
) {
    records.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    if let Some(criterion) = criterion {
        records.sort_by(|a, b| criterion_cmp(criterion, a, b));
    }

    if reverse_mode {
        records.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SymbolRecord> {
        vec![
            SymbolRecord::new("B", 3.0, 1.0),
            SymbolRecord::new("C", 1.0, 2.0),
            SymbolRecord::new("A", 2.0, 1.0),
        ]
    }

    fn symbols(records: &[SymbolRecord]) -> Vec<&str> {
        records.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn test_default_is_alphabetical() {
        let mut list = records();
        rank_records(&mut list, None, false);
        assert_eq!(symbols(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_percent_descending_with_stable_ties() {
        // A and B tie on percent, so they keep alphabetical order.
        let mut list = records();
        rank_records(&mut list, Some(OrderCriterion::Percent), false);
        assert_eq!(symbols(&list), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_percent_reverse_ascending() {
        let mut list = records();
        rank_records(&mut list, Some(OrderCriterion::PercentReverse), false);
        assert_eq!(symbols(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_price_orders_by_change() {
        let mut list = records();
        rank_records(&mut list, Some(OrderCriterion::Price), false);
        assert_eq!(symbols(&list), vec!["B", "A", "C"]);

        let mut list = records();
        rank_records(&mut list, Some(OrderCriterion::PriceReverse), false);
        assert_eq!(symbols(&list), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reverse_mode_reverses_final_order() {
        let mut list = records();
        rank_records(&mut list, Some(OrderCriterion::Percent), true);
        assert_eq!(symbols(&list), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_reverse_mode_without_criterion() {
        let mut list = records();
        rank_records(&mut list, None, true);
        assert_eq!(symbols(&list), vec!["C", "B", "A"]);
    }
}
