//! [`ViewEntity`] implementation for [`ProductRow`].

use super::error::EditorError;
use super::field::{CommitFailure, EditableField, Reconciled};
use crate::model::{AdminProductId, ProductRow, ProductRowCreate};
use view_actor::ViewEntity;

#[derive(Debug, Clone)]
pub enum DiscountAction {
    /// A clamped percent is about to be sent. Returns the commit's sequence number.
    BeginDiscount { raw: String, percent: u8 },
    /// The answer to commit `seq`.
    SettleDiscount { seq: u64, outcome: DiscountOutcome },
}

/// Results from [`DiscountAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountActionResult {
    BeginDiscount(u64),
    SettleDiscount(Reconciled),
}

#[derive(Debug, Clone)]
pub enum DiscountOutcome {
    Saved {
        price: Option<String>,
        old_price: Option<String>,
    },
    Failed(CommitFailure),
}

impl ViewEntity for ProductRow {
    type Id = AdminProductId;
    type Create = ProductRowCreate;
    type Action = DiscountAction;
    type ActionResult = DiscountActionResult;
    type Error = EditorError;

    fn id(&self) -> &AdminProductId {
        &self.id
    }

    fn from_create(params: ProductRowCreate) -> Result<Self, EditorError> {
        Ok(Self {
            id: params.id,
            discount: EditableField::new(params.discount),
            price: params.price,
            old_price: params.old_price,
        })
    }

    /// On an applied success the price cell is written only when the server
    /// sent a non-empty price; the old price is always replaced (emptied when
    /// the server sent none).
    fn handle_action(
        &mut self,
        action: DiscountAction,
    ) -> Result<DiscountActionResult, EditorError> {
        match action {
            DiscountAction::BeginDiscount { raw, percent } => Ok(
                DiscountActionResult::BeginDiscount(self.discount.begin_commit(raw, percent)),
            ),
            DiscountAction::SettleDiscount { seq, outcome } => {
                let reconciled = match outcome {
                    DiscountOutcome::Saved { price, old_price } => {
                        let reconciled = self.discount.settle(seq, Ok(()));
                        if reconciled == Reconciled::Applied {
                            if let Some(price) = price.filter(|p| !p.is_empty()) {
                                self.price.set(price);
                            }
                            self.old_price = old_price.unwrap_or_default();
                        }
                        reconciled
                    }
                    DiscountOutcome::Failed(failure) => self.discount.settle(seq, Err(failure)),
                };
                Ok(DiscountActionResult::SettleDiscount(reconciled))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PriceCell;

    fn row(price: PriceCell) -> ProductRow {
        ProductRow::from_create(ProductRowCreate {
            id: AdminProductId(3),
            discount: 0,
            price,
            old_price: String::new(),
        })
        .unwrap()
    }

    fn begin(row: &mut ProductRow, percent: u8) -> u64 {
        match row
            .handle_action(DiscountAction::BeginDiscount {
                raw: percent.to_string(),
                percent,
            })
            .unwrap()
        {
            DiscountActionResult::BeginDiscount(seq) => seq,
            other => panic!("unexpected result {other:?}"),
        }
    }

    fn saved(price: Option<&str>, old_price: Option<&str>) -> DiscountOutcome {
        DiscountOutcome::Saved {
            price: price.map(str::to_string),
            old_price: old_price.map(str::to_string),
        }
    }

    #[test]
    fn test_success_patches_price_and_old_price() {
        let mut row = row(PriceCell::Text("1000.00".to_string()));
        let seq = begin(&mut row, 10);
        row.handle_action(DiscountAction::SettleDiscount {
            seq,
            outcome: saved(Some("900.00"), Some("1000.00")),
        })
        .unwrap();

        assert_eq!(row.price, PriceCell::Text("900.00".to_string()));
        assert_eq!(row.old_price, "1000.00");
        assert_eq!(row.discount.confirmed(), &10);
    }

    #[test]
    fn test_editable_price_cell_stays_an_input() {
        let mut row = row(PriceCell::Input("1000.00".to_string()));
        let seq = begin(&mut row, 0);
        row.handle_action(DiscountAction::SettleDiscount {
            seq,
            outcome: saved(Some("1000.00"), None),
        })
        .unwrap();

        assert_eq!(row.price, PriceCell::Input("1000.00".to_string()));
        assert_eq!(row.old_price, "");
    }

    #[test]
    fn test_missing_price_keeps_cell() {
        let mut row = row(PriceCell::Text("1000.00".to_string()));
        let seq = begin(&mut row, 20);
        row.handle_action(DiscountAction::SettleDiscount {
            seq,
            outcome: saved(Some(""), Some("1250.00")),
        })
        .unwrap();

        assert_eq!(row.price.text(), "1000.00");
        assert_eq!(row.old_price, "1250.00");
    }

    #[test]
    fn test_failure_leaves_cells_unchanged() {
        let mut row = row(PriceCell::Text("1000.00".to_string()));
        row.old_price = "1200.00".to_string();
        let seq = begin(&mut row, 50);
        row.handle_action(DiscountAction::SettleDiscount {
            seq,
            outcome: DiscountOutcome::Failed(CommitFailure::Network),
        })
        .unwrap();

        assert_eq!(row.price.text(), "1000.00");
        assert_eq!(row.old_price, "1200.00");
        assert_eq!(row.discount.input(), "50");
    }

    #[test]
    fn test_older_success_after_newer_failure_patches() {
        let mut row = row(PriceCell::Text("1000.00".to_string()));
        let first = begin(&mut row, 10);
        let second = begin(&mut row, 20);

        let failed = row
            .handle_action(DiscountAction::SettleDiscount {
                seq: second,
                outcome: DiscountOutcome::Failed(CommitFailure::Network),
            })
            .unwrap();
        assert_eq!(failed, DiscountActionResult::SettleDiscount(Reconciled::Applied));

        let applied = row
            .handle_action(DiscountAction::SettleDiscount {
                seq: first,
                outcome: saved(Some("900.00"), Some("1000.00")),
            })
            .unwrap();
        assert_eq!(applied, DiscountActionResult::SettleDiscount(Reconciled::Applied));
        assert_eq!(row.price.text(), "900.00");
        assert_eq!(row.old_price, "1000.00");
        assert_eq!(row.discount.confirmed(), &10);
        assert_eq!(row.discount.input(), "20");
    }

    #[test]
    fn test_older_success_after_newer_success_is_stale() {
        let mut row = row(PriceCell::Text("1000.00".to_string()));
        let first = begin(&mut row, 10);
        let second = begin(&mut row, 20);

        row.handle_action(DiscountAction::SettleDiscount {
            seq: second,
            outcome: saved(Some("800.00"), Some("1000.00")),
        })
        .unwrap();
        let late = row
            .handle_action(DiscountAction::SettleDiscount {
                seq: first,
                outcome: saved(Some("900.00"), Some("1000.00")),
            })
            .unwrap();

        assert_eq!(late, DiscountActionResult::SettleDiscount(Reconciled::Stale));
        assert_eq!(row.price.text(), "800.00");
        assert_eq!(row.discount.confirmed(), &20);
    }
}
