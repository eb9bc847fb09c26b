//! [`ViewEntity`] implementation for [`OrderSheet`].
//!
//! The sheet reacts to three events per line: a locally rejected input, the
//! start of a quantity commit, and the server's answer to that commit. Display
//! values (line sum, order total) change only in the last one, and only when
//! the answer is not stale (see [`EditableField::settle`]).

use super::error::EditorError;
use super::field::{CommitFailure, EditableField, Reconciled};
use crate::model::{ItemId, OrderId, OrderLine, OrderSheet, OrderSheetCreate, TotalDisplay};
use view_actor::ViewEntity;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Input failed local validation; nothing is sent.
    RejectQuantity {
        item: ItemId,
        raw: String,
        message: String,
    },
    /// A valid quantity is about to be sent. Returns the commit's sequence number.
    BeginQuantity {
        item: ItemId,
        raw: String,
        quantity: u32,
    },
    /// The answer to commit `seq`.
    SettleQuantity {
        item: ItemId,
        seq: u64,
        outcome: QuantityOutcome,
    },
}

/// Results from [`OrderAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    RejectQuantity,
    BeginQuantity(u64),
    SettleQuantity(Reconciled),
}

#[derive(Debug, Clone)]
pub enum QuantityOutcome {
    Saved {
        item_sum: Option<String>,
        order_total: Option<String>,
    },
    Failed(CommitFailure),
}

impl ViewEntity for OrderSheet {
    type Id = OrderId;
    type Create = OrderSheetCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = EditorError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Loads a page. A page rendered without a total gets an estimated one
    /// right away so the summary block always has something to show.
    fn from_create(params: OrderSheetCreate) -> Result<Self, EditorError> {
        let lines: Vec<OrderLine> = params
            .lines
            .into_iter()
            .map(|line| OrderLine {
                item_id: line.item_id,
                quantity: EditableField::new(line.quantity),
                item_sum: line.item_sum,
            })
            .collect();
        let total = match params.total {
            Some(total) => TotalDisplay::Authoritative(total),
            None => TotalDisplay::Estimated(estimate_total(
                lines.iter().map(|line| line.item_sum.as_str()),
            )),
        };
        Ok(Self {
            id: params.order_id,
            lines,
            total,
        })
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, EditorError> {
        match action {
            OrderAction::RejectQuantity { item, raw, message } => {
                self.editable_line(item)?.quantity.reject(raw, message);
                Ok(OrderActionResult::RejectQuantity)
            }
            OrderAction::BeginQuantity {
                item,
                raw,
                quantity,
            } => {
                let seq = self.editable_line(item)?.quantity.begin_commit(raw, quantity);
                Ok(OrderActionResult::BeginQuantity(seq))
            }
            OrderAction::SettleQuantity { item, seq, outcome } => {
                let line = self.editable_line(item)?;
                let (result, patch) = match outcome {
                    QuantityOutcome::Saved {
                        item_sum,
                        order_total,
                    } => (Ok(()), Some((item_sum, order_total))),
                    QuantityOutcome::Failed(failure) => (Err(failure), None),
                };
                let reconciled = line.quantity.settle(seq, result);
                if reconciled == Reconciled::Applied {
                    if let Some((item_sum, order_total)) = patch {
                        if let Some(item_sum) = item_sum {
                            line.item_sum = item_sum;
                        }
                        self.total = match order_total {
                            Some(total) => TotalDisplay::Authoritative(total),
                            None => TotalDisplay::Estimated(estimate_total(
                                self.lines.iter().map(|line| line.item_sum.as_str()),
                            )),
                        };
                    }
                }
                Ok(OrderActionResult::SettleQuantity(reconciled))
            }
        }
    }
}

impl OrderSheet {
    fn editable_line(&mut self, item: ItemId) -> Result<&mut OrderLine, EditorError> {
        let order = self.id;
        self.line_mut(item)
            .ok_or_else(|| EditorError::UnknownRow(format!("order {order} item {item}")))
    }
}

/// Sums displayed amounts, two decimals. Unparsable amounts are skipped.
pub fn estimate_total<'a>(amounts: impl IntoIterator<Item = &'a str>) -> String {
    let total = amounts
        .into_iter()
        .filter_map(parse_amount)
        .fold(0.0, |acc, amount| acc + amount);
    format!("{total:.2}")
}

/// Leading decimal number of a displayed amount; the first `,` counts as the
/// decimal point.
fn parse_amount(text: &str) -> Option<f64> {
    let normalized = text.replacen(',', ".", 1);
    let s = normalized.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}
