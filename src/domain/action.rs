use crate::domain::product::ProductId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Add,
    Remove,
    Update,
}

/// One recorded cart mutation, as replayed from an action stream.
///
/// `amount` is only meaningful for `update` rows; `add` and `remove` leave it
/// empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CartAction {
    pub r#type: ActionType,
    pub product: ProductId,
    pub amount: Option<i64>,
}
