//! Pure data structures managed by the view actors.

pub mod order_sheet;
pub mod product;
pub mod product_row;

pub use order_sheet::*;
pub use product::*;
pub use product_row::*;
