//! UI Components
//!
//! Island roots mounted into the page hooks, and their children.

mod cart_badge;
mod grand_total;
mod cart_rows;
mod catalog;
mod product_card;
mod quantity_stepper;
mod notice_toast;

pub use cart_badge::CartBadge;
pub use grand_total::GrandTotal;
pub use cart_rows::CartRows;
pub use catalog::Catalog;
pub use product_card::ProductCard;
pub use quantity_stepper::QuantityStepper;
pub use notice_toast::NoticeToast;
