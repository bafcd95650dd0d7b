pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod repository;

pub use r#trait::PaymentRepository;
pub use repository::HttpPaymentRepository;
