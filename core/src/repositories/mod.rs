//! Domain repositories: one trait per backend resource plus its HTTP
//! implementation, all sharing a [`RepositoryContext`].

pub mod auth;
pub mod cart;
pub mod context;
pub mod order;
pub mod payment;
pub mod product;
pub mod seller;

pub use auth::{AuthRepository, HttpAuthRepository};
pub use cart::{CartRepository, HttpCartRepository};
pub use context::RepositoryContext;
pub use order::{HttpOrderRepository, OrderRepository};
pub use payment::{HttpPaymentRepository, PaymentRepository};
pub use product::{HttpProductRepository, ProductRepository};
pub use seller::{HttpSellerRepository, SellerRepository};

#[cfg(test)]
mod tests;
