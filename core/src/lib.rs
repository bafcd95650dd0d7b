//! # ShopMobile Core
//!
//! Client-side domain layer for the ShopMobile backend.
//! This crate turns raw HTTP exchanges into a uniform [`Outcome`]: it holds
//! the resource entities, the error classifier, the transport and session
//! store boundaries, and one repository per backend resource.

pub mod classifier;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod session;
pub mod transport;

// Re-export commonly used types for convenience
pub use classifier::{Classifier, StatusOverrides};
pub use domain::entities::{
    Cart, CartItem, Category, Order, OrderItem, OrderStatus, Payment, PaymentStatus, Product,
    ProductPage, Seller, Session, User, UserRole,
};
pub use domain::value_objects::*;
pub use errors::{Outcome, RepoError, SessionStoreError};
pub use repositories::{
    AuthRepository, CartRepository, HttpAuthRepository, HttpCartRepository, HttpOrderRepository,
    HttpPaymentRepository, HttpProductRepository, HttpSellerRepository, OrderRepository,
    PaymentRepository, ProductRepository, RepositoryContext, SellerRepository,
};
pub use session::{InMemorySessionStore, SessionStore};
pub use transport::{ApiRequest, HttpMethod, RawResponse, Transport, TransportError};
