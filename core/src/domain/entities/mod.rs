//! Domain entities mirroring the backend's JSON resources.

pub mod cart;
pub mod order;
pub mod payment;
pub mod product;
pub mod seller;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use cart::{Cart, CartItem};
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{Payment, PaymentStatus};
pub use product::{Category, Product, ProductListing, ProductPage};
pub use seller::Seller;
pub use session::Session;
pub use user::{User, UserRole};
