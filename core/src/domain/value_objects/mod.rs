//! Value objects: authentication payloads and request bodies.

pub mod auth_response;
pub mod requests;

// Re-export commonly used types
pub use auth_response::AuthPayload;
pub use requests::{
    AddCartItemRequest, CreateOrderRequest, CreatePaymentRequest, EmailRequest,
    ForgotPasswordRequest, LoginRequest, OAuthLoginRequest, OAuthProvider, OrderItemRequest,
    ProductQuery, RefreshTokenRequest, RegisterRequest, ResendOtpRequest, ResetPasswordRequest,
    SellerRequest, UpdateCartItemRequest, VerifyEmailRequest, VerifyOtpRequest,
};
