//! Payment repository trait

use async_trait::async_trait;
use sm_shared::Id;

use crate::domain::entities::payment::Payment;
use crate::domain::value_objects::CreatePaymentRequest;
use crate::errors::Outcome;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Start paying for an order; the result may carry a redirect URL
    async fn create_payment(&self, request: CreatePaymentRequest) -> Outcome<Payment>;

    async fn get_payment(&self, id: &Id) -> Outcome<Payment>;
}
