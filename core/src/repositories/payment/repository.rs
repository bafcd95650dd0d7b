//! HTTP implementation of the payment repository

use async_trait::async_trait;
use sm_shared::{Id, MessageKey};

use crate::classifier::StatusOverrides;
use crate::domain::entities::payment::Payment;
use crate::domain::value_objects::CreatePaymentRequest;
use crate::errors::Outcome;
use crate::repositories::context::RepositoryContext;
use crate::transport::ApiRequest;

use super::r#trait::PaymentRepository;

const GET_PAYMENT: StatusOverrides = StatusOverrides::new(&[(404, MessageKey::PaymentNotFound)]);

#[derive(Clone)]
pub struct HttpPaymentRepository {
    ctx: RepositoryContext,
}

impl HttpPaymentRepository {
    pub fn new(ctx: RepositoryContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl PaymentRepository for HttpPaymentRepository {
    #[tracing::instrument(skip(self))]
    async fn create_payment(&self, request: CreatePaymentRequest) -> Outcome<Payment> {
        let call = self.ctx.encode(ApiRequest::post("/payments"), &request)?;
        let payment: Payment = self.ctx.fetch_authorized(call, &StatusOverrides::NONE).await?;
        tracing::info!(
            order_id = %request.order_id,
            event = "payment_created",
            "Payment started"
        );
        Ok(payment)
    }

    #[tracing::instrument(skip(self), fields(payment_id = %id))]
    async fn get_payment(&self, id: &Id) -> Outcome<Payment> {
        self.ctx
            .fetch_authorized(
                ApiRequest::get(format!("/payments/{}", id.path_segment())),
                &GET_PAYMENT,
            )
            .await
    }
}
