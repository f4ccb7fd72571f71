//! Headless payment modal
//!
//! Owns the form, the amount policy, and the payment status. Form input may
//! arrive from one task while `submit` is awaiting the service or the
//! checkout SDK on another, so state sits behind a mutex that is never held
//! across an await.

use regex::Regex;
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::catalog::{find_service, Service};
use crate::gateway::CheckoutGateway;
use crate::service::OrderApi;
use crate::status::{PaymentStatus, PaymentStatusState};
use crate::types::{PatientDetails, PaymentOrderRequest};

pub const PRODUCT_INFO: &str = "Dental Service";

static CUSTOM_AMOUNT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[0-9]*\.?[0-9]*$")
        .map_err(|err| tracing::error!(?err, "custom amount pattern failed to compile"))
        .ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Name,
    Email,
    Phone,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The modal is not open; nothing was sent
    Closed,
    /// A payment is already in flight; nothing was sent
    InFlight,
    /// Local validation failed; nothing was sent
    Rejected,
    /// The flow ran to a terminal status
    Finished(PaymentStatusState),
}

/// Point-in-time copy of the modal state, for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSnapshot {
    pub is_open: bool,
    pub details: PatientDetails,
    pub selected_service_id: Option<String>,
    pub custom_amount: String,
    pub amount: f64,
    pub is_loading: bool,
    pub status: PaymentStatus,
}

#[derive(Debug, Default)]
struct ModalState {
    is_open: bool,
    details: PatientDetails,
    selected_service_id: Option<String>,
    custom_amount: String,
    is_loading: bool,
    status: PaymentStatus,
}

impl ModalState {
    /// Catalog price wins; otherwise the custom amount, else zero
    fn amount(&self) -> f64 {
        match self.selected_service_id.as_deref().and_then(find_service) {
            Some(service) => service.price,
            None => self.custom_amount.parse().unwrap_or(0.0),
        }
    }

    fn set_status(&mut self, status: PaymentStatus) {
        tracing::debug!(
            from = ?self.status.state,
            to = ?status.state,
            title = %status.title,
            "payment status changed"
        );
        self.status = status;
    }

    fn fail(&mut self, title: &str, message: &str) {
        self.is_loading = false;
        self.set_status(PaymentStatus::new(PaymentStatusState::Error, title, message));
    }
}

type CloseCallback = Box<dyn Fn() + Send + Sync>;

pub struct PaymentOrchestrator<A, G> {
    api: A,
    gateway: G,
    state: Mutex<ModalState>,
    on_close: CloseCallback,
}

impl<A: OrderApi, G: CheckoutGateway> PaymentOrchestrator<A, G> {
    /// `on_close` is the parent's close handler, fired when the modal closes
    pub fn new(api: A, gateway: G, on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            api,
            gateway,
            state: Mutex::new(ModalState::default()),
            on_close: Box::new(on_close),
        }
    }

    fn state(&self) -> MutexGuard<'_, ModalState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Open the modal, preselecting `initial` when given
    pub fn open(&self, initial: Option<&Service>) {
        let mut state = self.state();
        state.is_open = true;
        match initial {
            Some(service) => {
                state.selected_service_id = Some(service.id.to_string());
                state.custom_amount.clear();
            }
            None => state.selected_service_id = None,
        }
    }

    pub fn snapshot(&self) -> ModalSnapshot {
        let state = self.state();
        ModalSnapshot {
            is_open: state.is_open,
            details: state.details.clone(),
            selected_service_id: state.selected_service_id.clone(),
            custom_amount: state.custom_amount.clone(),
            amount: state.amount(),
            is_loading: state.is_loading,
            status: state.status.clone(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.state().amount()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn status(&self) -> PaymentStatus {
        self.state().status.clone()
    }

    pub fn set_detail(&self, field: DetailField, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.state();
        match field {
            DetailField::Name => state.details.name = value,
            DetailField::Email => state.details.email = value,
            DetailField::Phone => state.details.phone = value,
        }
    }

    /// Select a catalog service (empty id clears); clears the custom amount
    ///
    /// Returns false for an id that is not in the catalog.
    pub fn select_service(&self, id: &str) -> bool {
        if !id.is_empty() && find_service(id).is_none() {
            return false;
        }

        let mut state = self.state();
        state.selected_service_id = (!id.is_empty()).then(|| id.to_string());
        state.custom_amount.clear();
        true
    }

    /// Apply a keystroke to the custom amount; clears the service selection
    ///
    /// Input that is not a partial decimal is ignored and returns false.
    pub fn set_custom_amount(&self, value: &str) -> bool {
        let accepted = match CUSTOM_AMOUNT.as_ref() {
            Some(regex) => regex.is_match(value),
            None => {
                value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
                    && value.matches('.').count() <= 1
            }
        };
        if !accepted {
            return false;
        }

        let mut state = self.state();
        state.custom_amount = value.to_string();
        state.selected_service_id = None;
        true
    }

    /// Close the modal; ignored while a payment is in flight
    pub fn close_modal(&self) -> bool {
        {
            let mut state = self.state();
            if state.is_loading {
                tracing::debug!("close ignored: payment in flight");
                return false;
            }
            state.is_open = false;
            state.status = PaymentStatus::idle();
        }
        (self.on_close)();
        true
    }

    /// Dismiss the status dialog; after a success this also closes the flow
    pub fn dismiss_status(&self) {
        let was_success = {
            let mut state = self.state();
            if state.status.state == PaymentStatusState::Pending {
                return;
            }
            let was_success = state.status.state == PaymentStatusState::Success;
            state.set_status(PaymentStatus::idle());
            if was_success {
                state.is_open = false;
            }
            was_success
        };

        if was_success {
            (self.on_close)();
        }
    }

    /// Validate, create the signed order, and hand it to the hosted checkout
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = self.state();
            if !state.is_open {
                tracing::debug!("submit ignored: modal is closed");
                return SubmitOutcome::Closed;
            }
            if state.is_loading {
                return SubmitOutcome::InFlight;
            }

            let amount = state.amount();
            if amount <= 0.0 || !state.details.is_complete() {
                state.set_status(PaymentStatus::new(
                    PaymentStatusState::Error,
                    "Validation Error",
                    "Please fill all fields and ensure the amount is greater than zero.",
                ));
                return SubmitOutcome::Rejected;
            }

            state.is_loading = true;
            state.set_status(PaymentStatus::new(
                PaymentStatusState::Pending,
                "Redirecting to PayU",
                "Please wait while we initiate the secure payment...",
            ));

            PaymentOrderRequest {
                amount: amount.to_string(),
                firstname: state.details.name.clone(),
                email: state.details.email.clone(),
                phone: state.details.phone.clone(),
                productinfo: PRODUCT_INFO.to_string(),
            }
        };

        let payload = match self.api.create_payu_order(&request).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "Payment Error");
                let mut state = self.state();
                state.fail("Payment Error", "Unable to initialize payment. Please try again.");
                return SubmitOutcome::Finished(PaymentStatusState::Error);
            }
        };

        let outcome = self.gateway.launch(&payload).await;

        let mut state = self.state();
        state.is_loading = false;
        match outcome {
            Ok(response) if response.is_success() => {
                let txnid = response.txnid.unwrap_or(payload.txnid);
                state.set_status(PaymentStatus::success(txnid));
            }
            Ok(response) => {
                let message = response
                    .error_message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Payment was unsuccessful.".to_string());
                state.fail("Payment Failed", &message);
            }
            Err(e) => {
                tracing::error!(error = %e, "Bolt Exception");
                state.fail("Payment Error", "Payment could not be completed. Please try again.");
            }
        }

        SubmitOutcome::Finished(state.status.state)
    }
}
