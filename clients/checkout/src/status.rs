//! Payment status owned by the orchestrator, and its presentation

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatusState {
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatus {
    pub state: PaymentStatusState,
    pub title: String,
    pub message: String,
    pub transaction_id: Option<String>,
}

impl PaymentStatus {
    pub fn idle() -> Self {
        Self::new(PaymentStatusState::Idle, "", "")
    }

    pub fn new(state: PaymentStatusState, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            state,
            title: title.into(),
            message: message.into(),
            transaction_id: None,
        }
    }

    pub fn success(transaction_id: impl Into<String>) -> Self {
        let transaction_id = transaction_id.into();
        Self {
            state: PaymentStatusState::Success,
            title: "Payment Successful!".to_string(),
            message: format!("Transaction ID: {}", transaction_id),
            transaction_id: Some(transaction_id),
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Positive,
    Negative,
}

/// What the status dialog shows for a given status
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub tone: Tone,
    pub heading: String,
    pub body: String,
    pub transaction_id: Option<String>,
    /// None while the payment is in flight: the dialog cannot be dismissed
    pub dismiss_label: Option<&'static str>,
}

/// Render the orchestrator's status; Idle renders nothing
pub fn present(status: &PaymentStatus) -> Option<StatusView> {
    let (tone, dismiss_label) = match status.state {
        PaymentStatusState::Idle => return None,
        PaymentStatusState::Pending => (Tone::Progress, None),
        PaymentStatusState::Success => (Tone::Positive, Some("Done")),
        PaymentStatusState::Error => (Tone::Negative, Some("Try Again")),
    };

    Some(StatusView {
        tone,
        heading: status.title.clone(),
        body: status.message.clone(),
        transaction_id: status.transaction_id.clone(),
        dismiss_label,
    })
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.tone {
            Tone::Progress => "…",
            Tone::Positive => "✔",
            Tone::Negative => "✖",
        };
        writeln!(f, "{} {}", marker, self.heading)?;
        write!(f, "{}", self.body)?;
        if let Some(label) = self.dismiss_label {
            write!(f, "\n[{}]", label)?;
        }
        Ok(())
    }
}
