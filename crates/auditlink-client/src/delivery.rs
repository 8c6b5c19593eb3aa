//! Result of a single transmission attempt.

use std::fmt;

/// What happened to an emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The gateway answered with a 2xx status.
    Delivered { status: u16 },
    /// The gateway answered with any other status.
    Rejected { status: u16 },
    /// No response was obtained: connection failure, timeout, or the event
    /// could not be encoded.
    TransportError { message: String },
    /// Emission is switched off; nothing was sent.
    Disabled,
}

impl DeliveryOutcome {
    /// Classify a gateway status code.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Delivered { status }
        } else {
            Self::Rejected { status }
        }
    }

    /// Whether the gateway accepted the event.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Whether the caller may treat the event as handled. A disabled client
    /// reports every event as handled.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Delivered { .. } | Self::Disabled)
    }

    /// Status code returned by the gateway, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Delivered { status } | Self::Rejected { status } => Some(*status),
            Self::TransportError { .. } | Self::Disabled => None,
        }
    }
}

impl From<DeliveryOutcome> for bool {
    fn from(outcome: DeliveryOutcome) -> Self {
        outcome.is_accepted()
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered { status } => write!(f, "delivered ({status})"),
            Self::Rejected { status } => write!(f, "rejected ({status})"),
            Self::TransportError { message } => write!(f, "transport error: {message}"),
            Self::Disabled => write!(f, "disabled (not sent)"),
        }
    }
}
