/// Response header carrying the outcome of every gateway request.
pub const PAIRING_STATUS_HEADER: &str = "x-pairing-status";

/// Outcome reported in [`PAIRING_STATUS_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingStatus {
    Healthy,
    Ready,
    Resolved,
    Found,
    Scored,
    Recommended,
    Explained,
    Unresolvable,
    InvalidRequest,
    OracleError,
}

impl PairingStatus {
    pub fn as_header_value(self) -> &'static str {
        match self {
            PairingStatus::Healthy => "healthy",
            PairingStatus::Ready => "ready",
            PairingStatus::Resolved => "resolved",
            PairingStatus::Found => "found",
            PairingStatus::Scored => "scored",
            PairingStatus::Recommended => "recommended",
            PairingStatus::Explained => "explained",
            PairingStatus::Unresolvable => "unresolvable",
            PairingStatus::InvalidRequest => "invalid_request",
            PairingStatus::OracleError => "oracle_error",
        }
    }
}

impl std::fmt::Display for PairingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_header_value())
    }
}
