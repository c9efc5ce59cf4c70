use std::sync::Arc;

use crate::oracle::PairingOracle;
use crate::service::PairingService;

pub struct HandlerState<O: PairingOracle + 'static> {
    pub service: Arc<PairingService<O>>,

    /// Oracle base URL, reported by the readiness probe.
    pub oracle_url: String,
}

impl<O: PairingOracle + 'static> Clone for HandlerState<O> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            oracle_url: self.oracle_url.clone(),
        }
    }
}

impl<O: PairingOracle + 'static> HandlerState<O> {
    pub fn new(service: PairingService<O>, oracle_url: impl Into<String>) -> Self {
        Self {
            service: Arc::new(service),
            oracle_url: oracle_url.into(),
        }
    }
}
