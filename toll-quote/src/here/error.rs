//! Geocoding and routing provider error types.

/// Errors from the geocoding and routing provider.
#[derive(Debug, thiserror::Error)]
pub enum HereError {
    /// Address has nothing to geocode (no letters or digits).
    #[error("invalid address {0:?}: must contain letters or digits")]
    InvalidAddress(String),

    /// Geocoder answered but found nothing for the address.
    #[error("no geocode match for {address:?}")]
    NoGeocodeMatch { address: String },

    /// Geocoding request failed or the response had an unexpected shape.
    #[error("geocoding {address:?} failed: {message}")]
    GeocodeProvider {
        address: String,
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },

    /// Routing request failed or the response had an unexpected shape.
    #[error("routing failed: {message}")]
    RoutingProvider {
        status: Option<u16>,
        message: String,
        body: Option<String>,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl HereError {
    /// Raw provider payload, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            HereError::GeocodeProvider { body, .. } | HereError::RoutingProvider { body, .. } => {
                body.as_deref()
            }
            _ => None,
        }
    }
}
