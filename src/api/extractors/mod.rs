mod approov_claims;

pub use approov_claims::{ApproovClaims, ApproovClaimsExtractor};
