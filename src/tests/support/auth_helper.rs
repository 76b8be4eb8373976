#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig {
            issuer: "CampusPortal".to_string(),
            secret_key: "test_secret_key_for_testing_only_32b".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 86400,
        };
        JwtTokenService::new(jwt_config)
    }

    /// The trait-object form the extractors pull out of app data.
    pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(create_test_jwt_service())
    }
}
