use std::sync::Arc;

use auth::Role;
use identity_service::config::AuthConfig;
use identity_service::config::Config;
use identity_service::config::PasswordPolicy;
use identity_service::directory::InMemoryUserDirectory;
use identity_service::identity::models::RegisterUserCommand;
use identity_service::identity::service::IdentityService;

pub fn test_config() -> Config {
    config_with_ttl(30)
}

/// Config with an arbitrary ttl; negative values mint already-expired
/// tokens, which is how the expiry path is tested without sleeping.
pub fn config_with_ttl(token_ttl_minutes: i64) -> Config {
    Config {
        auth: AuthConfig {
            secret: "integration_test_secret_32_bytes!!".to_string(),
            token_ttl_minutes,
        },
        password: PasswordPolicy::default(),
    }
}

pub fn service() -> Arc<IdentityService<InMemoryUserDirectory>> {
    service_with_config(&test_config())
}

pub fn service_with_config(config: &Config) -> Arc<IdentityService<InMemoryUserDirectory>> {
    Arc::new(IdentityService::new(
        Arc::new(InMemoryUserDirectory::new()),
        config,
    ))
}

pub fn register_command(email: &str, role: Role) -> RegisterUserCommand {
    RegisterUserCommand {
        email: email.to_string(),
        password: "Test123!".to_string(),
        confirm_password: "Test123!".to_string(),
        first_name: "Jo".to_string(),
        last_name: "Doe".to_string(),
        role,
        phone: Some("+1555".to_string()),
    }
}
