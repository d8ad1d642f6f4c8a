use chrono::{DateTime, Utc};
use rand::RngCore;

use demoseed_core::{Client, SeedConfig};

use crate::errors::GenerationError;
use crate::providers::PersonaProvider;
use crate::sampling::{days_before, random_uuid, timestamp_between};

/// Generate `config.client_count` active clients.
///
/// Each `created_at` falls in `[now - max_days, now - min_days)` of
/// `config.client_age_days`, so clients predate every order.
pub fn generate_clients(
    config: &SeedConfig,
    provider: &dyn PersonaProvider,
    now: DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> Result<Vec<Client>, GenerationError> {
    let window = config.client_age_days;
    let (Some(start), Some(end)) = (
        days_before(now, window.max_days),
        days_before(now, window.min_days),
    ) else {
        return Err(GenerationError::InvalidConfig(format!(
            "client_age_days {}..{} is out of range",
            window.min_days, window.max_days
        )));
    };

    let clients = (0..config.client_count)
        .map(|_| Client {
            id: random_uuid(rng),
            name: provider.name(rng),
            phone: provider.phone(rng),
            address: provider.address(rng),
            created_at: timestamp_between(start, end, rng),
            user_id: None,
            company_id: config.company_id,
            is_active: true,
            deleted_at: None,
            birth_date: None,
        })
        .collect();
    Ok(clients)
}
