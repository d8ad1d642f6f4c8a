//! Locale-aware fake-data sources for client records.

mod es_ar;
mod fake_rs;
mod locales;

use rand::RngCore;

use crate::errors::GenerationError;

pub use es_ar::EsArProvider;
pub use fake_rs::FakeRsProvider;
pub use locales::LocaleKey;

pub trait NameProvider {
    /// Full person name.
    fn name(&self, rng: &mut dyn RngCore) -> String;
}

pub trait PhoneProvider {
    fn phone(&self, rng: &mut dyn RngCore) -> String;
}

pub trait AddressProvider {
    /// Single-line postal address.
    fn address(&self, rng: &mut dyn RngCore) -> String;
}

/// Everything the client generator needs to fake a person.
pub trait PersonaProvider: NameProvider + PhoneProvider + AddressProvider {
    fn locale(&self) -> LocaleKey;
}

/// Resolve the provider for a locale tag such as `es_AR`.
pub fn provider_for(locale: &str) -> Result<Box<dyn PersonaProvider>, GenerationError> {
    let key = LocaleKey::parse(locale).ok_or_else(|| {
        GenerationError::InvalidConfig(format!("unsupported faker locale '{}'", locale))
    })?;
    Ok(match key {
        LocaleKey::EsAr => Box::new(EsArProvider),
        LocaleKey::EnUs | LocaleKey::PtBr => Box::new(FakeRsProvider::new(key)),
    })
}
