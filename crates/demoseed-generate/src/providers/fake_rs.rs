use fake::Fake;
use fake::faker::address::{en as address_en, pt_br as address_pt_br};
use fake::faker::name::{en as name_en, pt_br as name_pt_br};
use fake::faker::phone_number::{en as phone_en, pt_br as phone_pt_br};
use rand::RngCore;

use super::{AddressProvider, LocaleKey, NameProvider, PersonaProvider, PhoneProvider};

/// Adapter over the `fake` crate locale modules.
///
/// `EsAr` has no `fake` locale and falls back to `en`; `provider_for` never
/// builds this adapter for it.
pub struct FakeRsProvider {
    locale: LocaleKey,
}

impl FakeRsProvider {
    pub fn new(locale: LocaleKey) -> Self {
        Self { locale }
    }
}

impl NameProvider for FakeRsProvider {
    fn name(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            LocaleKey::PtBr => name_pt_br::Name().fake_with_rng(rng),
            LocaleKey::EnUs | LocaleKey::EsAr => name_en::Name().fake_with_rng(rng),
        }
    }
}

impl PhoneProvider for FakeRsProvider {
    fn phone(&self, rng: &mut dyn RngCore) -> String {
        match self.locale {
            LocaleKey::PtBr => phone_pt_br::PhoneNumber().fake_with_rng(rng),
            LocaleKey::EnUs | LocaleKey::EsAr => phone_en::PhoneNumber().fake_with_rng(rng),
        }
    }
}

impl AddressProvider for FakeRsProvider {
    fn address(&self, rng: &mut dyn RngCore) -> String {
        let (street, number, city, state): (String, String, String, String) = match self.locale {
            LocaleKey::PtBr => (
                address_pt_br::StreetName().fake_with_rng(rng),
                address_pt_br::BuildingNumber().fake_with_rng(rng),
                address_pt_br::CityName().fake_with_rng(rng),
                address_pt_br::StateAbbr().fake_with_rng(rng),
            ),
            LocaleKey::EnUs | LocaleKey::EsAr => (
                address_en::StreetName().fake_with_rng(rng),
                address_en::BuildingNumber().fake_with_rng(rng),
                address_en::CityName().fake_with_rng(rng),
                address_en::StateAbbr().fake_with_rng(rng),
            ),
        };
        format!("{street} {number}, {city}, {state}")
    }
}

impl PersonaProvider for FakeRsProvider {
    fn locale(&self) -> LocaleKey {
        self.locale
    }
}
