use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use super::{AddressProvider, LocaleKey, NameProvider, PersonaProvider, PhoneProvider};

const FIRST_NAMES: &[&str] = &[
    "Agustina", "Bautista", "Camila", "Catalina", "Diego", "Facundo", "Florencia", "Franco",
    "Gonzalo", "Guadalupe", "Joaquín", "Julieta", "Lautaro", "Lucía", "Malena", "Martina",
    "Mateo", "Micaela", "Nicolás", "Santiago", "Sofía", "Tomás", "Valentina", "Ximena",
];

const LAST_NAMES: &[&str] = &[
    "Acosta", "Álvarez", "Benítez", "Castro", "Díaz", "Fernández", "Giménez", "Gómez",
    "González", "Herrera", "López", "Martínez", "Medina", "Molina", "Pereyra", "Romero",
    "Rodríguez", "Ruiz", "Sánchez", "Sosa", "Suárez", "Torres", "Vázquez", "Rojas",
];

const STREET_PREFIXES: &[&str] = &["Av.", "Calle", "Pasaje", "Bv."];

const STREETS: &[&str] = &[
    "Corrientes", "Rivadavia", "Santa Fe", "Belgrano", "San Martín", "Mitre", "Sarmiento",
    "Pellegrini", "Independencia", "Hipólito Yrigoyen", "Italia", "Moreno", "9 de Julio",
    "Alem", "Urquiza", "Entre Ríos",
];

const CITIES: &[(&str, &str)] = &[
    ("Buenos Aires", "Ciudad Autónoma de Buenos Aires"),
    ("La Plata", "Buenos Aires"),
    ("Mar del Plata", "Buenos Aires"),
    ("Bahía Blanca", "Buenos Aires"),
    ("Córdoba", "Córdoba"),
    ("Villa María", "Córdoba"),
    ("Rosario", "Santa Fe"),
    ("Santa Fe", "Santa Fe"),
    ("Mendoza", "Mendoza"),
    ("San Miguel de Tucumán", "Tucumán"),
    ("Salta", "Salta"),
    ("Neuquén", "Neuquén"),
];

const AREA_CODES: &[&str] = &[
    "11", "221", "223", "291", "351", "353", "341", "342", "261", "381", "387", "299",
];

/// Argentine Spanish persona data.
///
/// `fake` ships no `es_AR` locale, so names, streets and area codes come
/// from the curated lists above.
pub struct EsArProvider;

impl NameProvider for EsArProvider {
    fn name(&self, rng: &mut dyn RngCore) -> String {
        let first = FIRST_NAMES.choose(rng).unwrap_or(&"Juan");
        let last = LAST_NAMES.choose(rng).unwrap_or(&"Pérez");
        format!("{first} {last}")
    }
}

impl PhoneProvider for EsArProvider {
    /// Mobile number in international format: `+54 9 <area> <local>`.
    ///
    /// Area code plus local number is always ten digits.
    fn phone(&self, rng: &mut dyn RngCore) -> String {
        let area = AREA_CODES.choose(rng).unwrap_or(&"11");
        let local_digits = 10 - area.len() as u32;
        let low = 10_u64.pow(local_digits - 1);
        let high = 10_u64.pow(local_digits);
        let local = rng.random_range(low..high).to_string();
        let (head, tail) = local.split_at(local.len() - 4);
        format!("+54 9 {area} {head}-{tail}")
    }
}

impl AddressProvider for EsArProvider {
    fn address(&self, rng: &mut dyn RngCore) -> String {
        let prefix = STREET_PREFIXES.choose(rng).unwrap_or(&"Calle");
        let street = STREETS.choose(rng).unwrap_or(&"San Martín");
        let number = rng.random_range(1..=9999);
        let (city, province) = CITIES.choose(rng).copied().unwrap_or(("Rosario", "Santa Fe"));
        format!("{prefix} {street} {number}, {city}, {province}")
    }
}

impl PersonaProvider for EsArProvider {
    fn locale(&self) -> LocaleKey {
        LocaleKey::EsAr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn phone_has_ten_national_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let phone = EsArProvider.phone(&mut rng);
            assert!(phone.starts_with("+54 9 "), "{phone}");
            let national: String = phone["+54 9 ".len()..]
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            assert_eq!(national.len(), 10, "{phone}");
        }
    }

    #[test]
    fn name_has_first_and_last() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let name = EsArProvider.name(&mut rng);
        assert_eq!(name.split(' ').count(), 2, "{name}");
    }

    #[test]
    fn address_names_a_province() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let address = EsArProvider.address(&mut rng);
        assert!(
            CITIES
                .iter()
                .any(|(city, province)| address.ends_with(&format!("{city}, {province}"))),
            "{address}"
        );
    }
}
