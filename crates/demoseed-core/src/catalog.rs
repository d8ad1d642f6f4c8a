use uuid::Uuid;

use crate::model::Product;

/// Tenant id of the demo company every generated row belongs to.
pub const DEMO_COMPANY_ID: Uuid = Uuid::from_u128(0x17ea9272_bf9d_406d_bca3_01fc75d08032);

const DEMO_PRODUCTS: &[(u128, &str, i64, &str)] = &[
    (
        0x76af6a89_c4e9_431e_97dc_cc01d319be1f,
        "Napolitana (Demo)",
        9500,
        "Pizzas",
    ),
    (
        0x7ee18737_29e8_49a7_ae05_e7f3a39235dc,
        "Muzzarella (Demo)",
        8000,
        "Pizzas",
    ),
    (
        0x030a4e11_ffeb_4db0_b4f7_ade3186d7c71,
        "Cerveza Lager (Demo)",
        3500,
        "Bebidas",
    ),
    (
        0xa6f732bb_fafa_4d59_be16_7ba5f3b606c0,
        "Hamburguesa Completa (Demo)",
        6500,
        "Hamburguesas",
    ),
];

/// The four demo products. These ids must already exist in the target
/// `products` table.
pub fn default_catalog() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|&(id, name, price, category)| Product {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            price,
            category: category.to_string(),
        })
        .collect()
}
