// the motorcycle brands listed under the "Products" menu, in display order
pub const BRANDS: [&str; 8] = [
    "Hero",
    "Honda",
    "TVS",
    "Royal Enfield",
    "Bajaj",
    "Suzuki",
    "Yamaha",
    "KTM",
];

// brand pages live under this prefix; the router renders the slug as the final segment
pub const PRODUCTS_PREFIX: &str = "/products";

// lowercase the name and swap the first space for a hyphen
//
// only the first space is replaced, so a three word name keeps its second space; the
// product pages are already published under these paths
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replacen(' ', "-", 1)
}
