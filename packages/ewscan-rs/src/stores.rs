//! Static mock listing of nearby recycling and selling stores. Placeholder
//! data; there is no geolocation lookup.

pub const MOCK_STORES: &[(&str, &str)] = &[
  ("GreenTech Recycle Hub", "123 Eco Lane"),
  ("E-Waste Solutions", "456 Circuit Street"),
  ("Local Scrap Dealer", "Near Industrial Area"),
];

/// Renders the store listing appended to every successful report.
pub fn render_stores_section() -> String {
  let mut section = String::from("## Nearby Recycling / Selling Stores (Mock Data)\n\n");
  for (name, address) in MOCK_STORES {
    section.push_str(&format!("- {} - {}\n", name, address));
  }
  section
}
