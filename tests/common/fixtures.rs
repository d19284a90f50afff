//! Shared fixtures: a seeded sample catalog and synthetic image bytes.

use chrono::Utc;
use std::sync::Arc;
use trama::{
    Color, ColorId, InMemoryStore, Link, LinkId, LinkStatus, Tissue, TissueId,
};

pub const TISSUE_ID: &str = "t-canelado";

/// One tissue ("Canelado") with active links for each `(id, sku, name,
/// hex, image_path)` tuple.
pub fn seeded_store(links: &[(&str, &str, &str, &str, Option<&str>)]) -> Arc<InMemoryStore> {
    let store = InMemoryStore::with_image_base_url("mem://images");
    let now = Utc::now();
    store.insert_tissue(Tissue {
        id: TissueId::new(TISSUE_ID),
        name: "Canelado".to_string(),
        sku: "T002".to_string(),
        width_cm: 150.0,
        composition: Some("100% Algod\u{e3}o".to_string()),
        created_at: now,
    });
    for (id, sku, name, hex, image_path) in links {
        let color_id = ColorId::new(format!("c-{}", id));
        store.insert_color(Color {
            id: color_id.clone(),
            name: name.to_string(),
            sku: format!("{}-C", sku),
            hex: Some(hex.to_string()),
            lab_l: None,
            lab_a: None,
            lab_b: None,
            family: None,
            created_at: now,
        });
        store.insert_link(Link {
            id: LinkId::new(*id),
            tissue_id: TissueId::new(TISSUE_ID),
            color_id,
            child_sku: sku.to_string(),
            image_path: image_path.map(str::to_string),
            status: LinkStatus::Active,
            created_at: now,
        });
    }
    Arc::new(store)
}

/// Valid PNG bytes of a solid-color image.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([60, 120, 180]),
    ));
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("encoding a synthetic PNG cannot fail");
    buf
}
