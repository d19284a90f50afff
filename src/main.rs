use chrono::Utc;
use std::env;
use std::sync::Arc;
use trama::{
    Color, ColorId, DocumentAssembler, FilesystemSink, InMemoryImageFetcher, InMemoryStore, Link,
    LinkId, LinkStatus, MovementKind, StockLedger, Tissue, TissueId,
};

/// Seeds a small sample catalog: one tissue with three colors.
fn seed(store: &InMemoryStore) -> TissueId {
    let now = Utc::now();
    let tissue_id = TissueId::new("t-canelado");
    store.insert_tissue(Tissue {
        id: tissue_id.clone(),
        name: "Canelado".to_string(),
        sku: "T002".to_string(),
        width_cm: 150.0,
        composition: Some("100% Algod\u{e3}o".to_string()),
        created_at: now,
    });
    for (suffix, name, hex) in [
        ("VD001", "Verde", "#2E7D32"),
        ("VM001", "Vermelho", "#C62828"),
        ("AZ001", "Azul", "#1565C0"),
    ] {
        let color_id = ColorId::new(format!("c-{}", suffix));
        store.insert_color(Color {
            id: color_id.clone(),
            name: name.to_string(),
            sku: suffix.to_string(),
            hex: Some(hex.to_string()),
            lab_l: None,
            lab_a: None,
            lab_b: None,
            family: None,
            created_at: now,
        });
        store.insert_link(Link {
            id: LinkId::new(format!("l-{}", suffix)),
            tissue_id: tissue_id.clone(),
            color_id,
            child_sku: format!("T002-{}", suffix),
            image_path: None,
            status: LinkStatus::Active,
            created_at: now,
        });
    }
    tissue_id
}

/// A small demo around the core: register a few stock movements, then
/// generate the catalog document for the sample tissue.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Generates a sample catalog document from an in-memory store.");
        eprintln!();
        eprintln!("Usage: {} <output-directory>", args[0]);
        std::process::exit(1);
    }
    let output_dir = &args[1];

    let store = Arc::new(InMemoryStore::new());
    let tissue_id = seed(&store);

    let ledger = StockLedger::new(store.clone());
    let link = LinkId::new("l-VD001");
    ledger.register(&link, MovementKind::In, 12).await?;
    ledger.register(&link, MovementKind::Out, 4).await?;
    println!("Stock level for {}: {} rolls", link, ledger.level(&link).await?);

    let sink = Arc::new(FilesystemSink::new(output_dir).await?);
    let assembler = DocumentAssembler::new(store, Arc::new(InMemoryImageFetcher::new()), sink);

    println!("Generating catalog document into {}...", output_dir);
    assembler.generate_catalog(&tissue_id).await?;
    println!("Done.");
    Ok(())
}
