mod common;

use common::TestResult;
use common::fixtures::*;
use std::sync::Arc;
use trama::{
    AssemblerError, CollectingSink, DocumentAssembler, InMemoryImageFetcher, LinkId,
    PdfGenerationConfig, TissueId,
};

#[tokio::test]
async fn test_catalog_without_images_uses_swatches() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = seeded_store(&[
        ("l1", "T002-VD001", "Verde", "#00FF00", None),
        ("l2", "T002-VM001", "Vermelho", "#FF0000", None),
    ]);
    let sink = Arc::new(CollectingSink::new());
    let assembler =
        DocumentAssembler::new(store, Arc::new(InMemoryImageFetcher::new()), sink.clone());

    assert!(assembler.generate_catalog(&TissueId::new(TISSUE_ID)).await?);

    let html = &sink.rendered()[0];
    assert!(html.contains("Canelado"));
    assert!(html.contains("T002-VD001"));
    assert!(html.contains("T002-VM001"));
    assert!(html.contains("background:#00FF00"));
    assert!(html.contains("background:#FF0000"));
    assert!(!html.contains("<img"));
    assert!(html.len() < 50_000);
    Ok(())
}

#[tokio::test]
async fn test_catalog_with_images_embeds_data_uris() -> TestResult {
    let store = seeded_store(&[
        ("l1", "T002-VD001", "Verde", "#00FF00", Some("l1.png")),
        ("l2", "T002-VM001", "Vermelho", "#FF0000", None),
    ]);
    let fetcher = Arc::new(InMemoryImageFetcher::new());
    fetcher.add("mem://images/l1.png", png_bytes(900, 600));
    let sink = Arc::new(CollectingSink::new());
    let assembler = DocumentAssembler::new(store, fetcher, sink.clone());

    assembler.generate_catalog(&TissueId::new(TISSUE_ID)).await?;

    let html = &sink.rendered()[0];
    // The imaged link embeds, the plain one keeps a swatch.
    assert!(html.contains("data:image/jpeg;base64,"));
    assert!(html.contains("background:#FF0000"));
    Ok(())
}

#[tokio::test]
async fn test_catalog_over_image_ceiling_stays_flat() -> TestResult {
    let links: Vec<(String, String, String, String, Option<String>)> = (0..35)
        .map(|i| {
            (
                format!("l{}", i),
                format!("T002-{:03}", i),
                format!("Cor {}", i),
                "#336699".to_string(),
                Some(format!("{}.png", i)),
            )
        })
        .collect();
    let borrowed: Vec<(&str, &str, &str, &str, Option<&str>)> = links
        .iter()
        .map(|(a, b, c, d, e)| (a.as_str(), b.as_str(), c.as_str(), d.as_str(), e.as_deref()))
        .collect();
    let store = seeded_store(&borrowed);
    let sink = Arc::new(CollectingSink::new());
    // No images seeded in the fetcher: with 35 links the pipeline must
    // not even try to fetch.
    let assembler =
        DocumentAssembler::new(store, Arc::new(InMemoryImageFetcher::new()), sink.clone());

    assembler.generate_catalog(&TissueId::new(TISSUE_ID)).await?;

    let html = &sink.rendered()[0];
    assert!(!html.contains("<img"));
    assert_eq!(html.matches("class=\"card\"").count(), 35);
    Ok(())
}

#[tokio::test]
async fn test_pagination_respects_configured_page_size() -> TestResult {
    let links: Vec<(String, String, String, String, Option<String>)> = (0..8)
        .map(|i| {
            (
                format!("l{}", i),
                format!("T002-{:03}", i),
                format!("Cor {}", i),
                "#445566".to_string(),
                None,
            )
        })
        .collect();
    let borrowed: Vec<(&str, &str, &str, &str, Option<&str>)> = links
        .iter()
        .map(|(a, b, c, d, e)| (a.as_str(), b.as_str(), c.as_str(), d.as_str(), e.as_deref()))
        .collect();
    let store = seeded_store(&borrowed);
    let sink = Arc::new(CollectingSink::new());
    let assembler =
        DocumentAssembler::new(store, Arc::new(InMemoryImageFetcher::new()), sink.clone())
            .with_config(PdfGenerationConfig { max_images_per_page: 4, ..Default::default() });

    assembler.generate_catalog(&TissueId::new(TISSUE_ID)).await?;

    let html = &sink.rendered()[0];
    assert_eq!(html.matches("class=\"page\"").count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_single_sheet_generation() -> TestResult {
    let store = seeded_store(&[("l1", "T002-VD001", "Verde", "#00FF00", Some("l1.png"))]);
    let fetcher = Arc::new(InMemoryImageFetcher::new());
    fetcher.add("mem://images/l1.png", png_bytes(500, 500));
    let sink = Arc::new(CollectingSink::new());
    let assembler = DocumentAssembler::new(store, fetcher, sink.clone());

    assert!(assembler.generate_single(&LinkId::new("l1")).await?);

    let html = &sink.rendered()[0];
    assert!(html.contains("data:image/jpeg;base64,"));
    assert!(html.contains("T002-VD001"));
    assert_eq!(sink.shared().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_tissue_reports_nothing_to_generate() -> TestResult {
    let store = seeded_store(&[]);
    let assembler = DocumentAssembler::new(
        store,
        Arc::new(InMemoryImageFetcher::new()),
        Arc::new(CollectingSink::new()),
    );
    let err = assembler
        .generate_catalog(&TissueId::new(TISSUE_ID))
        .await
        .unwrap_err();
    assert!(matches!(err, AssemblerError::NothingToGenerate));
    Ok(())
}
