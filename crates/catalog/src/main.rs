use anyhow::{Context, Result};
use catalog::{
    abstract_trait::{AuthDecision, DynAuthGate},
    config::Config,
    di::DependenciesInject,
    domain::requests::{CreateProductRequest, SearchProductsRequest},
    repository::ProductCollection,
    service::{StaticAuthGate, views},
    utils::init_logger,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    init_logger("catalog", config.dev_mode, config.enable_file_log);

    info!("🚀 Starting catalog core demo...");

    let collection = ProductCollection::shared();
    let auth_gate: DynAuthGate = Arc::new(StaticAuthGate::allowed());
    let di = DependenciesInject::new(collection, auth_gate.clone());

    let store = &di.product_store;

    if config.seed_count > 0 {
        for draft in demo_drafts().into_iter().take(config.seed_count) {
            store.create(draft).await;
        }
    }

    store.load().await;

    if let Some(path) = config.import_sample_path.as_deref() {
        let csv_text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CSV file at {path}"))?;

        match auth_gate.authorize().await {
            AuthDecision::Allowed => {
                match di.bulk_import.import(&csv_text).await {
                    Ok(summary) => info!(
                        "✅ Imported {} products ({} failed, {} rows dropped)",
                        summary.success_count, summary.failure_count, summary.dropped_rows
                    ),
                    Err(err) => error!("❌ Import failed: {err}"),
                }
                store.load().await;
            }
            decision => warn!("⚠️ Bulk import skipped, auth gate returned {decision:?}"),
        }
    }

    let snapshot = store.products().await;
    let counts = views::category_counts(&snapshot);
    info!(
        "🏷️ Categories: {}",
        serde_json::to_string(&counts).context("Failed to encode category counts")?
    );

    let featured = views::filter_products(&snapshot, "jacket", views::ALL_PRODUCTS_CATEGORY);
    info!("🧥 {} products match the storefront filter", featured.len());

    let request = SearchProductsRequest {
        search: "jacket".to_string(),
        category: None,
    };
    for hit in store.search(&request).await {
        info!("🔍 Search hit: {} ({})", hit.name, hit.category);
    }

    if let Some(err) = store.last_error().await {
        warn!("⚠️ Last recorded error: {err}");
    }

    Ok(())
}

fn demo_drafts() -> Vec<CreateProductRequest> {
    let rows = [
        (
            "StyleScan Tech Jacket",
            "Crafted with stretchy, breathable material, the perfect modern jacket.",
            130.83,
            198,
            "Clothing",
        ),
        (
            "Urban Waffle Debut",
            "Retro gets modernized in this Urban Waffle Debut.",
            80.00,
            218,
            "Shoes",
        ),
        (
            "Elite Crew Basketball Socks",
            "A supportive fit and feel perfect for any activity.",
            16.50,
            123,
            "Others Product",
        ),
        (
            "P-6000 Running Shoes",
            "The P-6000 brings forward iconic design elements.",
            115.28,
            121,
            "Shoes",
        ),
        (
            "Zoom Vomero Roam",
            "A winterized version with superior comfort and style.",
            187.43,
            119,
            "Shoes",
        ),
        (
            "Men's Fleece Cargo Pants",
            "Brushed fleece cargo pants that offer comfort and style.",
            65.42,
            192,
            "Clothing",
        ),
    ];

    rows.into_iter()
        .map(|(name, description, price, stock, category)| CreateProductRequest {
            name: name.to_string(),
            description: Some(description.to_string()),
            price,
            stock: Some(stock),
            category: category.to_string(),
            sku: None,
            image_url: None,
        })
        .collect()
}
