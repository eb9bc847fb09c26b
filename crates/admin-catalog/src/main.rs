use admin_catalog::catalog::{
    AddProductForm, CatalogError, ProductCard, SortDirection, SortKey, SortSpec,
};
use admin_catalog::config::AdminConfig;
use admin_catalog::lifecycle::{setup_tracing, CatalogSystem};
use admin_catalog::model::ProductDraft;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AdminConfig::from_env();
    info!(buffer = config.actor_buffer, "Starting catalog");
    let system = CatalogSystem::new(&config);

    let seeded = system.catalog.seed().await.map_err(|e| e.to_string())?;
    info!(seeded, "Catalog ready");

    let mut form = AddProductForm::new();
    form.draft = ProductDraft {
        name: "ab".to_string(),
        price: "0".to_string(),
        ..ProductDraft::default()
    };
    let span = tracing::info_span!("add_product");
    async {
        match form.submit(&system.catalog).await {
            Err(CatalogError::Invalid(errors)) => warn!(%errors, "Draft kept for correction"),
            Err(e) => return Err(e.to_string()),
            Ok(id) => info!(%id, "Unexpectedly accepted"),
        }

        form.draft = ProductDraft {
            name: "Pixel 9".to_string(),
            brand: "Google".to_string(),
            category: "Smartphones".to_string(),
            price: "79990".to_string(),
            quantity: "8".to_string(),
            is_available: true,
        };
        let id = form.submit(&system.catalog).await.map_err(|e| e.to_string())?;
        info!(%id, flash = form.flash().unwrap_or_default(), "Product added");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    for spec in [
        SortSpec::default(),
        SortSpec::new(SortKey::Price, SortDirection::Desc),
        SortSpec::new(SortKey::Created, SortDirection::Asc),
    ] {
        let view = system.catalog.sorted(spec).await.map_err(|e| e.to_string())?;
        println!("== {spec} ==");
        for product in &view {
            println!("{}\n", ProductCard(product));
        }
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
