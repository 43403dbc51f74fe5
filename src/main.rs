use anyhow::Result;
use localized_routes::config::{Config, SiteConfig};
use localized_routes::content::{ContentStore, JsonContentStore};
use localized_routes::i18n::{
    ConfigValidator, LanguageRegistry, LookupMetrics, PathPattern, PathTranslator, RouteNameMap,
    TranslationTable,
};
use localized_routes::RoutingError;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_routes=info".parse()?),
        )
        .init();

    info!("Starting localized route build pass");

    // Load configuration from environment and site config
    let config = Config::from_env()?;
    let site = SiteConfig::load(&config.site_config_path)?;

    // Step 1: Build the immutable tables
    info!("Loading locale data from {}", config.locales_dir.display());
    let registry = LanguageRegistry::new(site.languages.clone(), site.show_default_lang)?;
    let table = TranslationTable::load_from_dir(&config.locales_dir)?;
    let route_names = RouteNameMap::from_json_map(&site.routes)?;

    // Step 2: Validate configuration, fail fast on defects
    info!("Validating routing configuration");
    let mut report = ConfigValidator::validate(&registry, &table, &route_names);

    let store = JsonContentStore::new(&config.content_dir);
    let entries = store.entries(&site.content_collection).await?;
    report.merge(ConfigValidator::validate_content_links(&entries));

    for warning in &report.warnings {
        warn!("{warning}");
    }
    if report.has_errors() {
        return Err(RoutingError::InvalidConfiguration(report.errors.join("\n")).into());
    }

    // Step 3: Expand every declared page into localized static paths
    let translator = PathTranslator::new(&registry, &route_names);
    let mut manifest = Vec::new();
    for page in &site.pages {
        let pattern = PathPattern::parse(&page.pattern)?;
        manifest.extend(translator.expand(&page.base_path, &pattern));
    }
    info!(
        "Expanded {} static paths for {} pages across {} languages",
        manifest.len(),
        site.pages.len(),
        registry.list_enabled().len()
    );

    // Step 4: Emit the routing manifest for the page-rendering layer
    println!("{}", serde_json::to_string_pretty(&manifest)?);

    let metrics = LookupMetrics::global().report();
    info!(
        direct_hits = metrics.direct_hits,
        default_fallbacks = metrics.default_fallbacks,
        raw_key_fallbacks = metrics.raw_key_fallbacks,
        route_identity_fallbacks = metrics.route_identity_fallbacks,
        "lookup metrics"
    );

    info!("Routing manifest built successfully");
    Ok(())
}
