//! Headless preview: fetch the three content documents from a running
//! portfolio server and print the rendered page. Sections whose fetch
//! failed stay empty, same as in the browser.

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_client::handoff::HandoffConfig;
use portfolio_client::loader::DataLoader;
use portfolio_client::page::Page;
use portfolio_client::render::Renderer;
use portfolio_client::settings::{FileStore, ThemeManager};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:3001".to_string());
    let base = Url::parse(&base).context("base URL must be a valid absolute URL")?;
    info!("previewing {base}");

    let theme = ThemeManager::new(FileStore::open(".portfolio-settings.json"));
    info!("theme: {}", theme.current().as_str());

    let loader = DataLoader::new(base);
    let (profile, languages, services) =
        tokio::join!(loader.profile(), loader.languages(), loader.services());

    let mut page = Page::default();
    let mut renderer = Renderer::new(&mut page);
    renderer.render_profile(&profile);
    renderer.render_languages(&languages);
    renderer.render_services(&services);

    print_page(&page);
    Ok(())
}

fn print_page(page: &Page) {
    let handoff = HandoffConfig::default();

    if !page.profile.name.is_empty() {
        println!("{} — {}", page.profile.name, page.profile.title);
        println!("{}", page.profile.bio);
        println!("image: {}", page.profile.image_src);
        println!();
    }

    for bar in &page.languages.bars {
        println!("{:<16} {:>6}  fill {:>3}%", bar.name, bar.label, bar.fill_percent);
    }
    if !page.languages.bars.is_empty() {
        println!();
    }

    for card in &page.services.cards {
        println!("{}: {}", card.name, card.description);
        println!("  [{}] -> {}", card.button_label, card.activate(&handoff));
    }
}
