fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();

        if let Err(e) = check_config() {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).ok();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to mount on");
            return;
        };
        let config = personal_site::web::load_config(&document);
        match personal_site::web::mount(&config) {
            // Listeners hold their own references; the handle can go.
            Ok(_page) => {}
            Err(e) => log::error!("Failed to mount presentation controller: {}", e),
        }
    }
}

/// Resolves the page config the way a deployment would and prints it.
#[cfg(not(target_arch = "wasm32"))]
fn check_config() -> Result<(), personal_site::PresentationError> {
    let config = personal_site::get_page_config()?;
    config.validate()?;

    log::info!("Theme preference key: {:?}", config.storage_key);
    log::info!(
        "Stylesheets: dark={} light={}",
        config.theme_assets.dark_stylesheet,
        config.theme_assets.light_stylesheet
    );
    log::info!("Contact triggers: {}", config.selectors.contact_triggers.join(", "));

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
