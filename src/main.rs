use covergen::{
    is_auth_error, CoverGenError, CredentialStore, GeminiClient, GeminiConfig, GenerationResult,
    GeneratorState, Platform, INVALID_CREDENTIAL_PROMPT,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    covergen::logger::init_with_config(
        covergen::logger::LoggerConfig::development()
            .with_level(covergen::logger::LogLevel::Debug),
    )?;

    covergen::logger::log_startup_info("covergen", env!("CARGO_PKG_VERSION"));

    // Credential bootstrap: stored value first, then GEMINI_API_KEY.
    let store = CredentialStore::from_env()?;
    let credential = match store.load() {
        Some(credential) => {
            log::info!("🔑 Using stored credential from {}", store.path().display());
            credential
        }
        None => match env::var("GEMINI_API_KEY") {
            Ok(key) => {
                match store.save(&key) {
                    Ok(()) => log::info!("🔑 Credential captured from GEMINI_API_KEY and stored"),
                    Err(e) => {
                        log::error!("❌ {}", e);
                        return Err(e.into());
                    }
                }
                key.trim().to_string()
            }
            Err(_) => {
                log::error!("❌ No credential available");
                log::error!("💡 Set GEMINI_API_KEY (starts with AIza) or write it to the credential file");
                return Err("missing Gemini API key".into());
            }
        },
    };

    let config = GeminiConfig::from_env().with_api_key(credential);
    let client = GeminiClient::new(config)?;
    log::info!("✅ Gemini client initialized (model: {})", client.model_id());

    let state = GeneratorState::new("3天赚够100万", Platform::Douyin)
        .with_sub_title("保姆级实操教程")
        .with_tags(["搞钱风", "大字报"])
        .with_custom_prompt("背景要是红色的，文字要发光，整体感觉要非常夸张");

    state.validate()?;

    log::info!("🎨 Generating cover for {}...", state.platform.id());

    let result = match client.generate_cover(&state).await {
        Ok(result) => {
            log::info!("✅ Generation successful with {}", result.model);
            result
        }
        Err(e) => {
            handle_dispatch_failure(&store, &e);
            return Err(e.into());
        }
    };

    save_artifact(&result)?;

    log::info!("✏️  Applying an edit pass to the result...");

    match client
        .edit_cover(&result.image.base64, "把标题加粗，增加发光效果")
        .await
    {
        Ok(edited) => {
            log::info!("✅ Edit successful");
            save_artifact(&edited)?;
        }
        Err(e) => {
            handle_dispatch_failure(&store, &e);
            return Err(e.into());
        }
    }

    log::info!("🎉 Done. Check the generated cover files in the current directory");
    Ok(())
}

/// Dispatch-boundary credential invalidation: a failure that looks like an
/// auth problem clears the store and asks for re-entry.
fn handle_dispatch_failure(store: &CredentialStore, error: &CoverGenError) {
    let message = error.to_string();
    log::error!("❌ {}", message);

    if is_auth_error(&message) {
        if let Err(clear_error) = store.clear() {
            log::warn!("⚠️  Failed to clear stored credential: {}", clear_error);
        }
        log::warn!("⚠️  {}", INVALID_CREDENTIAL_PROMPT);
    }
}

fn save_artifact(result: &GenerationResult) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = result.image.decode()?;
    let filename = format!("cover-{}.png", chrono::Utc::now().timestamp_millis());

    fs::write(&filename, bytes)?;
    log::info!("💾 Image saved to: {} ({})", filename, result.image.mime_type);
    Ok(())
}
