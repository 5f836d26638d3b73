use anyhow::Context;
use clap::Parser;
use professores_api::domain::ports::TeacherStore;
use professores_api::utils::{logger, validation::Validate};
use professores_api::{router, CliArgs, InMemoryStore, Server, TeacherDirectory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.resolve().context("failed to load configuration")?;

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_format);

    tracing::info!("Starting professores-api");
    if config.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = InMemoryStore::seeded();
    tracing::info!(
        "📚 Seeded {} teachers (patch semantics: {:?})",
        store.all().len(),
        config.patch_semantics
    );
    let directory = TeacherDirectory::new(store).with_patch_semantics(config.patch_semantics);

    let server = Server::bind(&config, router(directory))
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    server.run().await?;

    Ok(())
}
