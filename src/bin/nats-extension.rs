use sentinel_greeter::utils::{logger, validation::Validate};
use sentinel_greeter::{ExtensionAgent, ExtensionConfig, ExtensionsApiClient, NatsPublisher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_lambda_logger();

    let config = ExtensionConfig::from_env()?;
    config.validate()?;

    let publisher = NatsPublisher::connect(&config.peer_nats_url).await?;

    let agent = ExtensionAgent::new(
        ExtensionsApiClient::new(&config.runtime_api),
        publisher,
        config.extension_name.clone(),
        config.publish_subject.clone(),
        config.sentinel_path.clone(),
    );

    if let Err(e) = agent.run().await {
        tracing::error!(
            "Extension stopped: {} (Category: {:?}). {}",
            e,
            e.category(),
            e.recovery_suggestion()
        );
        return Err(e.into());
    }

    tracing::info!("Extension exited after SHUTDOWN");
    Ok(())
}
