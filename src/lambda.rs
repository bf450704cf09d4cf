use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use sentinel_greeter::utils::{logger, validation::Validate};
use sentinel_greeter::{FsProbe, GreetingHandler, HandlerConfig};
use serde_json::Value;

// The payload is ignored; the response is the greeting as a JSON string.
async fn function_handler(
    handler: &GreetingHandler<FsProbe>,
    _event: LambdaEvent<Value>,
) -> Result<String, Error> {
    Ok(handler.invoke().await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = HandlerConfig::from_env()?;
    config.validate()?;
    tracing::info!("Greeting handler configured: {:?}", config);

    let handler = GreetingHandler::new(FsProbe, config.sentinel_path.clone(), config.delay());
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
