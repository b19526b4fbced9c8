use arena_db::{StorageConfig, Stores};
use arena_events::TicketIngestor;
use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    arena_worker::telemetry::init();

    let storage = StorageConfig::from_env();
    let sdk_config = aws_config::load_from_env().await;
    let stores = Stores::connect(&storage, &sdk_config).await?;
    let ingestor = TicketIngestor::new(stores.tickets);
    let ingestor = &ingestor;

    run(service_fn(move |event: LambdaEvent<SnsEvent>| async move {
        arena_worker::matchmaking_events::handle(ingestor, event.payload).await?;
        Ok::<(), Error>(())
    }))
    .await
}
