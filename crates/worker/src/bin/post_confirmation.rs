use arena_db::{StorageConfig, Stores};
use aws_lambda_events::event::cognito::CognitoEventUserPoolsPostConfirmation;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    arena_worker::telemetry::init();

    let storage = StorageConfig::from_env();
    let sdk_config = aws_config::load_from_env().await;
    let stores = Stores::connect(&storage, &sdk_config).await?;
    let players = stores.players.as_ref();

    run(service_fn(
        move |event: LambdaEvent<CognitoEventUserPoolsPostConfirmation>| async move {
            Ok::<_, Error>(arena_worker::post_confirmation::handle(players, event.payload).await?)
        },
    ))
    .await
}
