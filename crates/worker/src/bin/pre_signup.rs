use arena_cloud::CognitoDirectory;
use aws_lambda_events::event::cognito::CognitoEventUserPoolsPreSignup;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    arena_worker::telemetry::init();

    let sdk_config = aws_config::load_from_env().await;
    let directory = CognitoDirectory::new(aws_sdk_cognitoidentityprovider::Client::new(&sdk_config));
    let directory = &directory;

    run(service_fn(
        move |event: LambdaEvent<CognitoEventUserPoolsPreSignup>| async move {
            Ok::<_, Error>(arena_worker::pre_signup::handle(directory, event.payload).await?)
        },
    ))
    .await
}
