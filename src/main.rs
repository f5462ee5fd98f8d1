use anyhow::{Error, Result};
use tokio::sync::broadcast;
use tracing::{info, warn};
use whatsapp_service::{
    config::{Config, load_template_request},
    models::response::SendMessageResponse,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(config.log_format)?;

    let request = load_template_request()?;
    let http_client = config.http_client()?;
    let sender = config.sender();

    info!(
        phone_number_id = %config.whatsapp_phone_number_id,
        base_url = %sender.base_url(),
        "Configuration validated"
    );

    let (cancel_tx, mut cancel_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, cancelling template send");
            let _ = cancel_tx.send(());
        }
    });

    let body = sender
        .send(
            Some(&http_client),
            &config.whatsapp_phone_number_id,
            &config.whatsapp_access_token,
            &request,
            &mut cancel_rx,
        )
        .await?;

    match SendMessageResponse::parse(&body) {
        Ok(parsed) => info!(
            message_id = parsed.message_id().unwrap_or("unknown"),
            "Template message accepted"
        ),
        Err(e) => warn!(error = %e, "Unrecognised send response body"),
    }

    println!("{}", body);

    Ok(())
}
