//! Subscribe request command.

use super::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use lattice_core::PublicKey;
use lattice_protocol::SubscribeRequest;

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Args, Debug, Clone, Default)]
pub struct SubscribeArgs {
    /// Account address to receive updates for
    #[arg(long, conflicts_with = "uuid", required_unless_present = "uuid")]
    account: Option<String>,

    /// Session id issued by the service
    #[arg(long)]
    uuid: Option<String>,

    /// Display currency [default: config, then USD]
    #[arg(long)]
    currency: Option<String>,

    /// Push-notification token [default: config]
    #[arg(long)]
    fcm_token: Option<String>,
}

pub fn run(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let request = build_request(args, ctx)?;
    println!("{}", request.to_json()?);
    Ok(())
}

fn build_request(args: SubscribeArgs, ctx: &Context) -> Result<SubscribeRequest> {
    if let Some(account) = &args.account {
        let network = ctx.network()?;
        PublicKey::from_address(network, account)
            .with_context(|| format!("Invalid {network} address: {account}"))?;
    }

    let currency = args
        .currency
        .or_else(|| ctx.config.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
    let fcm_token = args.fcm_token.or_else(|| ctx.config.fcm_token.clone());

    let request = SubscribeRequest::from_parts(args.account, currency, args.uuid, fcm_token)?;
    tracing::debug!(subscriber = ?request.subscriber(), "built subscribe request");
    Ok(request)
}
