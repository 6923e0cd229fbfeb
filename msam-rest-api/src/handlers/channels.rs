//! Channel endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use tracing::{error, info};

use crate::{
    context::ChannelsContext,
    errors::RestResult,
    extractors::EncodedChannelName,
    models::{ChannelResponse, Message},
};

/// List the known channel names
pub async fn list_channels(State(ctx): State<ChannelsContext>) -> RestResult<impl IntoResponse> {
    info!("Listing channels");

    let names = ctx.registry.list_channels().await.map_err(|e| {
        error!("Failed to list channels: {}", e);
        e
    })?;

    Ok(Json(names))
}

/// Node records of one channel
pub async fn get_channel_nodes(
    State(ctx): State<ChannelsContext>,
    EncodedChannelName(name): EncodedChannelName,
) -> impl IntoResponse {
    info!("Getting nodes of channel {}", name);

    ctx.registry.get_channel_nodes(&name).await
}

/// Add node ids to a channel
pub async fn set_channel_nodes(
    State(ctx): State<ChannelsContext>,
    EncodedChannelName(name): EncodedChannelName,
    body: Result<Json<Vec<String>>, JsonRejection>,
) -> impl IntoResponse {
    info!("Setting nodes of channel {}", name);

    match body {
        Ok(Json(node_ids)) => ctx.registry.set_channel_nodes(&name, &node_ids).await,
        Err(rejection) => {
            error!("Rejected body for channel {}: {}", name, rejection.body_text());
            ChannelResponse::<Message>::exception(rejection.body_text())
        }
    }
}

/// Delete a channel and all of its records
pub async fn delete_channel_nodes(
    State(ctx): State<ChannelsContext>,
    EncodedChannelName(name): EncodedChannelName,
) -> impl IntoResponse {
    info!("Deleting channel {}", name);

    ctx.registry.delete_channel_nodes(&name).await
}
