use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use coinfolio_core::wallets::NewWallet;

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{AddWalletRequest, AddWalletResponse, MessageResponse, PortfolioEntry};

/// List the tracked wallets enriched with live fiat balances.
async fn get_portfolios(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<PortfolioEntry>>> {
    let wallets = state.wallet_service.list_wallets()?;
    let portfolio = state.portfolio_service.enrich(wallets).await?;

    // Per-entry failures are logged, not surfaced in the body; the
    // affected entries come back without a balance.
    for warning in &portfolio.warnings {
        tracing::warn!(
            "enrichment warning for wallet {}: {}",
            warning.id,
            warning.message
        );
    }

    Ok(Json(portfolio.entries.into_iter().map(Into::into).collect()))
}

/// Register a new wallet and echo the full updated list.
async fn add_wallet(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddWalletRequest>,
) -> ApiResult<Json<AddWalletResponse>> {
    let record = state.wallet_service.add_wallet(NewWallet {
        name: body.name,
        address: body.address,
        asset_kind: Default::default(),
    })?;

    let portfolios = state
        .wallet_service
        .list_wallets()?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(AddWalletResponse {
        portfolios,
        message: format!("Address {} received and processed.", record.address),
    }))
}

/// Remove a wallet from the registry.
async fn delete_wallet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.wallet_service.remove_wallet(&id)?;
    Ok(Json(MessageResponse {
        message: format!("Wallet with ID {id} deleted."),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolios", get(get_portfolios))
        .route("/addWallet", post(add_wallet))
        .route("/deleteWallet/{id}", delete(delete_wallet))
}
