// Test cases for the balance aggregation pipeline.
#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::portfolio::{PortfolioService, PortfolioServiceTrait};
    use crate::wallets::{AssetKind, WalletRecord};
    use async_trait::async_trait;
    use coinfolio_market_data::{
        BalanceProvider, ChainBalanceSnapshot, MarketDataError, PriceProvider, PriceQuote,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::time::Duration;

    // --- Mock PriceProvider ---
    struct MockPriceProvider {
        price: Option<Decimal>,
    }

    impl MockPriceProvider {
        fn quoting(price: Decimal) -> Self {
            Self { price: Some(price) }
        }

        fn failing() -> Self {
            Self { price: None }
        }
    }

    #[async_trait]
    impl PriceProvider for MockPriceProvider {
        fn id(&self) -> &'static str {
            "MOCK_PRICE"
        }

        async fn latest_price(&self, _base_asset: &str) -> Result<PriceQuote, MarketDataError> {
            match self.price {
                Some(price) => Ok(PriceQuote::new(price)),
                None => Err(MarketDataError::PriceUnavailable {
                    message: "mock outage".to_string(),
                }),
            }
        }
    }

    // --- Mock BalanceProvider ---
    #[derive(Default)]
    struct MockBalanceProvider {
        balances: HashMap<String, ChainBalanceSnapshot>,
        failing: HashSet<String>,
        delays: HashMap<String, Duration>,
    }

    impl MockBalanceProvider {
        fn with_balance(mut self, address: &str, confirmed: i64, unconfirmed: i64) -> Self {
            self.balances.insert(
                address.to_string(),
                ChainBalanceSnapshot {
                    confirmed_sats: confirmed,
                    unconfirmed_sats: unconfirmed,
                },
            );
            self
        }

        fn with_failure(mut self, address: &str) -> Self {
            self.failing.insert(address.to_string());
            self
        }

        fn with_delay(mut self, address: &str, delay: Duration) -> Self {
            self.delays.insert(address.to_string(), delay);
            self
        }
    }

    #[async_trait]
    impl BalanceProvider for MockBalanceProvider {
        fn id(&self) -> &'static str {
            "MOCK_BALANCE"
        }

        async fn address_balance(
            &self,
            address: &str,
        ) -> Result<ChainBalanceSnapshot, MarketDataError> {
            if let Some(delay) = self.delays.get(address) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing.contains(address) {
                return Err(MarketDataError::BalanceLookupFailed {
                    address: address.to_string(),
                    message: "mock upstream error".to_string(),
                });
            }
            self.balances.get(address).copied().ok_or_else(|| {
                MarketDataError::BalanceLookupFailed {
                    address: address.to_string(),
                    message: "unknown address".to_string(),
                }
            })
        }
    }

    fn wallet(id: &str, address: &str, kind: AssetKind) -> WalletRecord {
        WalletRecord {
            id: id.to_string(),
            name: format!("wallet {id}"),
            asset_kind: kind,
            address: address.to_string(),
        }
    }

    fn service(
        price: MockPriceProvider,
        balances: MockBalanceProvider,
    ) -> PortfolioService {
        PortfolioService::new(Arc::new(price), Arc::new(balances), "bitcoin")
    }

    #[tokio::test]
    async fn test_one_coin_at_fifty_thousand_formats_exactly() {
        let balances = MockBalanceProvider::default().with_balance("addr1", 100_000_000, 0);
        let service = service(MockPriceProvider::quoting(dec!(50000.00)), balances);

        let portfolio = service
            .enrich(vec![wallet("w1", "addr1", AssetKind::Bitcoin)])
            .await
            .unwrap();

        assert_eq!(portfolio.entries.len(), 1);
        assert_eq!(
            portfolio.entries[0].balance_fiat.as_deref(),
            Some("$50000.00")
        );
        assert!(portfolio.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_output_preserves_input_order_despite_completion_order() {
        // The first wallet's lookup completes last; order must not change.
        let balances = MockBalanceProvider::default()
            .with_balance("addr1", 1_000, 0)
            .with_balance("addr2", 2_000, 0)
            .with_balance("addr3", 3_000, 0)
            .with_delay("addr1", Duration::from_millis(80))
            .with_delay("addr2", Duration::from_millis(40));
        let service = service(MockPriceProvider::quoting(dec!(100)), balances);

        let portfolio = service
            .enrich(vec![
                wallet("w1", "addr1", AssetKind::Bitcoin),
                wallet("w2", "addr2", AssetKind::Bitcoin),
                wallet("w3", "addr3", AssetKind::Bitcoin),
            ])
            .await
            .unwrap();

        let ids: Vec<_> = portfolio
            .entries
            .iter()
            .map(|e| e.wallet.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w2", "w3"]);
    }

    #[tokio::test]
    async fn test_output_length_equals_input_length_with_mixed_kinds() {
        let balances = MockBalanceProvider::default().with_balance("addr1", 5_000, 0);
        let service = service(MockPriceProvider::quoting(dec!(100)), balances);

        let portfolio = service
            .enrich(vec![
                wallet("w1", "addr1", AssetKind::Bitcoin),
                wallet("w2", "addr2", AssetKind::Other("cardano".to_string())),
                wallet("w3", "addr3", AssetKind::Other("solana".to_string())),
            ])
            .await
            .unwrap();

        assert_eq!(portfolio.entries.len(), 3);
        // Unsupported kinds pass through untouched, in place.
        assert!(portfolio.entries[1].balance_fiat.is_none());
        assert!(portfolio.entries[2].balance_fiat.is_none());
        assert!(portfolio.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_price_failure_is_terminal_even_with_good_balances() {
        let balances = MockBalanceProvider::default().with_balance("addr1", 100_000_000, 0);
        let service = service(MockPriceProvider::failing(), balances);

        let err = service
            .enrich(vec![wallet("w1", "addr1", AssetKind::Bitcoin)])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Aggregation(_)));
    }

    #[tokio::test]
    async fn test_single_lookup_failure_does_not_abort_batch() {
        let balances = MockBalanceProvider::default()
            .with_balance("addr1", 100_000_000, 0)
            .with_failure("addr2")
            .with_balance("addr3", 200_000_000, 0);
        let service = service(MockPriceProvider::quoting(dec!(50000)), balances);

        let portfolio = service
            .enrich(vec![
                wallet("w1", "addr1", AssetKind::Bitcoin),
                wallet("w2", "addr2", AssetKind::Bitcoin),
                wallet("w3", "addr3", AssetKind::Bitcoin),
            ])
            .await
            .unwrap();

        assert_eq!(portfolio.entries.len(), 3);
        assert_eq!(
            portfolio.entries[0].balance_fiat.as_deref(),
            Some("$50000.00")
        );
        // The failing entry is still present, just without a balance.
        assert_eq!(portfolio.entries[1].wallet.id, "w2");
        assert!(portfolio.entries[1].balance_fiat.is_none());
        assert_eq!(
            portfolio.entries[2].balance_fiat.as_deref(),
            Some("$100000.00")
        );

        assert_eq!(portfolio.warnings.len(), 1);
        assert_eq!(portfolio.warnings[0].id, "w2");
    }

    #[tokio::test]
    async fn test_unconfirmed_balance_contributes_to_fiat_value() {
        let balances = MockBalanceProvider::default().with_balance("addr1", 50_000_000, 50_000_000);
        let service = service(MockPriceProvider::quoting(dec!(40000)), balances);

        let portfolio = service
            .enrich(vec![wallet("w1", "addr1", AssetKind::Bitcoin)])
            .await
            .unwrap();

        assert_eq!(
            portfolio.entries[0].balance_fiat.as_deref(),
            Some("$40000.00")
        );
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_portfolio() {
        let service = service(
            MockPriceProvider::quoting(dec!(50000)),
            MockBalanceProvider::default(),
        );

        let portfolio = service.enrich(vec![]).await.unwrap();
        assert!(portfolio.entries.is_empty());
        assert!(portfolio.warnings.is_empty());
    }
}
