//! Endpoint catalog tests: every method hits the right path with the right query.

use coingecko_client::endpoints::{
    CoinOptions, CoinsListOptions, DerivativeExchangesOptions, DerivativesOptions, EventsOptions,
    ExchangeTickersOptions, FinanceProductsOptions, MarketsOptions, Pagination,
    StatusUpdatesOptions, TickersOptions,
};
use coingecko_client::models::{Coin, SimplePrice};
use coingecko_client::{Client, RetryStrategy, DEFAULT_VS_CURRENCY};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::builder()
        .base_url(server.uri())
        .unwrap()
        .retry_strategy(RetryStrategy::Immediate)
        .build()
        .unwrap();
    (server, client)
}

async fn stub(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn last_query(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    requests
        .last()
        .and_then(|r| r.url.query())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_prices_decode_to_simple_price() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .and(query_param("ids", "bitcoin, ethereum"))
        .and(query_param("vs_currencies", "usd, myr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bitcoin": { "usd": 48956.0, "myr": 202000.0 },
            "ethereum": { "usd": 2737.81, "myr": 11300.0 }
        })))
        .mount(&server)
        .await;

    let prices = client
        .get_prices("bitcoin, ethereum", "usd, myr")
        .await
        .unwrap()
        .decode::<SimplePrice>()
        .unwrap();

    assert_eq!(prices.data["ethereum"]["usd"], 2737.81);
    assert_eq!(last_query(&server).await, "ids=bitcoin%2C+ethereum&vs_currencies=usd%2C+myr");
}

#[tokio::test]
async fn test_exchange_rate_matches_get_prices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .and(query_param("ids", "bitcoin"))
        .and(query_param("vs_currencies", "eur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bitcoin": { "eur": 40211.5 } })))
        .expect(2)
        .mount(&server)
        .await;

    let rate = client.get_exchange_rate("bitcoin", "eur").await.unwrap();
    let prices = client.get_prices("bitcoin", "eur").await.unwrap();

    assert_eq!(rate.data, prices.data);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url, requests[1].url);
}

#[tokio::test]
async fn test_hourly_history_within_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "30"))
        .and(query_param_is_missing("interval"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": [[1620550200000u64, 58000.0]] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .get_hourly_historical_prices("bitcoin", 30, "usd")
        .await
        .unwrap();
    assert_eq!(response.data["prices"][0][1], 58000.0);
}

#[tokio::test]
async fn test_hourly_history_at_threshold_stays_hourly() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("days", "90"))
        .and(query_param_is_missing("interval"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .get_hourly_historical_prices("bitcoin", 90, "usd")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_hourly_history_beyond_window_falls_back_to_daily() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "91"))
        .and(query_param("interval", "daily"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": [[1, 2.0]] })))
        .expect(2)
        .mount(&server)
        .await;

    let hourly = client
        .get_hourly_historical_prices("bitcoin", 91, DEFAULT_VS_CURRENCY)
        .await
        .unwrap();
    let daily = client
        .get_daily_historical_prices("bitcoin", 91, "usd")
        .await
        .unwrap();

    assert_eq!(hourly.data, daily.data);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url, requests[1].url);
}

#[tokio::test]
async fn test_price_history_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/coins/bitcoin/history", json!({ "id": "bitcoin" })).await;
    client
        .get_historical_price_on_date("bitcoin", "30-12-2017")
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "date=30-12-2017");

    stub(&server, "/coins/bitcoin/ohlc", json!([[1, 2, 3, 4, 5]])).await;
    client.get_ohlc("bitcoin", 7, "eur").await.unwrap();
    assert_eq!(last_query(&server).await, "days=7&vs_currency=eur");

    stub(&server, "/coins/litecoin/market_chart", json!({ "prices": [] })).await;
    client
        .get_minutely_historical_prices("litecoin", "usd")
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "days=1&vs_currency=usd");

    stub(&server, "/simple/supported_vs_currencies", json!(["usd", "eur"])).await;
    let currencies = client.supported_currencies().await.unwrap();
    assert_eq!(currencies.data[0], "usd");
}

#[tokio::test]
async fn test_coin_decodes_to_typed_model() {
    let (server, client) = setup().await;

    stub(
        &server,
        "/coins/bitcoin",
        json!({
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "market_data": { "current_price": { "usd": 48956.0 } }
        }),
    )
    .await;

    let options = CoinOptions {
        tickers: Some(false),
        developer_data: Some(false),
        ..Default::default()
    };
    let coin = client
        .coin("bitcoin", &options)
        .await
        .unwrap()
        .decode::<Coin>()
        .unwrap();

    assert_eq!(coin.data.symbol, "btc");
    assert_eq!(coin.data.price_in("usd"), Some(48956.0));
    assert_eq!(last_query(&server).await, "developer_data=false&tickers=false");
}

#[tokio::test]
async fn test_coin_listing_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/coins/list", json!([{ "id": "01coin", "symbol": "zoc", "name": "01coin" }])).await;
    let list = client
        .coins_list(&CoinsListOptions {
            include_platform: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(list.data[0]["symbol"], "zoc");
    assert_eq!(last_query(&server).await, "include_platform=true");

    stub(&server, "/coins/bitcoin/tickers", json!({ "name": "Bitcoin", "tickers": [] })).await;
    client
        .tickers(
            "bitcoin",
            &TickersOptions {
                exchange_ids: vec!["binance".to_string(), "gdax".to_string()],
                depth: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "depth=true&exchange_ids=binance%2Cgdax");

    stub(&server, "/coins/markets", json!([{ "id": "bitcoin" }])).await;
    client
        .markets(
            "bitcoin,ethereum",
            "gbp",
            &MarketsOptions {
                per_page: Some(2),
                price_change_percentage: vec!["1h".to_string(), "24h".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        last_query(&server).await,
        "ids=bitcoin%2Cethereum&per_page=2&price_change_percentage=1h%2C24h&vs_currency=gbp"
    );
}

#[tokio::test]
async fn test_exchange_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/exchanges", json!([{ "id": "binance" }])).await;
    client.exchanges(&Pagination::new(1, 2)).await.unwrap();
    assert_eq!(last_query(&server).await, "page=2&per_page=1");

    stub(&server, "/exchanges/binance", json!({ "name": "Binance" })).await;
    let exchange = client.exchange("binance").await.unwrap();
    assert_eq!(exchange.data["name"], "Binance");
    assert_eq!(last_query(&server).await, "");

    stub(&server, "/exchanges/list", json!([{ "id": "aave", "name": "Aave" }])).await;
    client.exchanges_list().await.unwrap();

    stub(&server, "/exchanges/binance/tickers", json!({ "name": "Binance", "tickers": [] })).await;
    client
        .exchange_tickers(
            "binance",
            &ExchangeTickersOptions {
                coin_ids: vec!["bitcoin".to_string()],
                order: Some("volume_desc".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "coin_ids=bitcoin&order=volume_desc");

    stub(&server, "/exchanges/binance/status_updates", json!({ "status_updates": [] })).await;
    client
        .exchange_status_updates("binance", &Pagination::default())
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "");

    stub(&server, "/exchanges/binance/volume_chart", json!([[1620550200000.0, "1005476.26"]])).await;
    client.exchange_volume_chart("binance", 1).await.unwrap();
    assert_eq!(last_query(&server).await, "days=1");
}

#[tokio::test]
async fn test_category_and_index_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/coins/categories/list", json!([{ "category_id": "analytics", "name": "Analytics" }])).await;
    let list = client.categories_list().await.unwrap();
    assert_eq!(list.data[0]["category_id"], "analytics");

    stub(&server, "/coins/categories", json!([{ "id": "stablecoins" }])).await;
    client.categories().await.unwrap();

    stub(&server, "/indexes", json!([{ "id": "BTC" }])).await;
    client
        .indexes(&Pagination {
            per_page: Some(5),
            page: None,
        })
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "per_page=5");

    stub(&server, "/indexes/list", json!([{ "id": "BTC", "name": "CME Bitcoin Futures BTC" }])).await;
    client.indexes_list().await.unwrap();

    stub(&server, "/indexes/cme_futures/btc", json!({ "name": "CME Bitcoin Futures BTC" })).await;
    let index = client
        .index("cme_futures", "btc", &Pagination::new(1, 1))
        .await
        .unwrap();
    assert_eq!(index.data["name"], "CME Bitcoin Futures BTC");
    assert_eq!(last_query(&server).await, "page=1&per_page=1");
}

#[tokio::test]
async fn test_derivative_endpoints() {
    let (server, client) = setup().await;
    let unexpired = DerivativesOptions {
        include_tickers: Some("unexpired".to_string()),
    };

    stub(&server, "/derivatives", json!([{ "symbol": "BTCUSDT" }])).await;
    client.derivatives(&unexpired).await.unwrap();
    assert_eq!(last_query(&server).await, "include_tickers=unexpired");

    stub(&server, "/derivatives/exchanges", json!([{ "id": "binance_futures" }])).await;
    client
        .derivative_exchanges(&DerivativeExchangesOptions {
            order: Some("name_asc".to_string()),
            per_page: Some(1),
            page: None,
        })
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "order=name_asc&per_page=1");

    stub(&server, "/derivatives/exchanges/binance_futures", json!({ "name": "Binance (Futures)" })).await;
    client
        .derivative_exchange("binance_futures", &DerivativesOptions::default())
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "");

    stub(&server, "/derivatives/exchanges/list", json!([{ "id": "ftx" }])).await;
    client.derivative_exchanges_list().await.unwrap();
}

#[tokio::test]
async fn test_finance_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/finance_platforms", json!([{ "name": "Binance Staking" }])).await;
    client.finance_platforms(&Pagination::new(3, 1)).await.unwrap();
    assert_eq!(last_query(&server).await, "page=1&per_page=3");

    stub(&server, "/finance_products", json!([{ "identifier": "XTZ001" }])).await;
    client
        .finance_products(&FinanceProductsOptions {
            start_at: Some(1_600_000_000),
            end_at: Some(1_700_000_000),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        last_query(&server).await,
        "end_at=1700000000&start_at=1600000000"
    );
}

#[tokio::test]
async fn test_global_and_status_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/ping", json!({ "gecko_says": "(V3) To the Moon!" })).await;
    client.ping().await.unwrap();

    stub(&server, "/global", json!({ "data": { "active_cryptocurrencies": 7361 } })).await;
    let global = client.global().await.unwrap();
    assert_eq!(global.data["data"]["active_cryptocurrencies"], 7361);

    stub(&server, "/global/decentralized_finance_defi", json!({ "data": { "top_coin_name": "Uniswap" } })).await;
    client.global_defi().await.unwrap();

    stub(&server, "/search/trending", json!({ "coins": [], "exchanges": [] })).await;
    client.trending().await.unwrap();

    stub(&server, "/status_updates", json!({ "status_updates": [] })).await;
    client
        .status_updates(&StatusUpdatesOptions {
            project_type: Some("coin".to_string()),
            per_page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(last_query(&server).await, "per_page=1&project_type=coin");
}

#[tokio::test]
async fn test_event_endpoints() {
    let (server, client) = setup().await;

    stub(&server, "/events", json!({ "data": [], "count": 0 })).await;
    client
        .events(&EventsOptions {
            event_type: Some("Conference".to_string()),
            upcoming_events_only: Some(false),
            from_date: Some("2021-01-01".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        last_query(&server).await,
        "from_date=2021-01-01&type=Conference&upcoming_events_only=false"
    );

    stub(&server, "/events/countries", json!({ "data": [{ "country": "Malaysia", "code": "MY" }], "count": 1 })).await;
    client.event_countries().await.unwrap();

    stub(&server, "/events/types", json!({ "data": ["Event", "Conference", "Meetup"], "count": 3 })).await;
    let types = client.event_types().await.unwrap();
    assert_eq!(types.data["count"], 3);
}

#[tokio::test]
async fn test_identifiers_are_escaped_in_paths() {
    let (server, client) = setup().await;

    stub(&server, "/coins/weird%2Fid/tickers", json!({ "tickers": [] })).await;
    client
        .tickers("weird/id", &TickersOptions::default())
        .await
        .unwrap();
}
