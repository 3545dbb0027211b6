use async_trait::async_trait;
use order_aggregator::aggregator::{AggregatorError, AggregatorService};
use order_aggregator::lookup::{LookupError, OfferLookup, OrderLookup, ProductLookup};
use order_aggregator::model::{
    EnrichedOrder, Offer, OfferCondition, OfferId, Order, OrderId, Product, ProductId, SellerId,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

// --- Test doubles ---

/// A lookup that always gives the same answer and counts its calls.
struct Stub<T> {
    response: Result<T, LookupError>,
    delay: Duration,
    panics: bool,
    barrier: Option<Arc<Barrier>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl<T: Clone> Stub<T> {
    fn ok(value: T) -> Self {
        Self::with_response(Ok(value))
    }

    fn failing(error: LookupError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<T, LookupError>) -> Self {
        Self {
            response,
            delay: Duration::ZERO,
            panics: false,
            barrier: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    fn meeting_at(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn answer(&self) -> Result<T, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.panics {
            panic!("lookup exploded");
        }
        self.response.clone()
    }
}

#[async_trait]
impl OrderLookup for Stub<Order> {
    async fn fetch_order(&self, _seller_id: SellerId) -> Result<Order, LookupError> {
        self.answer().await
    }
}

#[async_trait]
impl OfferLookup for Stub<Offer> {
    async fn fetch_offer(&self, _offer_id: OfferId) -> Result<Offer, LookupError> {
        self.answer().await
    }
}

#[async_trait]
impl ProductLookup for Stub<Product> {
    async fn fetch_product(&self, _product_id: ProductId) -> Result<Product, LookupError> {
        self.answer().await
    }
}

// --- Fixtures ---

fn order() -> Order {
    Order::new(OrderId(7), SellerId(7), OfferId(100), ProductId(200))
}

fn offer() -> Offer {
    Offer::new(OfferId(100), OfferCondition::Available)
}

fn product() -> Product {
    Product::new(ProductId(200), "Widget")
}

fn unavailable() -> LookupError {
    LookupError::Unavailable("connection refused".to_string())
}

fn service(
    orders: &Arc<Stub<Order>>,
    offers: &Arc<Stub<Offer>>,
    products: &Arc<Stub<Product>>,
) -> AggregatorService {
    AggregatorService::new(orders.clone(), offers.clone(), products.clone(), 16)
}

// --- Merge table scenarios ---

#[tokio::test]
async fn test_enrich_all_lookups_succeed() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()));
    let products = Arc::new(Stub::ok(product()));

    let enriched = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap();

    assert_eq!(enriched.order_id(), OrderId(7));
    assert_eq!(enriched.offer_id(), Some(OfferId(100)));
    assert_eq!(enriched.offer_condition(), OfferCondition::Available);
    assert_eq!(enriched.product_id(), Some(ProductId(200)));
    assert_eq!(enriched.product_title(), Some("Widget"));
    assert_eq!((orders.calls(), offers.calls(), products.calls()), (1, 1, 1));
}

#[tokio::test]
async fn test_enrich_offer_fails() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::failing(unavailable()));
    let products = Arc::new(Stub::ok(product()));

    let enriched = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap();

    assert_eq!(enriched.order_id(), OrderId(7));
    assert_eq!(enriched.offer_id(), None);
    assert_eq!(enriched.legacy_offer_id(), -1);
    assert_eq!(enriched.offer_condition(), OfferCondition::Unknown);
    assert_eq!(enriched.product_id(), Some(ProductId(200)));
    assert_eq!(enriched.product_title(), Some("Widget"));
}

#[tokio::test]
async fn test_enrich_product_fails() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()));
    let products = Arc::new(Stub::failing(LookupError::not_found(ProductId(200))));

    let enriched = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap();

    assert_eq!(enriched.offer_id(), Some(OfferId(100)));
    assert_eq!(enriched.offer_condition(), OfferCondition::Available);
    assert_eq!(enriched.product_id(), None);
    assert_eq!(enriched.legacy_product_id(), EnrichedOrder::MISSING_ID);
    assert_eq!(enriched.product_title(), None);
}

#[tokio::test]
async fn test_enrich_both_dependents_fail() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::failing(LookupError::not_found(OfferId(100))));
    let products = Arc::new(Stub::failing(unavailable()));

    let enriched = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap();

    assert_eq!(enriched.order_id(), OrderId(7));
    assert_eq!(enriched.legacy_offer_id(), -1);
    assert_eq!(enriched.offer_condition(), OfferCondition::Unknown);
    assert_eq!(enriched.legacy_product_id(), -1);
    assert_eq!(enriched.product_title(), None);
    assert_eq!((offers.calls(), products.calls()), (1, 1));
}

// --- Fatal path ---

#[tokio::test]
async fn test_order_failure_is_fatal_and_skips_dependents() {
    let orders = Arc::new(Stub::<Order>::failing(LookupError::not_found(SellerId(99))));
    let offers = Arc::new(Stub::ok(offer()));
    let products = Arc::new(Stub::ok(product()));

    let result = service(&orders, &offers, &products)
        .enrich(SellerId(99))
        .await;

    match result {
        Err(AggregatorError::OrderLookup { seller_id, source }) => {
            assert_eq!(seller_id, SellerId(99));
            assert!(source.is_not_found());
        }
        other => panic!("Expected OrderLookup error, got {other:?}"),
    }
    assert_eq!(offers.calls(), 0);
    assert_eq!(products.calls(), 0);
}

#[tokio::test]
async fn test_order_service_down_is_fatal() {
    let orders = Arc::new(Stub::<Order>::failing(unavailable()));
    let offers = Arc::new(Stub::ok(offer()));
    let products = Arc::new(Stub::ok(product()));

    let error = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("seller_7"));
    assert!(error.to_string().contains("connection refused"));
    assert_eq!(offers.calls() + products.calls(), 0);
}

// --- Concurrency & independence ---

#[tokio::test]
async fn test_dependent_lookups_run_concurrently() {
    // Each lookup waits for the other at the barrier; run sequentially they would deadlock.
    let barrier = Arc::new(Barrier::new(2));
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()).meeting_at(barrier.clone()));
    let products = Arc::new(Stub::ok(product()).meeting_at(barrier));

    let service = service(&orders, &offers, &products);
    let enriched = tokio::time::timeout(Duration::from_secs(5), service.enrich(SellerId(7)))
        .await
        .expect("dependent lookups did not overlap")
        .unwrap();

    assert!(enriched.is_complete());
}

#[tokio::test]
async fn test_slow_failing_product_does_not_drop_offer() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()));
    let products = Arc::new(Stub::failing(unavailable()).delayed(Duration::from_millis(100)));

    let enriched = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap();

    assert_eq!(enriched.offer_id(), Some(OfferId(100)));
    assert_eq!(enriched.offer_condition(), OfferCondition::Available);
    assert_eq!(enriched.product_id(), None);
    // The join waited for the slow product lookup to finish.
    assert_eq!(products.calls(), 1);
}

#[tokio::test]
async fn test_join_waits_for_slow_successful_lookup() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::failing(unavailable()));
    let products = Arc::new(Stub::ok(product()).delayed(Duration::from_millis(100)));

    let enriched = service(&orders, &offers, &products)
        .enrich(SellerId(7))
        .await
        .unwrap();

    assert_eq!(enriched.product_title(), Some("Widget"));
}

#[tokio::test]
async fn test_panicking_lookup_is_absorbed() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()).panicking());
    let products = Arc::new(Stub::ok(product()));

    let aggregator = service(&orders, &offers, &products);
    let enriched = aggregator.enrich(SellerId(7)).await.unwrap();

    assert_eq!(enriched.offer_id(), None);
    assert_eq!(enriched.offer_condition(), OfferCondition::Unknown);
    assert_eq!(enriched.product_title(), Some("Widget"));
    // The panicked task released its permit.
    assert_eq!(aggregator.available_lookup_permits(), 16);
}

#[tokio::test]
async fn test_enrich_is_idempotent() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()));
    let products = Arc::new(Stub::failing(unavailable()));
    let aggregator = service(&orders, &offers, &products);

    let first = aggregator.enrich(SellerId(7)).await.unwrap();
    let second = aggregator.enrich(SellerId(7)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!((orders.calls(), offers.calls(), products.calls()), (2, 2, 2));
}

#[tokio::test]
async fn test_lookups_are_bounded_by_permits() {
    let orders = Arc::new(Stub::ok(order()));
    let offers = Arc::new(Stub::ok(offer()).delayed(Duration::from_millis(20)));
    let products = Arc::new(Stub::ok(product()).delayed(Duration::from_millis(20)));
    let aggregator = AggregatorService::new(orders.clone(), offers.clone(), products.clone(), 2);

    let mut handles = vec![];
    for _ in 0..6 {
        let aggregator = aggregator.clone();
        handles.push(tokio::spawn(async move { aggregator.enrich(SellerId(7)).await }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_complete());
    }

    assert_eq!(offers.calls(), 6);
    assert_eq!(products.calls(), 6);
    assert!(offers.max_in_flight() + products.max_in_flight() <= 4);
    assert!(offers.max_in_flight() <= 2 && products.max_in_flight() <= 2);
    assert_eq!(aggregator.available_lookup_permits(), 2);
}
