use port_catalog::{Country, Dataset, Pager, Port, PortCatalog, PortRepository};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn port(id: u32, name: &str) -> Port {
    Port {
        id,
        name: name.to_string(),
    }
}

fn fixture() -> Dataset {
    Dataset::new(vec![
        Country {
            id: 1,
            name: "Netherlands".to_string(),
            ports: vec![port(1, "Rotterdam"), port(2, "Amsterdam")],
        },
        Country {
            id: 2,
            name: "Germany".to_string(),
            ports: vec![port(3, "Hamburg"), port(4, "Bremerhaven")],
        },
    ])
}

fn catalog() -> PortCatalog {
    PortCatalog::with_delay(fixture(), Duration::from_millis(1000))
}

#[tokio::test(start_paused = true)]
async fn deferred_read_resolves_after_the_delay() {
    let catalog = catalog();
    let started = Instant::now();

    let ports = catalog.ports_deferred(None).await;

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(ports.len(), 4);
    assert_eq!(ports[0].country.name, "Netherlands");
}

#[tokio::test(start_paused = true)]
async fn concurrent_deferred_reads_share_one_result() {
    let catalog = catalog();

    let first = catalog.ports_deferred(None);
    let second = catalog.ports_deferred(None);

    let (a, b) = tokio::join!(first, second);
    assert!(Arc::ptr_eq(&a, &b));
}

#[tokio::test(start_paused = true)]
async fn in_flight_slot_ignores_the_pager() {
    let catalog = catalog();

    // The second caller asks for a different page but joins the first
    // caller's computation anyway.
    let first = catalog.ports_deferred(Some(Pager::new(1, 2)));
    let second = catalog.ports_deferred(Some(Pager::new(2, 2)));

    let (a, b) = tokio::join!(first, second);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.len(), 2);
    assert_eq!(a[0].port.name, "Rotterdam");
}

#[tokio::test(start_paused = true)]
async fn handle_stays_pending_until_the_delay_elapses() {
    let catalog = catalog();

    let mut handle = tokio_test::task::spawn(catalog.ports_deferred(None));
    tokio_test::assert_pending!(handle.poll());

    tokio::time::advance(Duration::from_millis(1000)).await;
    let ports = tokio_test::assert_ready!(handle.poll());
    assert_eq!(ports.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn next_call_after_delivery_recomputes() {
    let catalog = catalog();

    let first = catalog.ports_deferred(None).await;
    assert_eq!(first.len(), 4);

    catalog.add_port("Wilhelmshaven", 2).unwrap();

    let second = catalog.ports_deferred(None).await;
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn add_port_deferred_mutates_then_waits() {
    let catalog = catalog();
    let started = Instant::now();

    let added = catalog.add_port_deferred("Zeebrugge", 2).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(added.port.id, 5);
    assert_eq!(catalog.ports(None).len(), 5);
}

#[tokio::test(start_paused = true)]
async fn add_port_deferred_fails_fast_on_unknown_country() {
    let catalog = catalog();
    let started = Instant::now();

    assert!(catalog.add_port_deferred("Nowhere", 99).await.is_err());
    // The delay only applies to successful mutations.
    assert!(started.elapsed() < Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn delete_port_deferred_round_trip() {
    let catalog = catalog();
    let original = catalog.countries(None);

    let added = catalog.add_port_deferred("Eemshaven", 1).await.unwrap();
    let removed = catalog.delete_port_deferred(&added).await.unwrap();

    assert!(removed);
    assert_eq!(catalog.countries(None), original);
}

#[tokio::test(start_paused = true)]
async fn repository_trait_covers_the_deferred_surface() {
    let repo: Arc<dyn PortRepository> = Arc::new(catalog());

    let ports = repo.list_ports(None).await.unwrap();
    assert_eq!(ports.len(), 4);

    let added = repo.create_port("Thessaloniki", 1).await.unwrap();
    assert_eq!(added.port.id, 5);

    assert!(repo.remove_port(&added).await.unwrap());
    assert_eq!(repo.list_ports(None).await.unwrap().len(), 4);
}
