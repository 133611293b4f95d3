//! End-to-end guest cart flows over both storage backends.

#![allow(clippy::unwrap_used)]

use pomelo_cart::{CartStore, FileStorage, MemoryStorage};
use pomelo_core::{CartLine, CreateOrderRequest, Price, ProductId};
use rust_decimal::Decimal;

fn line(product_id: i32, name: &str, price: &str, quantity: u32) -> CartLine {
    CartLine {
        product_id: ProductId::new(product_id),
        product_name: name.to_owned(),
        product_image: None,
        price: Price::new(price),
        quantity,
    }
}

#[test]
fn repeat_adds_merge_into_one_line() {
    let store = CartStore::new(MemoryStorage::new());

    store.add(line(1, "A", "10.00", 2)).unwrap();
    store.add(line(1, "A", "10.00", 3)).unwrap();

    let lines = store.read();
    assert_eq!(lines.len(), 1);
    let only = lines.first().unwrap();
    assert_eq!(only.product_id, ProductId::new(1));
    assert_eq!(only.quantity, 5);

    assert_eq!(store.count(), 5);
    assert_eq!(store.total(), Decimal::new(5000, 2));
}

#[test]
fn quantity_floor_drops_the_line() {
    let store = CartStore::new(MemoryStorage::new());
    store.add(line(1, "A", "10.00", 2)).unwrap();
    store.add(line(2, "B", "5.00", 1)).unwrap();

    assert_eq!(store.total(), Decimal::new(2500, 2));

    store.update_quantity(ProductId::new(1), 0).unwrap();

    let lines = store.read();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.first().unwrap().product_id, ProductId::new(2));
}

#[test]
fn cart_survives_reopening_file_storage() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = CartStore::new(FileStorage::new(dir.path()));
        store.add(line(1, "Tote", "12.50", 2)).unwrap();
        store.add(line(2, "Mug", "5.00", 1)).unwrap();
    }

    // A fresh store over the same directory sees the same cart.
    let reopened = CartStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.count(), 3);
    assert_eq!(reopened.total(), Decimal::new(3000, 2));

    reopened.clear().unwrap();
    let again = CartStore::new(FileStorage::new(dir.path()));
    assert!(again.read().is_empty());
}

#[test]
fn corrupt_file_reads_as_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("pomelo_cart"), "definitely not json").unwrap();

    let store = CartStore::new(FileStorage::new(dir.path()));
    assert!(store.read().is_empty());

    // The next add replaces the corrupt blob with a valid cart.
    store.add(line(1, "Tote", "12.50", 1)).unwrap();
    assert_eq!(store.count(), 1);
}

#[test]
fn checkout_maps_cart_onto_order_request() {
    let store = CartStore::new(MemoryStorage::new());
    store.add(line(1, "Tote", "12.50", 2)).unwrap();
    store.add(line(2, "Mug", "5.00", 1)).unwrap();

    let request = CreateOrderRequest::from_cart(
        &store.read(),
        "Ada Lovelace",
        "555-0101",
        "1 Orchard Lane",
        None,
    );

    assert_eq!(request.items.len(), 2);
    assert_eq!(request.items.first().unwrap().product_id, ProductId::new(1));
    assert_eq!(request.items.first().unwrap().quantity, 2);

    // Order placed: the cart is cleared.
    store.clear().unwrap();
    assert_eq!(store.count(), 0);
}
