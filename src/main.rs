//! Scripted demo session: browse the catalog, fill the cart and wishlist,
//! sign in, and check out. Run with `RUST_LOG=info cargo run`.

use std::error::Error;

use tracing::info;

use storefront::catalog::SortKey;
use storefront::checkout::CheckoutForm;
use storefront::clients::StoreHandle;
use storefront::lifecycle::{setup_tracing, Storefront};
use storefront::model::OrderPayload;
use storefront::routes::Route;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let storefront = Storefront::new();

    // Browse the shop
    navigate(Route::Shop);
    for product in storefront.catalog.sorted(SortKey::Rating) {
        info!(
            id = product.id,
            name = %product.name,
            price = product.price,
            rating = product.rating,
            "On shelf"
        );
    }

    // Product detail: two packs of bhujia, one kaju katli
    let bhujia = storefront
        .catalog
        .get(1)
        .cloned()
        .ok_or("sample catalog is missing product 1")?;
    let kaju = storefront
        .catalog
        .get(11)
        .cloned()
        .ok_or("sample catalog is missing product 11")?;

    navigate(Route::Product(bhujia.id));
    storefront.cart_client.add_to_cart(bhujia.clone()).await?;
    storefront.cart_client.add_to_cart(bhujia).await?;
    storefront.wishlist_client.add_to_wishlist(kaju.clone()).await?;

    navigate(Route::Product(kaju.id));
    storefront.cart_client.add_to_cart(kaju).await?;

    navigate(Route::Cart);
    let count = storefront.cart_client.item_count().await?;
    let subtotal = storefront.cart_client.subtotal().await?;
    info!(count, subtotal, "Cart ready for checkout");

    // Sign in (fake, 1s simulated latency)
    navigate(Route::Login);
    let user = storefront
        .auth_client
        .login("priya@example.com", "hunter2")
        .await?;
    info!(name = %user.name, "Welcome back");

    // Check out (3s simulated processing)
    navigate(Route::Checkout);
    let form = CheckoutForm {
        first_name: "Priya".into(),
        last_name: "Sharma".into(),
        email: user.email.clone(),
        phone: "9876543210".into(),
        address: "42 MG Road".into(),
        city: "Pune".into(),
        state: "Maharashtra".into(),
        pincode: "411001".into(),
        card_number: "1234 5678 9012 3456".into(),
        expiry_date: "12/27".into(),
        cvv: "123".into(),
        card_name: "Priya Sharma".into(),
    };
    let pending = storefront.checkout().submit(form);
    let payload = pending.wait().await?;

    navigate(Route::OrderConfirmation);
    show_confirmation(Some(&payload));

    let after = storefront.cart_client.state().await?;
    info!(cart_lines = after.len(), "Cart after checkout");

    // A reload would reach the confirmation view without a payload
    show_confirmation(None);

    storefront.shutdown().await?;
    Ok(())
}

fn navigate(route: Route) {
    info!(path = %route, "Navigating");
}

fn show_confirmation(payload: Option<&OrderPayload>) {
    match payload {
        Some(order) => {
            info!(
                order_id = %order.order_id,
                items = order.items.len(),
                total = order.total,
                ship_to = %order.shipping_address.name,
                "Order confirmed"
            );
        }
        None => info!("Order not found"),
    }
}
