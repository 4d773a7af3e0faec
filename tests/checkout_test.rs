use std::time::Duration;

use storefront::checkout::{CheckoutError, CheckoutForm, Field};
use storefront::lifecycle::Storefront;

fn filled_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Priya".into(),
        last_name: "Sharma".into(),
        email: "priya@example.com".into(),
        phone: "9876543210".into(),
        address: "42 MG Road".into(),
        city: "Pune".into(),
        state: "Maharashtra".into(),
        pincode: "411001".into(),
        card_number: "1234 5678 9012 3456".into(),
        expiry_date: "12/27".into(),
        cvv: "123".into(),
        card_name: "Priya Sharma".into(),
    }
}

/// Submission with an empty required field is blocked: per-field errors are
/// reported, no payload is produced, and the cart is left non-empty.
#[tokio::test(start_paused = true)]
async fn test_blocked_submission_leaves_cart_intact() {
    let storefront = Storefront::new();
    let bhujia = storefront.catalog.get(1).cloned().unwrap();
    storefront.cart_client.add_to_cart(bhujia).await.unwrap();

    let mut form = filled_form();
    form.pincode.clear();
    form.cvv.clear();

    let err = storefront.checkout().place_order(&form).await.unwrap_err();
    match err {
        CheckoutError::Validation(errors) => {
            assert_eq!(errors.errors().len(), 2);
            assert_eq!(errors.message_for(Field::Pincode), Some("Pincode is required"));
            assert_eq!(errors.message_for(Field::Cvv), Some("CVV is required"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert_eq!(storefront.cart_client.item_count().await.unwrap(), 1);
    storefront.shutdown().await.unwrap();
}

/// Cancelling a pending order before the simulated processing elapses leaves
/// the cart untouched and records no order.
#[tokio::test(start_paused = true)]
async fn test_cancelled_checkout_preserves_the_cart() {
    let storefront = Storefront::new();
    let bhujia = storefront.catalog.get(1).cloned().unwrap();
    storefront.cart_client.add_to_cart(bhujia).await.unwrap();

    // Cancel immediately: the spawned task never reaches its commit point.
    let pending = storefront.checkout().submit(filled_form());
    pending.cancel();

    // Give the (aborted) task's slot time to settle, then check the cart.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(storefront.cart_client.item_count().await.unwrap(), 1);

    storefront.shutdown().await.unwrap();
}

/// A cancelled pending order reports `Cancelled` to a caller that still
/// awaits it.
#[tokio::test(start_paused = true)]
async fn test_cancelled_checkout_reports_cancelled() {
    let storefront = Storefront::new();
    let bhujia = storefront.catalog.get(1).cloned().unwrap();
    storefront.cart_client.add_to_cart(bhujia).await.unwrap();

    let pending = storefront.checkout().submit(filled_form());
    pending.cancel();

    let err = pending.wait().await.unwrap_err();
    assert!(matches!(err, CheckoutError::Cancelled));
    assert_eq!(storefront.cart_client.item_count().await.unwrap(), 1);

    storefront.shutdown().await.unwrap();
}

/// The fake login commits only after its delay: dropping it mid-flight
/// leaves the session signed out.
#[tokio::test(start_paused = true)]
async fn test_aborted_login_leaves_session_signed_out() {
    let storefront = Storefront::new();

    let auth = storefront.auth_client.clone();
    let login = tokio::spawn(async move { auth.login("priya@example.com", "hunter2").await });
    login.abort();
    let _ = login.await;

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!storefront.auth_client.is_authenticated().await.unwrap());

    storefront.shutdown().await.unwrap();
}

/// The flow's processing delay is configurable; the payload total follows
/// the canonical rounding rule for the submission-time subtotal.
#[tokio::test(start_paused = true)]
async fn test_totals_at_submission_time() {
    let storefront = Storefront::new();
    let sev = storefront.catalog.get(10).cloned().unwrap(); // 139

    storefront.cart_client.add_to_cart(sev).await.unwrap();

    let flow = storefront
        .checkout()
        .with_processing_delay(Duration::from_millis(50));
    let payload = flow.place_order(&filled_form()).await.unwrap();

    // subtotal 139, tax round(25.02) = 25, total 164
    assert_eq!(payload.total, 164);
    assert_eq!(payload.items.len(), 1);

    storefront.shutdown().await.unwrap();
}
