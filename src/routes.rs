//! View routes: the mapping between URL paths and storefront views.
//!
//! This is the externally observable navigation surface. There is no server
//! behind it; routes are parsed and formatted purely so the views and the
//! demo can speak in paths.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ProductId;

/// A navigable view of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    /// Product detail view for one product id.
    Product(ProductId),
    Cart,
    Wishlist,
    Login,
    Signup,
    Checkout,
    OrderConfirmation,
}

/// A path that maps to no known view.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "/" => Ok(Route::Home),
            "/shop" => Ok(Route::Shop),
            "/cart" => Ok(Route::Cart),
            "/wishlist" => Ok(Route::Wishlist),
            "/login" => Ok(Route::Login),
            "/signup" => Ok(Route::Signup),
            "/checkout" => Ok(Route::Checkout),
            "/order-confirmation" => Ok(Route::OrderConfirmation),
            _ => path
                .strip_prefix("/product/")
                .and_then(|id| id.parse().ok())
                .map(Route::Product)
                .ok_or_else(|| UnknownRoute(path.to_owned())),
        }
    }
}

// Display is the inverse of FromStr: every route formats back to the path it
// parses from.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Shop => f.write_str("/shop"),
            Route::Product(id) => write!(f, "/product/{id}"),
            Route::Cart => f.write_str("/cart"),
            Route::Wishlist => f.write_str("/wishlist"),
            Route::Login => f.write_str("/login"),
            Route::Signup => f.write_str("/signup"),
            Route::Checkout => f.write_str("/checkout"),
            Route::OrderConfirmation => f.write_str("/order-confirmation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let cases = [
            ("/", Route::Home),
            ("/shop", Route::Shop),
            ("/product/7", Route::Product(7)),
            ("/cart", Route::Cart),
            ("/wishlist", Route::Wishlist),
            ("/login", Route::Login),
            ("/signup", Route::Signup),
            ("/checkout", Route::Checkout),
            ("/order-confirmation", Route::OrderConfirmation),
        ];

        for (path, route) in cases {
            assert_eq!(path.parse::<Route>().unwrap(), route);
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert!("/admin".parse::<Route>().is_err());
        assert!("/product/".parse::<Route>().is_err());
        assert!("/product/abc".parse::<Route>().is_err());
    }
}
