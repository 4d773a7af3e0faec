//! [`StoreState`] implementation for the wishlist aggregate.

use crate::framework::StoreState;
use crate::model::Wishlist;
use crate::wishlist_actor::{WishlistCommand, WishlistQuery, WishlistQueryResult};

impl StoreState for Wishlist {
    type Command = WishlistCommand;
    type Query = WishlistQuery;
    type QueryResult = WishlistQueryResult;

    fn apply(&mut self, command: WishlistCommand) {
        match command {
            WishlistCommand::Add(product) => self.add(product),
            WishlistCommand::Remove(product_id) => self.remove(product_id),
            WishlistCommand::Clear => self.clear(),
        }
    }

    fn query(&self, query: WishlistQuery) -> WishlistQueryResult {
        match query {
            WishlistQuery::Contains(product_id) => {
                WishlistQueryResult::Contains(self.contains(product_id))
            }
            WishlistQuery::ItemCount => WishlistQueryResult::ItemCount(self.len()),
            WishlistQuery::Entries => WishlistQueryResult::Entries(self.entries().to_vec()),
        }
    }
}
