//! [`StoreState`] implementation for the cart aggregate.

use crate::cart_actor::{CartCommand, CartQuery, CartQueryResult};
use crate::framework::StoreState;
use crate::model::Cart;

impl StoreState for Cart {
    type Command = CartCommand;
    type Query = CartQuery;
    type QueryResult = CartQueryResult;

    fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add(product) => self.add(product),
            CartCommand::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(product_id, quantity),
            CartCommand::Remove(product_id) => self.remove(product_id),
            CartCommand::Clear => self.clear(),
        }
    }

    fn query(&self, query: CartQuery) -> CartQueryResult {
        match query {
            CartQuery::ItemCount => CartQueryResult::ItemCount(self.item_count()),
            CartQuery::Subtotal => CartQueryResult::Subtotal(self.subtotal()),
            CartQuery::Lines => CartQueryResult::Lines(self.lines().to_vec()),
        }
    }
}
