use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::order::{Order as DomainOrder, OrderListQuery, PaymentStatus},
    models::cart::{Cart as DbCart, CartItem as DbCartItem},
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
        OrderItem as DbOrderItem,
    },
    models::product::Product as DbProduct,
    repository::{DieselRepository, OrderReader, OrderWriter},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32, customer_id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .filter(orders::customer_id.eq(customer_id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = order_items::table
            .filter(order_items::order_id.eq(order.id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(Some(DomainOrder::from((order, items))))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let total = orders::table
            .filter(orders::customer_id.eq(query.customer_id))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = orders::table
            .filter(orders::customer_id.eq(query.customer_id))
            .order(orders::placed_at.desc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let db_orders = items.load::<DbOrder>(&mut conn)?;
        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();

        let rows = order_items::table
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        let mut items_by_order: HashMap<i32, Vec<DbOrderItem>> = HashMap::new();
        for item in rows {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let orders = db_orders
            .into_iter()
            .map(|order| {
                let order_id = order.id;
                let items = items_by_order.remove(&order_id).unwrap_or_default();
                DomainOrder::from((order, items))
            })
            .collect();

        Ok((total, orders))
    }
}

impl OrderWriter for DieselRepository {
    /// The checkout transaction. All steps run inside one diesel
    /// transaction so a failure at any point leaves the cart untouched
    /// and produces no order.
    ///
    /// A cart that was already checked out no longer exists, so a second
    /// attempt on the same token fails with `NotFound` instead of placing
    /// a duplicate order.
    fn checkout_cart(&self, cart_id: &str, customer_id: i32) -> RepositoryResult<DomainOrder> {
        use crate::schema::{cart_items, carts, order_items, orders, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let cart = carts::table
                .find(cart_id)
                .first::<DbCart>(conn)
                .optional()?;

            let Some(cart) = cart else {
                return Err(RepositoryError::NotFound);
            };

            // Read each line together with its product's current price.
            // This read is the price that gets frozen into the order.
            let lines = cart_items::table
                .inner_join(products::table)
                .filter(cart_items::cart_id.eq(&cart.id))
                .order(cart_items::id.asc())
                .load::<(DbCartItem, DbProduct)>(conn)?;

            if lines.is_empty() {
                return Err(RepositoryError::Validation("cart is empty".to_string()));
            }

            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder {
                    customer_id,
                    payment_status: PaymentStatus::Pending.into(),
                })
                .get_result::<DbOrder>(conn)?;

            let payload: Vec<DbNewOrderItem> = lines
                .iter()
                .map(|(item, product)| DbNewOrderItem {
                    order_id: created.id,
                    product_id: item.product_id,
                    unit_price_cents: product.unit_price_cents,
                    quantity: item.quantity,
                })
                .collect();

            diesel::insert_into(order_items::table)
                .values(&payload)
                .execute(conn)?;

            diesel::delete(cart_items::table.filter(cart_items::cart_id.eq(&cart.id)))
                .execute(conn)?;
            diesel::delete(carts::table.find(&cart.id)).execute(conn)?;

            let items = order_items::table
                .filter(order_items::order_id.eq(created.id))
                .order(order_items::id.asc())
                .load::<DbOrderItem>(conn)?;

            Ok(created.into_domain(items))
        })
    }

    fn set_payment_status(
        &self,
        order_id: i32,
        customer_id: i32,
        status: PaymentStatus,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .filter(orders::customer_id.eq(customer_id))
                .first::<DbOrder>(conn)
                .optional()?;

            let Some(order) = order else {
                return Err(RepositoryError::NotFound);
            };

            // An order only ever moves away from pending; settled and
            // failed orders are immutable.
            if PaymentStatus::from(order.payment_status.as_str()) != PaymentStatus::Pending {
                return Err(RepositoryError::Validation(
                    "payment status is no longer pending".to_string(),
                ));
            }

            let status: &str = status.into();
            let updated = diesel::update(orders::table.find(order.id))
                .set(orders::payment_status.eq(status))
                .get_result::<DbOrder>(conn)?;

            let items = order_items::table
                .filter(order_items::order_id.eq(updated.id))
                .order(order_items::id.asc())
                .load::<DbOrderItem>(conn)?;

            Ok(updated.into_domain(items))
        })
    }
}
