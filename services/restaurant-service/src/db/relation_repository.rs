// /restaurant/services/restaurant-service/src/db/relation_repository.rs

use sqlx::PgExecutor;
use uuid::Uuid;

use super::gateway;
use crate::utils::AppResult;

/// Semua join table yang menghubungkan dua entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    UserInterest,
    UserAddress,
    UserBilling,
    OrderBilling,
    UserBooking,
    BookingTable,
    UserOrder,
    OrderOrderItem,
    OrderItemFood,
}

impl Relation {
    /// Nama join table
    pub fn table(self) -> &'static str {
        match self {
            Relation::UserInterest => "relation_table",
            Relation::UserAddress => "user_address",
            Relation::UserBilling => "user_billing",
            Relation::OrderBilling => "order_billing",
            Relation::UserBooking => "user_booking",
            Relation::BookingTable => "booking_table",
            Relation::UserOrder => "user_order",
            Relation::OrderOrderItem => "order_order_item",
            Relation::OrderItemFood => "order_item_food",
        }
    }

    /// Kolom foreign key (sisi kiri, sisi kanan)
    pub fn columns(self) -> (&'static str, &'static str) {
        match self {
            Relation::UserInterest => ("users_id", "interest_id"),
            Relation::UserAddress => ("users_id", "address_id"),
            Relation::UserBilling => ("users_id", "billing_id"),
            Relation::OrderBilling => ("order_id", "billing_id"),
            Relation::UserBooking => ("users_id", "booking_id"),
            Relation::BookingTable => ("booking_id", "rest_table_id"),
            Relation::UserOrder => ("users_id", "orders_id"),
            Relation::OrderOrderItem => ("order_id", "order_item_id"),
            Relation::OrderItemFood => ("order_item_id", "food_id"),
        }
    }

    /// INSERT statement untuk relasi ini, identifier-nya statis semua
    fn insert_sql(self) -> String {
        let (left, right) = self.columns();
        format!(
            "INSERT INTO {} ({}, {}) VALUES ($1, $2) RETURNING id",
            self.table(),
            left,
            right
        )
    }
}

pub struct RelationRepository;

impl RelationRepository {
    /// Simpan satu baris relasi, return id baris relasi
    pub async fn link<'c, E>(executor: E, relation: Relation, left_id: Uuid, right_id: Uuid) -> AppResult<Uuid>
    where
        E: PgExecutor<'c>,
    {
        let sql = relation.insert_sql();
        let id = gateway::execute_returning_id(
            executor,
            sqlx::query_scalar(&sql).bind(left_id).bind(right_id),
        )
        .await?;

        tracing::debug!(relation = relation.table(), %left_id, %right_id, "relation row stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sql_uses_relation_columns() {
        assert_eq!(
            Relation::BookingTable.insert_sql(),
            "INSERT INTO booking_table (booking_id, rest_table_id) VALUES ($1, $2) RETURNING id"
        );
        assert_eq!(
            Relation::UserInterest.insert_sql(),
            "INSERT INTO relation_table (users_id, interest_id) VALUES ($1, $2) RETURNING id"
        );
    }

    #[test]
    fn test_every_relation_has_distinct_table() {
        let relations = [
            Relation::UserInterest,
            Relation::UserAddress,
            Relation::UserBilling,
            Relation::OrderBilling,
            Relation::UserBooking,
            Relation::BookingTable,
            Relation::UserOrder,
            Relation::OrderOrderItem,
            Relation::OrderItemFood,
        ];
        let mut tables: Vec<&str> = relations.iter().map(|r| r.table()).collect();
        tables.sort();
        tables.dedup();

        assert_eq!(tables.len(), relations.len());
    }
}
