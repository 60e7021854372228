//! Dynamic WHERE-clause construction for product listing.
//!
//! Every predicate is rendered with a positional placeholder and paired with
//! a typed bind value; user input never reaches the SQL text.

use shopfront_core::types::DbId;

use crate::models::product::ProductFilter;

/// Typed bind value for dynamically-built product queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BindValue {
    Id(DbId),
    BigInt(i64),
    Text(String),
}

/// Build a WHERE clause and bind values from [`ProductFilter`].
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause always
/// starts with `WHERE deleted_at IS NULL` so soft-deleted rows never match.
pub(crate) fn build_product_filter(filter: &ProductFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = vec!["deleted_at IS NULL".to_string()];
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    // An empty id set adds nothing rather than an always-false `IN ()`.
    if !filter.ids.is_empty() {
        let placeholders: Vec<String> = filter
            .ids
            .iter()
            .map(|id| {
                let placeholder = format!("${bind_idx}");
                bind_idx += 1;
                bind_values.push(BindValue::Id(*id));
                placeholder
            })
            .collect();
        conditions.push(format!("id IN ({})", placeholders.join(", ")));
    }

    if let Some(shop_id) = filter.shop_id {
        conditions.push(format!("shop_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Id(shop_id));
    }

    if let Some(category_id) = filter.category_id {
        conditions.push(format!("category_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Id(category_id));
    }

    if let Some(name) = filter.name.as_deref().filter(|n| !n.is_empty()) {
        conditions.push(format!("name ILIKE '%' || ${bind_idx} || '%'"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(name.to_string()));
    }

    if let Some(price_min) = filter.price_min {
        conditions.push(format!("price >= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(price_min));
    }

    if let Some(price_max) = filter.price_max {
        conditions.push(format!("price <= ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(price_max));
    }

    if filter.is_available == Some(true) {
        conditions.push("stock > 0".to_string());
    }

    let where_clause = format!("WHERE {}", conditions.join(" AND "));

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub(crate) fn bind_product_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Id(v) => q = q.bind(*v),
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}
