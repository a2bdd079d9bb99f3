//! Renders [`Criteria`] and [`PageRequest`] into SQL.
//!
//! Column names always come from the static [`FieldSpec`] tables in
//! `models`, so they are pushed verbatim; every user-supplied value goes
//! through `push_bind`.

use souk_core::criteria::{Column, Condition, Criteria, FilterOp, FilterValue, Operand};
use souk_core::paging::{Page, PageRequest, SortOrder};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Every resource table uses `id` as its primary key.
const PRIMARY_KEY: &str = "id";

/// Fetch one page of rows matching `criteria`, plus the total match count.
pub async fn fetch_page<T>(
    pool: &PgPool,
    table: &str,
    columns: &str,
    criteria: &Criteria,
    page: &PageRequest,
) -> Result<Page<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let total = count_matching(pool, table, criteria).await?;

    let mut qb = select_matching(table, columns, criteria);
    push_order_by(&mut qb, table, &page.sort);
    qb.push(" LIMIT ")
        .push_bind(page.size)
        .push(" OFFSET ")
        .push_bind(page.offset());

    let items = qb.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Page {
        items,
        total,
        page: page.page,
        size: page.size,
    })
}

/// Count the rows matching `criteria`.
pub async fn count_matching(
    pool: &PgPool,
    table: &str,
    criteria: &Criteria,
) -> Result<i64, sqlx::Error> {
    let mut qb = count_query(table, criteria);
    qb.build_query_scalar::<i64>().fetch_one(pool).await
}

/// `SELECT [DISTINCT] columns FROM table [WHERE ...]`.
pub fn select_matching<'args>(
    table: &str,
    columns: &str,
    criteria: &'args Criteria,
) -> QueryBuilder<'args, Postgres> {
    let distinct = if criteria.distinct { "DISTINCT " } else { "" };
    let mut qb = QueryBuilder::new(format!("SELECT {distinct}{columns} FROM {table}"));
    push_where(&mut qb, table, criteria);
    qb
}

/// `SELECT COUNT(...) FROM table [WHERE ...]`.
pub fn count_query<'args>(table: &str, criteria: &'args Criteria) -> QueryBuilder<'args, Postgres> {
    let counted = if criteria.distinct {
        format!("COUNT(DISTINCT {table}.{PRIMARY_KEY})")
    } else {
        "COUNT(*)".to_string()
    };
    let mut qb = QueryBuilder::new(format!("SELECT {counted} FROM {table}"));
    push_where(&mut qb, table, criteria);
    qb
}

/// Append a `WHERE` clause AND-ing every condition. No-op when empty.
pub fn push_where<'args>(qb: &mut QueryBuilder<'args, Postgres>, table: &str, criteria: &'args Criteria) {
    for (i, condition) in criteria.conditions.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        push_condition(qb, table, condition);
    }
}

/// Append `ORDER BY`, always ending with the primary key so paging is stable.
pub fn push_order_by(qb: &mut QueryBuilder<'_, Postgres>, table: &str, sort: &[SortOrder]) {
    qb.push(" ORDER BY ");
    for order in sort {
        qb.push(format!("{table}.{} {}, ", order.column, order.direction.as_sql()));
    }
    qb.push(format!("{table}.{PRIMARY_KEY} ASC"));
}

fn push_condition<'args>(qb: &mut QueryBuilder<'args, Postgres>, table: &str, condition: &'args Condition) {
    match condition.field.column {
        Column::Own(column) => {
            push_predicate(qb, &format!("{table}.{column}"), condition.op, &condition.operand);
        }
        Column::Joined {
            table: join_table,
            owner,
            target,
        } => {
            // specified=false means "has no related rows at all".
            if condition.operand == Operand::Flag(false) {
                qb.push(format!(
                    "{table}.{PRIMARY_KEY} NOT IN (SELECT {owner} FROM {join_table})"
                ));
                return;
            }
            qb.push(format!(
                "{table}.{PRIMARY_KEY} IN (SELECT {owner} FROM {join_table} WHERE "
            ));
            push_predicate(qb, target, condition.op, &condition.operand);
            qb.push(")");
        }
    }
}

fn push_predicate<'args>(
    qb: &mut QueryBuilder<'args, Postgres>,
    column: &str,
    op: FilterOp,
    operand: &'args Operand,
) {
    match operand {
        Operand::Flag(true) => {
            qb.push(format!("{column} IS NOT NULL"));
        }
        Operand::Flag(false) => {
            qb.push(format!("{column} IS NULL"));
        }
        Operand::List(values) => {
            if values.is_empty() {
                // IN () is not valid SQL; an empty set matches nothing.
                qb.push(if op == FilterOp::NotIn { "TRUE" } else { "FALSE" });
                return;
            }
            let keyword = if op == FilterOp::NotIn { "NOT IN" } else { "IN" };
            qb.push(format!("{column} {keyword} ("));
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    qb.push(", ");
                }
                push_value(qb, value);
            }
            qb.push(")");
        }
        Operand::Value(value) => match op {
            FilterOp::Contains | FilterOp::DoesNotContain => {
                let keyword = if op == FilterOp::Contains { "ILIKE" } else { "NOT ILIKE" };
                let needle = match value {
                    FilterValue::Text(text) => text.as_str(),
                    _ => "",
                };
                qb.push(format!("{column} {keyword} "));
                qb.push_bind(format!("%{}%", escape_like(needle)));
            }
            _ => {
                qb.push(format!("{column} {} ", comparison(op)));
                push_value(qb, value);
            }
        },
    }
}

fn comparison(op: FilterOp) -> &'static str {
    match op {
        FilterOp::NotEquals => "<>",
        FilterOp::GreaterThan => ">",
        FilterOp::GreaterThanOrEqual => ">=",
        FilterOp::LessThan => "<",
        FilterOp::LessThanOrEqual => "<=",
        _ => "=",
    }
}

fn push_value<'args>(qb: &mut QueryBuilder<'args, Postgres>, value: &'args FilterValue) {
    match value {
        FilterValue::Text(v) => qb.push_bind(v.as_str()),
        FilterValue::Long(v) => qb.push_bind(*v),
        FilterValue::Integer(v) => qb.push_bind(*v),
        FilterValue::Double(v) => qb.push_bind(*v),
        FilterValue::Boolean(v) => qb.push_bind(*v),
        FilterValue::Uuid(v) => qb.push_bind(*v),
        FilterValue::Instant(v) => qb.push_bind(*v),
        FilterValue::Date(v) => qb.push_bind(*v),
    };
}

/// Escape `LIKE` wildcards so user text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use souk_core::criteria::{FieldKind, FieldSpec};
    use souk_core::paging::Direction;

    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::own("id", "id", FieldKind::Long),
        FieldSpec::own("name", "name", FieldKind::Text),
        FieldSpec::own("price", "price", FieldKind::Double),
        FieldSpec::joined("tagId", "rel_product__tag", "product_id", "tag_id", FieldKind::Long),
    ];

    fn criteria(raw: &[(&str, &str)]) -> Criteria {
        let params: Vec<(String, String)> = raw
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Criteria::from_params(FIELDS, &params).unwrap()
    }

    #[test]
    fn empty_criteria_has_no_where_clause() {
        let c = Criteria::default();
        let qb = select_matching("products", "id, name", &c);
        assert_eq!(qb.sql(), "SELECT id, name FROM products");
    }

    #[test]
    fn conditions_are_and_ed_with_binds() {
        let c = criteria(&[("name.equals", "shoe"), ("price.greaterThan", "10")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM products WHERE products.name = $1 AND products.price > $2"
        );
    }

    #[test]
    fn contains_uses_ilike() {
        let c = criteria(&[("name.doesNotContain", "50%")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(qb.sql(), "SELECT id FROM products WHERE products.name NOT ILIKE $1");
    }

    #[test]
    fn in_lists_render_one_bind_per_value() {
        let c = criteria(&[("id.in", "1,2,3")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(qb.sql(), "SELECT id FROM products WHERE products.id IN ($1, $2, $3)");
    }

    #[test]
    fn empty_in_list_matches_nothing() {
        let c = criteria(&[("id.in", "")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(qb.sql(), "SELECT id FROM products WHERE FALSE");
    }

    #[test]
    fn specified_renders_null_checks() {
        let c = criteria(&[("name.specified", "true"), ("price.specified", "false")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM products WHERE products.name IS NOT NULL AND products.price IS NULL"
        );
    }

    #[test]
    fn joined_fields_become_subqueries() {
        let c = criteria(&[("tagId.equals", "4")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM products WHERE products.id IN \
             (SELECT product_id FROM rel_product__tag WHERE tag_id = $1)"
        );

        let c = criteria(&[("tagId.specified", "false")]);
        let qb = select_matching("products", "id", &c);
        assert_eq!(
            qb.sql(),
            "SELECT id FROM products WHERE products.id NOT IN (SELECT product_id FROM rel_product__tag)"
        );
    }

    #[test]
    fn distinct_applies_to_select_and_count() {
        let c = criteria(&[("distinct", "true")]);
        assert_eq!(select_matching("tags", "id", &c).sql(), "SELECT DISTINCT id FROM tags");
        assert_eq!(count_query("tags", &c).sql(), "SELECT COUNT(DISTINCT tags.id) FROM tags");
    }

    #[test]
    fn order_by_ends_with_primary_key() {
        let c = Criteria::default();
        let mut qb = select_matching("tags", "id, name", &c);
        push_order_by(
            &mut qb,
            "tags",
            &[SortOrder { column: "name", direction: Direction::Desc }],
        );
        assert_eq!(
            qb.sql(),
            "SELECT id, name FROM tags ORDER BY tags.name DESC, tags.id ASC"
        );
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }
}
