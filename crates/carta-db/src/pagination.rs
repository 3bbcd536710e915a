//! Single-round-trip page queries.

/// Builds the page query for `table`.
///
/// Statement 0 counts every record, statement 1 selects the requested
/// slice in stored (`created_at` ascending) order. Both statements
/// travel in one `query()` call, so a listing costs a single store
/// round trip instead of a count query followed by a page query.
///
/// Callers bind `start` and `page_size` before executing. The count
/// scans the whole table, which holds up until a collection outgrows a
/// single query's working memory — a scaling ceiling, not an error
/// condition.
pub fn build_page_query(table: &str) -> String {
    format!(
        "SELECT count() AS total FROM {table} GROUP ALL; \
         SELECT meta::id(id) AS record_id, * FROM {table} \
         ORDER BY created_at ASC LIMIT $page_size START $start;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_has_count_and_slice_statements() {
        let q = build_page_query("food");
        assert!(q.contains("SELECT count() AS total FROM food GROUP ALL"));
        assert!(q.contains("ORDER BY created_at ASC"));
        assert!(q.contains("LIMIT $page_size START $start"));
    }

    #[test]
    fn table_name_is_substituted() {
        let q = build_page_query("menu");
        assert!(q.contains("FROM menu GROUP ALL"));
        assert!(!q.contains("food"));
    }
}
