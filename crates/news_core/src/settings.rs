pub const DEFAULT_ORDER_BY: &str = "newest";
pub const DEFAULT_PAGE_SIZE: &str = "10";

/// User-editable query parameters. Values are forwarded to the API verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    pub order_by: String,
    pub page_size: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            order_by: DEFAULT_ORDER_BY.to_string(),
            page_size: DEFAULT_PAGE_SIZE.to_string(),
        }
    }
}
