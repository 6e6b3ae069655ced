pub const TITLE_WIDTH: usize = 76;
pub const PROMPT: &str = "> ";
pub const LOADING_TEXT: &str = "Loading...";
pub const ELLIPSIS: char = '…';

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  <n> | open <n>   open article n in the browser",
    "  r | refresh      reload the list",
    "  s | settings     show current settings",
    "  order <value>    set order-by (newest, oldest, relevance)",
    "  size <value>     set page size",
    "  h | help         show this help",
    "  q | quit         exit",
];
