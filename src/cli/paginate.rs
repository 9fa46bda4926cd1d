//! `paginate` command: navigation state for a result count.

use anyhow::Result;
use serde::Serialize;

use super::args::PaginateArgs;
use super::output::write_json;
use crate::config::Config;
use crate::pagination::{PageNav, PaginationState, paginate};

/// Pagination state together with the page-number controls it implies.
#[derive(Debug, Serialize)]
struct PaginateOutput {
    #[serde(flatten)]
    state: PaginationState,
    nav: PageNav,
}

impl PaginateOutput {
    fn new(total: usize, current_page: i64, config: &Config) -> Self {
        let state = paginate(total, config.page_size(), current_page);
        Self {
            nav: PageNav::for_state(&state),
            state,
        }
    }
}

/// Print pagination state for `args` as JSON.
pub fn print_pagination(args: &PaginateArgs, config: &Config) -> Result<()> {
    write_json(
        &PaginateOutput::new(args.total, args.page, config),
        args.pretty,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_shape() {
        let output = PaginateOutput::new(95, 4, &Config::default());

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({
                "totalPages": 10,
                "currentPage": 4,
                "prevPage": 3,
                "nextPage": 5,
                "hasPrevPage": true,
                "hasNextPage": true,
                "nav": {"showFirst": true, "label": "Page 4 of 10", "showLast": true},
            })
        );
    }

    #[test]
    fn test_uses_configured_page_size() {
        let mut config = Config::default();
        config.landing.page_size = 3;

        let output = PaginateOutput::new(7, 1, &config);

        assert_eq!(output.state.total_pages, 3);
        assert!(!output.nav.show_first);
    }
}
