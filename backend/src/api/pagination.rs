//! Pagination for `GET /rides`
//!
//! Turns the raw `page` / `perpage` query strings into a bounded limit and offset.

use crate::config::PaginationConfig;
use crate::error::AppError;
use serde::Deserialize;

/// Raw query parameters of `GET /rides`
///
/// Kept as strings so malformed numbers become `VALIDATION_ERROR` responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRidesQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// Rows per page
    pub perpage: Option<String>,
}

/// A validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: i64,
    /// Rows per page, used as the SQL limit
    pub per_page: i64,
    /// Rows skipped before the page starts
    pub offset: i64,
}

impl PageRequest {
    /// Parse and bound the query against the pagination config
    ///
    /// # Returns
    /// * `Ok(PageRequest)` - Parameters are valid
    /// * `Err(AppError::Validation)` - A parameter is not an integer or is out of range
    pub fn from_query(query: &ListRidesQuery, config: &PaginationConfig) -> Result<Self, AppError> {
        let page = parse_param("page", query.page.as_deref())?.unwrap_or(1);
        if page < 1 {
            return Err(AppError::Validation(
                "page must be a positive integer".to_string(),
            ));
        }

        let per_page = match parse_param("perpage", query.perpage.as_deref())? {
            Some(per_page) if (1..=config.max_per_page).contains(&per_page) => per_page,
            Some(_) => {
                return Err(AppError::Validation(format!(
                    "perpage must be between 1 and {}",
                    config.max_per_page
                )))
            }
            None => config.default_per_page.min(config.max_per_page),
        };

        let offset = if page == 1 && config.legacy_first_page_offset {
            1
        } else {
            (page - 1)
                .checked_mul(per_page)
                .ok_or_else(|| AppError::Validation("page is out of range".to_string()))?
        };

        Ok(Self {
            page,
            per_page,
            offset,
        })
    }
}

/// Blank values count as absent.
fn parse_param(name: &str, raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{} must be an integer", name))),
    }
}
