//! Embedded Content
//!
//! The portfolio dataset is compiled into the binary and parsed once at startup.

use thiserror::Error;

use crate::models::Portfolio;

const PORTFOLIO_JSON: &str = include_str!("../assets/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse portfolio content from a JSON document
pub fn parse_portfolio(json: &str) -> Result<Portfolio, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the portfolio bundled with the app
pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    parse_portfolio(PORTFOLIO_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_portfolio_loads() {
        let portfolio = load_portfolio().unwrap();
        assert_eq!(portfolio.projects.len(), 5);
        assert_eq!(portfolio.projects[0].title, "FantasyHQ.ai");
        assert_eq!(portfolio.profile.descriptors.len(), 4);

        let ids: HashSet<_> = portfolio.projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), portfolio.projects.len());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{ "profile": { "name": "x" }, "projects": [] }"#;
        assert!(matches!(parse_portfolio(json), Err(ContentError::Parse(_))));
    }
}
