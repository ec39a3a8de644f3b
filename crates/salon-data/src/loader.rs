//! Fetch-then-parse glue.

use salon_commerce::catalog::{parse_catalog, ParsedCatalog};
use salon_commerce::LoadError;

use crate::source::CatalogSource;

/// Fetch the catalog text from `source` and parse it.
///
/// Fetch failures become `LoadError::Fetch`. There is no retry: a failed load
/// leaves the session with an empty catalog.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<ParsedCatalog, LoadError> {
    let location = source.describe();
    let text = source.fetch_text().await.map_err(|e| {
        tracing::error!(source = %location, error = %e, "catalog fetch failed");
        LoadError::Fetch(e.to_string())
    })?;

    let parsed = parse_catalog(&text)?;
    tracing::info!(
        source = %location,
        bytes = text.len(),
        rows = parsed.report.rows_read,
        products = parsed.report.products_loaded,
        "catalog fetched"
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchError;
    use async_trait::async_trait;

    struct StaticSource(Result<String, u16>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch_text(&self) -> Result<String, FetchError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(FetchError::Http {
                    status: *status,
                    url: "memory://catalog".to_string(),
                }),
            }
        }

        fn describe(&self) -> String {
            "memory://catalog".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_parses_fetched_text() {
        let source = StaticSource(Ok(
            "id,name,model,price,designer,silhouette,color,sizes,category,image,description\n\
             A1,Aurora,AU-01,5000,X,Y,Z,\"S, M, L\",Wedding,a.jpg,\n"
                .to_string(),
        ));
        let parsed = load_catalog(&source).await.unwrap();
        assert_eq!(parsed.products.len(), 1);
        assert_eq!(parsed.products[0].sizes, vec!["S", "M", "L"]);
    }

    #[tokio::test]
    async fn test_http_error_becomes_fetch_error() {
        let err = load_catalog(&StaticSource(Err(404))).await.unwrap_err();
        assert_eq!(
            err,
            LoadError::Fetch("HTTP error: 404 for memory://catalog".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_column_fails_load() {
        let source = StaticSource(Ok("id,name,price\nA1,Aurora,5000\n".to_string()));
        let err = load_catalog(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }
}
