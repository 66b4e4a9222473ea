use sea_orm::EntityTrait;

use crate::db::OrmConn;
use crate::entity::{Categories, Colors, Products, Sizes};
use crate::error::AppResult;
use crate::models::{Category, ColorOption, Product, SizeOption};

/// The full catalog as of one store read. Inactive entries are included;
/// visibility is the matcher's concern.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub sizes: Vec<SizeOption>,
    pub colors: Vec<ColorOption>,
}

/// Injected data access for the search path. Production uses [`DbCatalog`];
/// tests substitute [`FixedCatalog`].
pub trait CatalogSource: Send + Sync {
    /// Fetch the complete catalog as of the current store value.
    fn load(&self) -> impl Future<Output = AppResult<CatalogSnapshot>> + Send;
}

#[derive(Clone)]
pub struct DbCatalog {
    orm: OrmConn,
}

impl DbCatalog {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }
}

impl CatalogSource for DbCatalog {
    async fn load(&self) -> AppResult<CatalogSnapshot> {
        // The four reads are independent; issue them together and join before
        // matching starts. Any single failure fails the whole query.
        let (products, categories, sizes, colors) = tokio::try_join!(
            Products::find().all(&self.orm),
            Categories::find().all(&self.orm),
            Sizes::find().all(&self.orm),
            Colors::find().all(&self.orm),
        )?;

        Ok(CatalogSnapshot {
            products: products.into_iter().map(Product::from).collect(),
            categories: categories.into_iter().map(Category::from).collect(),
            sizes: sizes.into_iter().map(SizeOption::from).collect(),
            colors: colors.into_iter().map(ColorOption::from).collect(),
        })
    }
}

/// Catalog source serving a fixed in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    snapshot: CatalogSnapshot,
}

impl FixedCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

impl CatalogSource for FixedCatalog {
    async fn load(&self) -> AppResult<CatalogSnapshot> {
        Ok(self.snapshot.clone())
    }
}
