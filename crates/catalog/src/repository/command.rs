use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
    repository::SharedCollection,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: SharedCollection,
}

impl ProductCommandRepository {
    pub fn new(db: SharedCollection) -> Self {
        Self { db }
    }
}

fn check_row_constraints(
    name: &str,
    category: &str,
    price: f64,
    stock: i32,
) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::Custom("name must not be empty".into()));
    }
    if category.trim().is_empty() {
        return Err(RepositoryError::Custom("category must not be empty".into()));
    }
    if price < 0.0 {
        return Err(RepositoryError::Custom("price must not be negative".into()));
    }
    if stock < 0 {
        return Err(RepositoryError::Custom("stock must not be negative".into()));
    }
    Ok(())
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        info!("📦 Inserting product: {}", req.name);

        let stock = req.stock.unwrap_or(0);
        check_row_constraints(&req.name, &req.category, req.price, stock).inspect_err(|e| {
            error!("❌ Insert rejected: {e}");
        })?;

        let mut table = self.db.write().await;
        let now = Utc::now().naive_utc();

        let product = Product {
            product_id: table.next_id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock,
            category: req.category.clone(),
            sku: req.sku.clone(),
            image_url: req.image_url.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        table.next_id += 1;
        table.rows.push(product.clone());

        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        info!("🔄 Updating product with ID: {}", req.product_id);

        let mut table = self.db.write().await;

        let row = table
            .rows
            .iter_mut()
            .find(|p| p.product_id == req.product_id)
            .ok_or(RepositoryError::NotFound)?;

        let name = req.name.clone().unwrap_or_else(|| row.name.clone());
        let category = req.category.clone().unwrap_or_else(|| row.category.clone());
        let price = req.price.unwrap_or(row.price);
        let stock = req.stock.unwrap_or(row.stock);
        check_row_constraints(&name, &category, price, stock).inspect_err(|e| {
            error!("❌ Update rejected: {e}");
        })?;

        row.name = name;
        row.category = category;
        row.price = price;
        row.stock = stock;
        if req.description.is_some() {
            row.description = req.description.clone();
        }
        if req.sku.is_some() {
            row.sku = req.sku.clone();
        }
        if req.image_url.is_some() {
            row.image_url = req.image_url.clone();
        }
        row.updated_at = req.updated_at.or_else(|| Some(Utc::now().naive_utc()));

        Ok(row.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting product with ID: {id}");

        let mut table = self.db.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.product_id != id);

        if table.rows.len() == before {
            error!("❌ Product with ID {id} not found");
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
