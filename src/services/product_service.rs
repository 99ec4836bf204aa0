use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::products::{ProductList, ProductQuery, ProductSort, SeedReport},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::{Category, NewProduct, Product},
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<ProductList> {
    let mut condition = Condition::all();

    if let Some(category) = query.category.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::Category.eq(category.clone()));
    }

    if let Some(featured) = query.featured {
        condition = condition.add(Column::Featured.eq(featured));
    }

    if let Some(new_arrival) = query.new_arrival {
        condition = condition.add(Column::NewArrival.eq(new_arrival));
    }

    if let Some(search) = query.search.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(search));
        condition = condition.add(Expr::col(Column::Name).ilike(pattern));
    }

    let mut finder = Products::find().filter(condition);
    if let Some(sort) = query.sort.as_deref().and_then(ProductSort::from_key) {
        let (column, order) = sort_column(sort);
        finder = finder.order_by(column, order);
    }

    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect::<AppResult<Vec<_>>>()?;

    let count = items.len();
    Ok(ProductList { items, count })
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<Product> {
    let Some(id) = parse_id(id) else {
        return Err(AppError::NotFound("Product"));
    };
    let result = Products::find_by_id(id).one(&state.orm).await?;
    match result {
        Some(p) => product_from_entity(p),
        None => Err(AppError::NotFound("Product")),
    }
}

/// Replace the catalog with the demonstration set.
///
/// Without `force` a non-empty catalog is left untouched.
pub async fn seed_products(state: &AppState, force: bool) -> AppResult<SeedReport> {
    let count = Products::find().count(&state.orm).await?;
    if count > 0 && !force {
        return Ok(SeedReport {
            status: "exists".into(),
            count,
        });
    }

    let catalog = demo_catalog(state.usd_to_syp);
    for product in &catalog {
        product
            .validate()
            .map_err(|errors| AppError::BadRequest(errors.to_string()))?;
    }

    let now = Utc::now();
    let models = catalog
        .into_iter()
        .map(|product| new_product_model(product, now))
        .collect::<AppResult<Vec<_>>>()?;
    let inserted = models.len() as u64;

    Products::delete_many().exec(&state.orm).await?;
    Products::insert_many(models)
        .exec_without_returning(&state.orm)
        .await?;

    tracing::info!(count = inserted, rate = state.usd_to_syp, force, "catalog seeded");

    Ok(SeedReport {
        status: "seeded".into(),
        count: inserted,
    })
}

/// SYP and USD prices for a USD list price; unpriced items cost nothing.
pub fn price_pair(usd: Option<f64>, rate: i64) -> (i64, f64) {
    match usd {
        Some(usd) => ((usd * rate as f64).round() as i64, usd),
        None => (0, 0.0),
    }
}

pub fn demo_catalog(rate: i64) -> Vec<NewProduct> {
    let entries: [(&str, &str, Category, Option<f64>, bool, bool); 5] = [
        (
            "Handmade Necklace 1",
            "Elegant minimalist handmade necklace.",
            Category::Necklaces,
            Some(2.5),
            true,
            true,
        ),
        (
            "Handmade Necklace 2",
            "Delicate everyday necklace.",
            Category::Necklaces,
            Some(2.5),
            false,
            false,
        ),
        (
            "Handmade Bracelet 1",
            "Simple bracelet for daily wear.",
            Category::Bracelets,
            Some(1.5),
            false,
            true,
        ),
        (
            "Handmade Earrings 1",
            "Lightweight handmade earrings.",
            Category::Earrings,
            Some(1.5),
            true,
            false,
        ),
        // ring prices are set per piece by the shop
        (
            "Handmade Ring 1",
            "Adjustable handmade ring.",
            Category::Rings,
            None,
            false,
            false,
        ),
    ];

    entries
        .into_iter()
        .map(|(name, description, category, usd, featured, new_arrival)| {
            let (price_syp, price_usd) = price_pair(usd, rate);
            NewProduct {
                name: name.to_string(),
                description: Some(description.to_string()),
                category,
                price_syp,
                price_usd,
                images: Vec::new(),
                featured,
                new_arrival,
                in_stock: true,
            }
        })
        .collect()
}

/// Escape `%`, `_` and `\` so user input matches literally inside a LIKE pattern.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn sort_column(sort: ProductSort) -> (Column, Order) {
    match sort {
        ProductSort::NameAsc => (Column::Name, Order::Asc),
        ProductSort::NameDesc => (Column::Name, Order::Desc),
        ProductSort::PriceAsc => (Column::PriceSyp, Order::Asc),
        ProductSort::PriceDesc => (Column::PriceSyp, Order::Desc),
        ProductSort::Newest => (Column::CreatedAt, Order::Desc),
    }
}

fn new_product_model(product: NewProduct, now: chrono::DateTime<Utc>) -> AppResult<ActiveModel> {
    Ok(ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(product.name),
        description: Set(product.description),
        category: Set(product.category.as_str().to_string()),
        price_syp: Set(product.price_syp),
        price_usd: Set(product.price_usd),
        images: Set(serde_json::to_value(product.images)?),
        featured: Set(product.featured),
        new_arrival: Set(product.new_arrival),
        in_stock: Set(product.in_stock),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    })
}

pub(crate) fn product_from_entity(model: ProductModel) -> AppResult<Product> {
    Ok(Product {
        id: model.id,
        name: model.name,
        description: model.description,
        category: model.category.parse::<Category>()?,
        price_syp: model.price_syp,
        price_usd: model.price_usd,
        images: serde_json::from_value(model.images)?,
        featured: model.featured,
        new_arrival: model.new_arrival,
        in_stock: model.in_stock,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}
