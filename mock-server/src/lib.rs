use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Body of `POST /products`. Only `title` and `price` are required; the
/// rest default to empty strings.
#[derive(Deserialize)]
pub struct NewProduct {
    pub title: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

type ApiError = (StatusCode, Json<Message>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(Message {
            message: message.to_string(),
        }),
    )
}

#[derive(Debug)]
pub struct Catalog {
    products: BTreeMap<u64, Product>,
    next_id: u64,
}

impl Catalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<u64, Product> = products.into_iter().map(|p| (p.id, p)).collect();
        let next_id = products.keys().next_back().map_or(1, |id| id + 1);
        Self { products, next_id }
    }

    /// Distinct categories in product-id order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.products.values() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

/// A small fixed catalog covering every seeded category.
pub fn seed_products() -> Vec<Product> {
    let product = |id: u64, title: &str, price: f64, category: &str| Product {
        id,
        title: title.to_string(),
        price,
        description: format!("{title} from the demo catalog."),
        category: category.to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
    };
    vec![
        product(1, "Fjallraven Backpack", 109.95, "men's clothing"),
        product(2, "Mens Casual Slim Fit T-Shirt", 22.3, "men's clothing"),
        product(3, "John Hardy Gold Bracelet", 695.0, "jewelery"),
        product(4, "WD 2TB External Hard Drive", 64.0, "electronics"),
        product(5, "Rain Jacket Women Windbreaker", 39.99, "women's clothing"),
    ]
}

pub type Db = Arc<RwLock<Catalog>>;

pub fn app() -> Router {
    app_with(Catalog::new(seed_products()))
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(RwLock::new(catalog));
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/categories", get(list_categories))
        .route("/products/{id}", get(get_product))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let catalog = db.read().await;
    Json(catalog.products.values().cloned().collect())
}

async fn list_categories(State(db): State<Db>) -> Json<Vec<String>> {
    Json(db.read().await.categories())
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    let catalog = db.read().await;
    catalog
        .products
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Product not found"))
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let (Some(title), Some(price)) = (input.title, input.price) else {
        tracing::warn!("rejected product without title or price");
        return Err(api_error(StatusCode::BAD_REQUEST, "Validation failed"));
    };

    let mut catalog = db.write().await;
    let product = Product {
        id: catalog.next_id,
        title,
        price,
        description: input.description,
        category: input.category,
        image: input.image,
    };
    catalog.next_id += 1;
    catalog.products.insert(product.id, product.clone());
    tracing::info!(id = product.id, "created product");
    Ok((StatusCode::CREATED, Json(product)))
}
