use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShopsQuery {
    pub tenant: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShopList {
    pub shops: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModesQuery {
    pub tenant: Option<String>,
    pub shop: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModeList {
    pub modes: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImagesQuery {
    pub tenant: Option<String>,
    pub shop: Option<String>,
    pub mode: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImagePage {
    pub page: i64,
    pub total: i64,
    pub has_more: bool,
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignedImageQuery {
    pub tenant: Option<String>,
    pub shop: Option<String>,
    pub mode: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignedImageResponse {
    pub url: String,
}
