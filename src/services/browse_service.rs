//! Derived directory views over the blob store. There are no folders in
//! object storage; shop and mode listings come from splitting object keys
//! on `/` and taking the segment at the right depth.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::{
    dto::{
        MissingFields,
        browse::{
            ImagePage, ImagesQuery, ModeList, ModesQuery, ShopList, ShopsQuery,
            SignedImageQuery, SignedImageResponse,
        },
    },
    error::AppResult,
    response::ApiResponse,
    state::AppState,
};

const SIGNED_URL_TTL: Duration = Duration::from_secs(3600);

pub async fn shops(state: &AppState, query: ShopsQuery) -> AppResult<ApiResponse<ShopList>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &query.tenant);
    missing.finish()?;

    let keys = state.blobs.list(&format!("{tenant}/")).await?;
    Ok(ApiResponse::success(
        "OK",
        ShopList {
            shops: folders_at(&keys, 1),
        },
        None,
    ))
}

pub async fn modes(state: &AppState, query: ModesQuery) -> AppResult<ApiResponse<ModeList>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &query.tenant);
    let shop = missing.require_str("shop", &query.shop);
    missing.finish()?;

    let keys = state.blobs.list(&format!("{tenant}/{shop}/")).await?;
    Ok(ApiResponse::success(
        "OK",
        ModeList {
            modes: folders_at(&keys, 2),
        },
        None,
    ))
}

/// Lists every image under the mode and slices the page out in memory.
/// O(total objects) per request, like the store-side listing it wraps;
/// there is no pagination token to resume from.
pub async fn images(state: &AppState, query: ImagesQuery) -> AppResult<ApiResponse<ImagePage>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &query.tenant);
    let shop = missing.require_str("shop", &query.shop);
    let mode = missing.require_str("mode", &query.mode);
    missing.finish()?;

    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(20).max(1);

    let keys = state
        .blobs
        .list(&format!("{tenant}/{shop}/{mode}/"))
        .await?;
    let images: Vec<String> = keys
        .iter()
        .filter(|key| key.to_lowercase().ends_with(".jpg"))
        .map(|key| state.blobs.public_url(key))
        .collect();

    let total = images.len();
    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(total);
    let page_images = if start < total {
        images[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(ApiResponse::success(
        "OK",
        ImagePage {
            page,
            total: total as i64,
            has_more: end < total,
            images: page_images,
        },
        None,
    ))
}

/// Short-lived signed URL for one stored image, for clients that cannot
/// read the bucket publicly.
pub async fn signed_image(
    state: &AppState,
    query: SignedImageQuery,
) -> AppResult<ApiResponse<SignedImageResponse>> {
    let mut missing = MissingFields::new();
    let tenant = missing.require_str("tenant", &query.tenant);
    let shop = missing.require_str("shop", &query.shop);
    let mode = missing.require_str("mode", &query.mode);
    let name = missing.require_str("name", &query.name);
    missing.finish()?;

    let key = format!("{tenant}/{shop}/{mode}/{name}");
    let url = state.blobs.signed_url(&key, SIGNED_URL_TTL).await?;

    Ok(ApiResponse::success(
        "OK",
        SignedImageResponse { url },
        None,
    ))
}

/// Distinct segment at `depth`, counting only keys that continue past it:
/// a terminal segment is an object name (like the `.keep` marker), not a
/// folder.
fn folders_at(keys: &[String], depth: usize) -> Vec<String> {
    let mut folders = BTreeSet::new();
    for key in keys {
        let parts: Vec<&str> = key.split('/').collect();
        if parts.len() > depth + 1 && !parts[depth].is_empty() {
            folders.insert(parts[depth].to_string());
        }
    }
    folders.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::folders_at;

    #[test]
    fn terminal_segments_are_not_folders() {
        let keys = vec![
            "market/.keep".to_string(),
            "market/noodles/preorder/a.jpg".to_string(),
            "market/grill/preorder/b.jpg".to_string(),
        ];
        assert_eq!(folders_at(&keys, 1), vec!["grill", "noodles"]);
        assert_eq!(folders_at(&keys, 2), vec!["preorder"]);
    }
}
