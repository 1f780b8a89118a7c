use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        browse::{
            ImagePage, ImagesQuery, ModeList, ModesQuery, ShopList, ShopsQuery, SignedImageQuery,
            SignedImageResponse,
        },
        cart::{
            ActiveOrderRequest, ActiveOrderResponse, AddItemRequest, AddItemResponse, ItemRef,
            QuantityResponse, RemoveItemResponse,
        },
        orders::{
            ConfirmOrderRequest, ConfirmOrderResponse, MarkReadRequest, NotificationDto,
            UnreadQuery,
        },
        products::{ProductList, ProductListQuery, SaveProductRequest},
        tenants::{RegisterTenantRequest, TenantList, TenantSearchQuery},
        auth::{CheckPasswordRequest, RegisterAdminRequest, RegisterMemberRequest},
    },
    models::{Order, OrderItem, OrderStatus, PartnerNotification, Product, Tenant},
    response::{ApiResponse, Meta},
    routes::{auth, browse, cart, health, notifications, orders, products, tenants},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        tenants::register_tenant,
        tenants::search_tenants,
        auth::register_admin,
        auth::check_password,
        auth::register_partner,
        auth::register_customer,
        auth::register_delivery,
        products::save_product,
        products::list_products,
        cart::active_order,
        cart::add_item,
        cart::increase_quantity,
        cart::decrease_quantity,
        cart::remove_item,
        orders::confirm_order,
        notifications::unread_notification,
        notifications::mark_notification_read,
        browse::shops,
        browse::modes,
        browse::images,
        browse::signed_image
    ),
    components(
        schemas(
            Tenant,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            PartnerNotification,
            RegisterTenantRequest,
            TenantSearchQuery,
            TenantList,
            RegisterAdminRequest,
            CheckPasswordRequest,
            RegisterMemberRequest,
            SaveProductRequest,
            ProductListQuery,
            ProductList,
            ActiveOrderRequest,
            ActiveOrderResponse,
            AddItemRequest,
            AddItemResponse,
            ItemRef,
            QuantityResponse,
            RemoveItemResponse,
            ConfirmOrderRequest,
            ConfirmOrderResponse,
            UnreadQuery,
            NotificationDto,
            MarkReadRequest,
            ShopsQuery,
            ShopList,
            ModesQuery,
            ModeList,
            ImagesQuery,
            ImagePage,
            SignedImageQuery,
            SignedImageResponse,
            Meta,
            ApiResponse<Tenant>,
            ApiResponse<TenantList>,
            ApiResponse<ProductList>,
            ApiResponse<ActiveOrderResponse>,
            ApiResponse<ConfirmOrderResponse>,
            ApiResponse<ImagePage>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Tenants", description = "Tenant registration and prefix search"),
        (name = "Auth", description = "Credential registration and password checks"),
        (name = "Products", description = "Product endpoints"),
        (name = "Cart", description = "Preorder cart endpoints"),
        (name = "Orders", description = "Order confirmation"),
        (name = "Notifications", description = "Partner notification endpoints"),
        (name = "Browse", description = "Storage-derived shop/mode/image views"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
