use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{CustomerView, LoginRequest, RegisterRequest, UserView},
        carts::{AddToCartRequest, CartLine, CartLineWithProduct, RemoveCartRequest},
        catalog::{
            CategoryDetail, CategoryView, ProductDetail, ProductView, ProductWithCategory,
            RatedProduct, ReviewView, SliderView,
        },
        dashboard::{DashboardChart, DashboardData, StatusCounts},
        invoices::{InvoiceDetail, InvoiceView, InvoiceWithCustomer, OrderLine},
        reviews::{CreateReviewRequest, ReviewRecord},
        shipping::{CheckCostRequest, CitiesRequest, CityView, CostDetail, CourierCost, ProvinceView},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    response::{PageLinks, Paginated},
    routes::{admin, customer, health, params, web},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        admin::auth::login,
        admin::auth::current_user,
        admin::auth::refresh,
        admin::auth::logout,
        admin::categories::list_categories,
        admin::categories::create_category,
        admin::categories::get_category,
        admin::categories::update_category,
        admin::categories::delete_category,
        admin::products::list_products,
        admin::products::create_product,
        admin::products::get_product,
        admin::products::update_product,
        admin::products::delete_product,
        admin::invoices::list_invoices,
        admin::invoices::get_invoice,
        admin::dashboard::dashboard,
        admin::sliders::list_sliders,
        admin::sliders::create_slider,
        admin::sliders::delete_slider,
        admin::users::list_users,
        admin::users::create_user,
        admin::users::get_user,
        admin::users::update_user,
        admin::users::delete_user,
        admin::customers::list_customers,
        customer::auth::register,
        customer::auth::login,
        customer::auth::current_user,
        customer::auth::refresh,
        customer::auth::logout,
        customer::invoices::list_invoices,
        customer::invoices::get_invoice,
        customer::reviews::create_review,
        customer::dashboard::dashboard,
        web::categories::list_categories,
        web::categories::category_detail,
        web::products::list_products,
        web::products::product_detail,
        web::sliders::list_sliders,
        web::carts::list_carts,
        web::carts::add_to_cart,
        web::carts::total_price,
        web::carts::total_weight,
        web::carts::remove_cart,
        web::rajaongkir::provinces,
        web::rajaongkir::cities,
        web::rajaongkir::check_cost
    ),
    components(
        schemas(
            UserView,
            CustomerView,
            LoginRequest,
            RegisterRequest,
            CategoryView,
            ProductView,
            ProductWithCategory,
            RatedProduct,
            ReviewView,
            ProductDetail,
            CategoryDetail,
            SliderView,
            CartLine,
            CartLineWithProduct,
            AddToCartRequest,
            RemoveCartRequest,
            StatusCounts,
            DashboardChart,
            DashboardData,
            InvoiceView,
            InvoiceWithCustomer,
            OrderLine,
            InvoiceDetail,
            ProvinceView,
            CityView,
            CitiesRequest,
            CheckCostRequest,
            CourierCost,
            CostDetail,
            CreateReviewRequest,
            ReviewRecord,
            CreateUserRequest,
            UpdateUserRequest,
            params::ListQuery,
            params::PageQuery,
            PageLinks,
            Paginated<CategoryView>,
            Paginated<ProductWithCategory>,
            Paginated<RatedProduct>,
            Paginated<InvoiceWithCustomer>,
            Paginated<UserView>,
            Paginated<CustomerView>,
            Paginated<SliderView>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Admin Auth", description = "Admin authentication"),
        (name = "Admin Categories", description = "Category management"),
        (name = "Admin Products", description = "Product management"),
        (name = "Admin Invoices", description = "Invoice read models"),
        (name = "Admin Dashboard", description = "Invoice statistics"),
        (name = "Admin Sliders", description = "Slider management"),
        (name = "Admin Users", description = "Admin account management"),
        (name = "Admin Customers", description = "Customer listing"),
        (name = "Customer Auth", description = "Customer authentication"),
        (name = "Customer Invoices", description = "Customer invoice read models"),
        (name = "Customer Reviews", description = "Review submission"),
        (name = "Customer Dashboard", description = "Customer invoice statistics"),
        (name = "Web Categories", description = "Public catalog"),
        (name = "Web Products", description = "Public catalog"),
        (name = "Web Sliders", description = "Public sliders"),
        (name = "Web Carts", description = "Shopping cart"),
        (name = "Web RajaOngkir", description = "Shipping reference data and quotes"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
