//! Admin panel section: layout plus the catalog management screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The section layout installs the admin guard once for every nested route,
//! so each child screen is already behind the role check when it renders.
//! The screens themselves are placeholders for catalog CRUD; only the
//! routing surface matters here.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_params_map;

use crate::util::guard::{self, RouteAccess};

#[component]
pub fn AdminSection() -> impl IntoView {
    guard::install(RouteAccess::RequiresAdmin);
    view! {
        <section class="admin-section">
            <nav class="admin-nav">
                <a href="/admin/dashboard">"Dashboard"</a>
                <a href="/admin/categories">"Categories"</a>
                <a href="/admin/products">"Products"</a>
            </nav>
            <Outlet/>
        </section>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Dashboard"</h1>
            <p>"Catalog overview and recent activity."</p>
        </div>
    }
}

#[component]
pub fn AdminCategoryListPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Categories"</h1>
            <a href="/admin/categories/new">"New category"</a>
        </div>
    }
}

/// Shared form screen for `/admin/categories/new` and
/// `/admin/categories/edit/:id`.
#[component]
pub fn CategoryFormPage() -> impl IntoView {
    let params = use_params_map();
    let title = move || match params.read().get("id") {
        Some(id) => format!("Edit category {id}"),
        None => "New category".to_owned(),
    };
    view! {
        <div class="admin-page">
            <h1>{title}</h1>
        </div>
    }
}

#[component]
pub fn AdminProductListPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Products"</h1>
            <a href="/admin/products/new">"New product"</a>
        </div>
    }
}

/// Shared form screen for `/admin/products/new` and
/// `/admin/products/edit/:id`.
#[component]
pub fn ProductFormPage() -> impl IntoView {
    let params = use_params_map();
    let title = move || match params.read().get("id") {
        Some(id) => format!("Edit product {id}"),
        None => "New product".to_owned(),
    };
    view! {
        <div class="admin-page">
            <h1>{title}</h1>
        </div>
    }
}
