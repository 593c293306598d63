//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{ParamSegment, StaticSegment};

use crate::pages::about::AboutPage;
use crate::pages::admin::{
    AdminCategoryListPage, AdminDashboardPage, AdminProductListPage, AdminSection,
    CategoryFormPage, ProductFormPage,
};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionStore;
use crate::util::guard;

/// Root component: provides the session context and sets up client-side
/// routing. Route access rules live with the pages themselves via
/// `guard::install`.
#[component]
pub fn App(store: SessionStore) -> impl IntoView {
    provide_meta_context();
    provide_context(store);

    view! {
        <Title text="Storefront"/>
        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <ParentRoute path=StaticSegment("admin") view=AdminSection>
                        <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                        <Route path=StaticSegment("categories") view=AdminCategoryListPage/>
                        <Route
                            path=(StaticSegment("categories"), StaticSegment("new"))
                            view=CategoryFormPage
                        />
                        <Route
                            path=(
                                StaticSegment("categories"),
                                StaticSegment("edit"),
                                ParamSegment("id")
                            )
                            view=CategoryFormPage
                        />
                        <Route path=StaticSegment("products") view=AdminProductListPage/>
                        <Route
                            path=(StaticSegment("products"), StaticSegment("new"))
                            view=ProductFormPage
                        />
                        <Route
                            path=(
                                StaticSegment("products"),
                                StaticSegment("edit"),
                                ParamSegment("id")
                            )
                            view=ProductFormPage
                        />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// Top navigation: storefront links for everyone, session actions depending
/// on authentication state.
#[component]
fn NavBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let navigate = use_navigate();
    let on_logout = move |_| {
        store.logout();
        navigate(guard::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="site-nav">
            <a href="/">"Storefront"</a>
            <a href="/about">"About"</a>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <span class="site-nav__auth">
                            <a href="/login">"Sign in"</a>
                            <a href="/register">"Register"</a>
                        </span>
                    }
                }
            >
                <span class="site-nav__auth">
                    <a href="/profile">"Profile"</a>
                    <Show when=move || session.get().is_admin()>
                        <a href="/admin/dashboard">"Admin"</a>
                    </Show>
                    <button class="site-nav__logout" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </span>
            </Show>
        </nav>
    }
}
