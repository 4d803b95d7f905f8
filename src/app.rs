//! Application root: contexts plus the route table.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::layout::Layout;
use crate::components::toast_stack::ToastStack;
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminPage;
use crate::pages::error404::Error404Page;
use crate::pages::home::HomePage;
use crate::pages::ingredients::IngredientsPage;
use crate::pages::login::LoginPage;
use crate::pages::recipes::RecipesPage;
use crate::security::guards::RequireAdmin;
use crate::security::session::provide_auth_session;
use crate::state::notify::provide_notifier;

/// Root component. Provides the session and notifier contexts once, then
/// mounts the router under the shared layout shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_session();
    provide_notifier();

    view! {
        <Title text="Cook & Recipe"/>
        <ToastStack/>
        <Router>
            <Routes fallback=|| view! { <Error404Page/> }>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("recipes") view=RecipesPage/>
                    <Route path=StaticSegment("ingredients") view=IngredientsPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| {
                            view! {
                                <RequireAdmin>
                                    <AdminPage/>
                                </RequireAdmin>
                            }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
