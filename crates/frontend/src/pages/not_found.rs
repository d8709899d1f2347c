use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Page not found"}</h1>
            <Link<AnyRoute> to={AnyRoute::new("/")} classes="text-blue-600 hover:underline">
                {"Back to home"}
            </Link<AnyRoute>>
        </div>
    }
}
