use axum::response::Html;

// Placeholder pages. Rendering is owned by the frontend; these exist so
// the edge middleware has real routes to classify.

pub async fn home() -> Html<&'static str> {
    Html("<h1>iconboard</h1>")
}

pub async fn login() -> Html<&'static str> {
    Html("<h1>Log in</h1>")
}

pub async fn register() -> Html<&'static str> {
    Html("<h1>Create an account</h1>")
}

pub async fn dashboard() -> Html<&'static str> {
    Html("<h1>Dashboard</h1>")
}

pub async fn add_icon() -> Html<&'static str> {
    Html("<h1>Add icon</h1>")
}

pub async fn my_collections() -> Html<&'static str> {
    Html("<h1>My collections</h1>")
}
