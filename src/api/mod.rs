use rocket::Route;

mod articles;
mod budget;
mod elections;
mod feedback;
mod provinces;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(elections::routes());
    routes.extend(feedback::routes());
    routes.extend(budget::routes());
    routes.extend(articles::routes());
    routes.extend(provinces::routes());
    routes
}
