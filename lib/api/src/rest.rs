use crate::explain::SimilarityExplainer;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use mixtail_core::{InteractionEvent, Recipe, Recommender};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const FAVORITES_LIMIT: usize = 5;
const HISTORY_LIMIT: usize = 10;

#[derive(Deserialize)]
struct IngredientsQuery {
    ingredients: Vec<String>,
}

#[derive(Deserialize)]
struct SimilarCocktailQuery {
    cocktail_name: String,
}

#[derive(Serialize)]
struct CocktailResponse {
    name: String,
    category: String,
    alcoholic: String,
    glass_type: String,
    instructions: String,
    ingredients: Vec<String>,
    measures: Vec<String>,
    thumbnail: String,
}

impl From<Recipe> for CocktailResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name,
            category: recipe.category,
            alcoholic: recipe.alcoholic,
            glass_type: recipe.glass_type,
            instructions: recipe.instructions,
            ingredients: recipe.ingredients,
            measures: recipe.measures,
            thumbnail: recipe.thumbnail,
        }
    }
}

#[derive(Serialize)]
struct IngredientsResponse {
    ingredients: Vec<String>,
}

#[derive(Serialize)]
struct FavoritesResponse {
    favorites: Vec<(String, u64)>,
}

#[derive(Serialize)]
struct HistoryResponse {
    history: Vec<InteractionEvent>,
}

#[derive(Serialize)]
struct SearchResponse {
    cocktails: Vec<CocktailResponse>,
}

#[derive(Serialize)]
struct SimilarSearchResponse {
    explanation: String,
    cocktails: Vec<CocktailResponse>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        engine: Arc<Recommender>,
        explainer: Option<Arc<SimilarityExplainer>>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .app_data(web::Data::new(explainer.clone()))
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Route table, shared between the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/ingredients", web::get().to(get_ingredients))
        .route("/api/favorites", web::get().to(get_favorites))
        .route("/api/history", web::get().to(get_history))
        .route("/api/search/ingredients", web::post().to(search_ingredients))
        .route("/api/search/similar", web::post().to(search_similar));
}

async fn get_ingredients(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(IngredientsResponse {
        ingredients: engine.ingredients(),
    }))
}

async fn get_favorites(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(FavoritesResponse {
        favorites: engine.top_ingredients(FAVORITES_LIMIT),
    }))
}

async fn get_history(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HistoryResponse {
        history: engine.recent_events(HISTORY_LIMIT),
    }))
}

async fn search_ingredients(
    engine: web::Data<Arc<Recommender>>,
    req: web::Json<IngredientsQuery>,
) -> ActixResult<HttpResponse> {
    if req.ingredients.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No ingredients provided"
        })));
    }

    match engine.search_by_ingredients(&req.ingredients, Recommender::DEFAULT_LIMIT) {
        Ok(results) => Ok(HttpResponse::Ok().json(SearchResponse {
            cocktails: results.into_iter().map(CocktailResponse::from).collect(),
        })),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn search_similar(
    engine: web::Data<Arc<Recommender>>,
    explainer: web::Data<Option<Arc<SimilarityExplainer>>>,
    req: web::Json<SimilarCocktailQuery>,
) -> ActixResult<HttpResponse> {
    if req.cocktail_name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No cocktail name provided"
        })));
    }

    let Some(explainer) = explainer.get_ref() else {
        return Ok(HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "Similarity search is not configured"
        })));
    };

    match explainer
        .find_similar(
            &req.cocktail_name,
            engine.recipes(),
            Recommender::DEFAULT_LIMIT,
        )
        .await
    {
        Ok(result) => {
            engine.record_similarity_query(&req.cocktail_name);
            Ok(HttpResponse::Ok().json(SimilarSearchResponse {
                explanation: result.explanation,
                cocktails: result
                    .cocktails
                    .into_iter()
                    .map(CocktailResponse::from)
                    .collect(),
            }))
        }
        Err(e) => {
            warn!("Similarity search failed: {}", e);
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn recipe(id: u64, name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: "Ordinary Drink".to_string(),
            alcoholic: "Alcoholic".to_string(),
            glass_type: "Cocktail glass".to_string(),
            instructions: "Shake.".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            measures: ingredients.iter().map(|_| "1 oz".to_string()).collect(),
            thumbnail: String::new(),
        }
    }

    fn engine() -> Arc<Recommender> {
        Arc::new(
            Recommender::new(vec![
                recipe(1, "Margarita", &["Tequila", "Lime", "Salt"]),
                recipe(2, "Daiquiri", &["Rum", "Lime", "Sugar"]),
            ])
            .unwrap(),
        )
    }

    macro_rules! test_app {
        ($engine:expr) => {{
            let explainer: Option<Arc<SimilarityExplainer>> = None;
            test::init_service(
                App::new()
                    .app_data(web::Data::new($engine))
                    .app_data(web::Data::new(explainer))
                    .configure(routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_get_ingredients_sorted() {
        let app = test_app!(engine());
        let req = test::TestRequest::get().uri("/api/ingredients").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = body["ingredients"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Lime", "Rum", "Salt", "Sugar", "Tequila"]);
    }

    #[actix_web::test]
    async fn test_search_then_favorites_and_history() {
        let engine = engine();
        let app = test_app!(engine.clone());

        let req = test::TestRequest::post()
            .uri("/api/search/ingredients")
            .set_json(serde_json::json!({"ingredients": ["Lime"]}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = body["cocktails"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Margarita", "Daiquiri"]);

        let req = test::TestRequest::get().uri("/api/favorites").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["favorites"][0][0], "Lime");
        assert_eq!(body["favorites"][0][1], 1);

        let req = test::TestRequest::get().uri("/api/history").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["history"][0]["query_type"], "ingredient_search");
    }

    #[actix_web::test]
    async fn test_search_rejects_empty_ingredient_list() {
        let app = test_app!(engine());
        let req = test::TestRequest::post()
            .uri("/api/search/ingredients")
            .set_json(serde_json::json!({"ingredients": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_similar_without_explainer_is_unavailable() {
        let app = test_app!(engine());
        let req = test::TestRequest::post()
            .uri("/api/search/similar")
            .set_json(serde_json::json!({"cocktail_name": "Margarita"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
