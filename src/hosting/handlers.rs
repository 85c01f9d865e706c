use super::*;
use crate::PlayerId;
use crate::arena::Arena;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn register(arena: web::Data<Arena>, body: web::Json<RegisterRequest>) -> impl Responder {
    let id = arena.register(&body.name).await;
    HttpResponse::Ok().json(serde_json::json!({ "player_id": id }))
}

/// Unknown players get an error record, not an HTTP failure.
pub async fn status(arena: web::Data<Arena>, path: web::Path<PlayerId>) -> impl Responder {
    match arena.status(path.into_inner()).await {
        Ok(status) => HttpResponse::Ok().json(status),
        Err(e) => HttpResponse::Ok().json(serde_json::json!({ "error": e.to_string() })),
    }
}

pub async fn submit(arena: web::Data<Arena>, body: web::Json<MoveRequest>) -> impl Responder {
    match arena.submit(body.player_id, &body.word).await {
        Ok(reply) => HttpResponse::Ok().json(serde_json::json!({ "reply": reply.to_string() })),
        Err(e) => HttpResponse::Ok().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::test;
    use serde_json::Value;
    use serde_json::json;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Arena::default()))
                    .configure(Server::routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn unknown_player_status_is_error_record() {
        let app = app!();
        let req = test::TestRequest::get().uri("/status/42").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "error": "player 42 is not registered" }));
    }
    #[actix_web::test]
    async fn register_then_poll_and_move() {
        let app = app!();
        let mut ids = Vec::new();
        for name in ["A", "B", "C"] {
            let req = test::TestRequest::post()
                .uri("/register")
                .set_json(json!({ "name": name }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            ids.push(body["player_id"].as_u64().expect("numeric id"));
        }
        assert_eq!(ids, vec![1, 2, 3]);
        let req = test::TestRequest::get().uri("/status/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "in_game");
        assert_eq!(body["your_turn"], true);
        assert_eq!(body["current_city"], Value::Null);
        assert_eq!(body["players"], json!(["A", "B", "C"]));
        let req = test::TestRequest::post()
            .uri("/move")
            .set_json(json!({ "player_id": 2, "word": "москва" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "reply": "it is not your turn" }));
        let req = test::TestRequest::post()
            .uri("/move")
            .set_json(json!({ "player_id": 1, "word": "Москва" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "reply": "your move 'москва' was received" }));
    }
    #[actix_web::test]
    async fn waiting_player_status() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "name": "solo" }))
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::get().uri("/status/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({ "status": "waiting", "message": "Ожидание подключения к игре..." })
        );
    }
    #[actix_web::test]
    async fn health_check() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
