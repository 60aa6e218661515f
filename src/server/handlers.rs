use super::dto::*;
use crate::corpus::Corpus;
use crate::selection::Selector;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub async fn health(selector: web::Data<Selector>) -> impl Responder {
    match selector
        .corpus()
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {:#}", e))
    {
        Ok(_) => HttpResponse::Ok().json(Health::healthy()),
        Err(e) => HttpResponse::InternalServerError().json(Health::unhealthy(format!("{:#}", e))),
    }
}

pub async fn scenario(selector: web::Data<Selector>, query: web::Query<StreakQuery>) -> impl Responder {
    let ref mut rng = SmallRng::from_rng(&mut rand::rng());
    match selector
        .select(query.streak, rng)
        .await
        .inspect_err(|e| log::error!("scenario selection failed: {:#}", e))
    {
        Ok(Some(presentation)) => HttpResponse::Ok().json(presentation),
        Ok(None) => HttpResponse::NotFound().json(Failure::from("No scenarios found")),
        Err(e) => HttpResponse::InternalServerError().json(Failure::from(e)),
    }
}

pub async fn stats(selector: web::Data<Selector>) -> impl Responder {
    match selector
        .corpus()
        .stats()
        .await
        .inspect_err(|e| log::error!("stats query failed: {:#}", e))
    {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => HttpResponse::InternalServerError().json(Failure::from(e)),
    }
}
