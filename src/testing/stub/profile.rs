use actix_web::{HttpRequest, HttpResponse, get, put, web};
use serde_json::Value;

use super::StubState;
use super::auth::identity;
use crate::requests::v1::profile::ProfileRequest;
use crate::responses::v1::profile::Profile;

#[get("/api/profile/{uuid}")]
pub async fn show(req: HttpRequest, state: web::Data<StubState>, path: web::Path<String>) -> HttpResponse {
    if let Err(response) = identity(&req, &state) {
        return response;
    }

    let Some(profile) = state.profile(&path) else {
        return HttpResponse::NotFound().body("profile not found");
    };

    if state.behavior.non_object_body {
        return HttpResponse::Ok().json([&profile.first_name, &profile.last_name]);
    }

    let mut body = match serde_json::to_value(&profile) {
        Ok(Value::Object(body)) => body,
        _ => return HttpResponse::InternalServerError().finish(),
    };

    if let Some(field) = &state.behavior.drop_field {
        body.remove(field);
    }
    if let Some(field) = &state.behavior.corrupt_field {
        body.insert(field.clone(), Value::String("corrupted".to_string()));
    }

    HttpResponse::Ok().json(body)
}

#[put("/api/profile/{uuid}")]
pub async fn update(
    req: HttpRequest,
    state: web::Data<StubState>,
    path: web::Path<String>,
    request: web::Json<ProfileRequest>,
) -> HttpResponse {
    let caller = match identity(&req, &state) {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    if caller != *path {
        return HttpResponse::Unauthorized().body("cannot update another user's profile");
    }

    if state.behavior.reject_writes {
        return HttpResponse::InternalServerError().body("error updating profile");
    }

    state.store(&path, Profile::from(request.into_inner()));

    HttpResponse::Ok().finish()
}
