#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use hbnb_api::api::routes::resource_routes;
use hbnb_api::domain::entities::{NewPlace, NewUser, Object, Place, User};
use hbnb_api::domain::repositories::Storage;
use hbnb_api::infrastructure::persistence::MemoryStorage;
use hbnb_api::state::AppState;

pub fn create_test_state() -> (AppState, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::new(storage.clone());
    (state, storage)
}

/// A server over every resource route, backed by fresh memory storage.
pub fn make_server() -> (TestServer, Arc<MemoryStorage>) {
    let (state, storage) = create_test_state();
    let app = resource_routes().with_state(state);
    (TestServer::new(app).unwrap(), storage)
}

pub async fn create_test_user(storage: &MemoryStorage, email: &str) -> User {
    let user = User::new(NewUser {
        email: email.to_string(),
        password: "secret".to_string(),
        first_name: None,
        last_name: None,
    });
    storage.insert(Object::from(user.clone())).await.unwrap();
    storage.save().await.unwrap();
    user
}

pub async fn create_test_place(storage: &MemoryStorage, user_id: &str, name: &str) -> Place {
    let place = Place::new(NewPlace {
        user_id: user_id.to_string(),
        name: name.to_string(),
        ..NewPlace::default()
    });
    storage.insert(Object::from(place.clone())).await.unwrap();
    storage.save().await.unwrap();
    place
}
