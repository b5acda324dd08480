//! Admin user handlers.
//!
//! Each write operation persists at most once, sets exactly one flash
//! entry and answers with a redirect. Validation failures flash the
//! field-error map; any other failure flashes the operation's generic
//! message. The list and edit pages let lookup errors surface as plain
//! HTTP responses.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::api::flash::Flash;
use crate::api::views;
use crate::api::AppState;
use crate::config::{ADMIN_USERS_CREATE_PATH, ADMIN_USERS_PATH};
use crate::errors::{AppError, AppResult};
use crate::services::{UserInput, ValidationMode};

/// Success messages flashed after a completed write
pub const CREATED: &str = "Utilisateur créé avec succès";
pub const UPDATED: &str = "L'utilisateur a modifié avec succès";
pub const DELETED: &str = "L'utilisateur a supprimé avec succès";

/// Generic failure messages, one per operation
pub const CREATE_FAILED: &str = "Une erreur s'est produite lors de l'inscription. \
     Veuillez vérifier vos informations et réessayer.";
pub const UPDATE_FAILED: &str = "Une erreur s'est produite lors de l'enregistrement. \
     Veuillez vérifier vos données et réessayer.";
pub const DELETE_FAILED: &str = "Une erreur s'est produite lors de la suppression. \
     Veuillez réessayer plus tard.";

/// Create admin user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/create", get(new_user_form))
        .route("/:id/edit", get(edit_user_form))
        .route(
            "/:id",
            axum::routing::put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let users = state.user_service.list_users().await?;

    let (jar, flash) = Flash::take(jar);
    Ok((jar, views::users_index(&users, flash.as_ref())))
}

/// Render the empty creation form
pub async fn new_user_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = Flash::take(jar);
    (jar, views::user_create_form(flash.as_ref()))
}

/// Create a user from the submitted form
pub async fn create_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<UserInput>,
) -> (CookieJar, Redirect) {
    let fields = match state.validator.validate(&ValidationMode::Create, &input).await {
        Ok(fields) => fields,
        Err(err) => return flash_failure(jar, err, CREATE_FAILED, ADMIN_USERS_CREATE_PATH),
    };

    match state.user_service.create_user(fields).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user created");
            redirect_with(jar, Flash::success(CREATED), ADMIN_USERS_PATH)
        }
        Err(err) => flash_failure(jar, err, CREATE_FAILED, ADMIN_USERS_CREATE_PATH),
    }
}

/// Render the edit form pre-populated with the record.
///
/// An unknown id is a plain 404 here: nothing was submitted yet, so
/// there is no form state to preserve.
pub async fn edit_user_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let user = state.user_service.get_user(id).await?;

    let (jar, flash) = Flash::take(jar);
    Ok((jar, views::user_edit_form(&user, flash.as_ref())))
}

/// Overwrite a user from the submitted form
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
    Form(input): Form<UserInput>,
) -> (CookieJar, Redirect) {
    let back = format!("{}/{}/edit", ADMIN_USERS_PATH, id);

    let user = match state.user_service.get_user(id).await {
        Ok(user) => user,
        Err(err) => return flash_failure(jar, err, UPDATE_FAILED, &back),
    };

    let mode = ValidationMode::UpdateExisting {
        id: user.id,
        current_email: user.email,
    };
    let fields = match state.validator.validate(&mode, &input).await {
        Ok(fields) => fields,
        Err(err) => return flash_failure(jar, err, UPDATE_FAILED, &back),
    };

    match state.user_service.update_user(id, fields).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user updated");
            redirect_with(jar, Flash::success(UPDATED), ADMIN_USERS_PATH)
        }
        Err(err) => flash_failure(jar, err, UPDATE_FAILED, &back),
    }
}

/// Delete a user.
///
/// An unknown id lands in the generic failure path: the record is
/// gone either way, the flash tells the admin the action did not run.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    match state.user_service.delete_user(id).await {
        Ok(()) => {
            tracing::info!(user_id = %id, "user deleted");
            redirect_with(jar, Flash::success(DELETED), ADMIN_USERS_PATH)
        }
        Err(err) => flash_failure(jar, err, DELETE_FAILED, ADMIN_USERS_PATH),
    }
}

fn redirect_with(jar: CookieJar, flash: Flash, to: &str) -> (CookieJar, Redirect) {
    (flash.set(jar), Redirect::to(to))
}

/// Convert a failed operation into its flash + redirect-back response.
/// Field-level errors flash as-is; everything else becomes the
/// operation's generic message with the cause logged.
fn flash_failure(jar: CookieJar, err: AppError, generic: &str, back: &str) -> (CookieJar, Redirect) {
    let flash = match err {
        AppError::Validation(errors) => Flash::field_errors(errors),
        other => {
            tracing::error!(error = %other, "admin user operation failed");
            Flash::error(generic)
        }
    };

    redirect_with(jar, flash, back)
}
