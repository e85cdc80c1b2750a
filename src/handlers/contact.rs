use axum::Json;

use crate::{
    contact::{ContactForm, ContactReceipt},
    error::AppError,
};

/// Handle POST /v1/contact
pub async fn submit_contact(Json(form): Json<ContactForm>) -> Result<Json<ContactReceipt>, AppError> {
    Ok(Json(form.submit()?))
}
