use std::any::Any;

use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, error, info, warn};

use super::templates::{IndexTemplate, RecommendationLine, SuccessTemplate};
use super::AppState;
use crate::flash::{self, FlashMessage, CLEAR_FLASH_COOKIE};
use crate::models::TripForm;
use crate::prompts::DESTINATION_REGION;

pub(crate) const EMPTY_FORM_MESSAGE: &str = "❌ Please fill at least one field!";
pub(crate) const INTERNAL_ERROR_BODY: &str = "Internal Server Error - Check console for details";
pub(crate) const NOT_FOUND_BODY: &str = "Page not found";

/// Any error escaping a handler. Logged in full, reported to the client as a bare 500.
pub(crate) struct AppError(crate::Error);

impl<E: Into<crate::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}

/// `GET /`: the empty form, plus any pending flash message.
pub(crate) async fn show_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let cookie = flash::cookie_value(&headers);
    let message = cookie.and_then(|value| {
        let message = state.flash_key.verify(value);
        if message.is_none() {
            warn!("Ignoring invalid flash cookie");
        }
        message
    });

    let html = IndexTemplate::new(message.as_ref()).render()?;
    let mut response = Html(html).into_response();
    if cookie.is_some() {
        response.headers_mut().insert(
            header::SET_COOKIE,
            HeaderValue::from_static(CLEAR_FLASH_COOKIE),
        );
    }
    Ok(response)
}

/// `POST /`: validate, fetch recommendations when season or month is given, render results.
pub(crate) async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<TripForm>,
) -> Result<Response, AppError> {
    let form = form.trimmed();
    debug!(
        "Form data received: season={}, month={}, year={}, date={}, time={}",
        form.season, form.month, form.year, form.date, form.time
    );

    if form.is_blank() {
        info!("Rejected trip form with no fields filled");
        let cookie = state
            .flash_key
            .set_cookie(&FlashMessage::error(EMPTY_FORM_MESSAGE))?;
        return Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response());
    }

    let recommendations = if form.wants_recommendations() {
        info!("Getting AI recommendations");
        let text = state.recommender.recommend(&form.season, &form.month).await;
        debug!("Recommendations: {}", text);
        text
    } else {
        String::new()
    };

    let html = SuccessTemplate {
        region: DESTINATION_REGION,
        season: &form.season,
        month: &form.month,
        year: &form.year,
        date: &form.date,
        time: &form.time,
        recommendations: &recommendations,
        lines: RecommendationLine::parse_all(&recommendations),
    }
    .render()?;

    Ok(Html(html).into_response())
}

/// Response for a handler that panicked; the payload is logged, never sent.
pub(crate) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!("Handler panicked: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
}

pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
