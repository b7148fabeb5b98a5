use crate::calendar::{day_key, today};
use crate::errors::AppError;
use crate::models::{
    CreateHabitRequest, DashboardResponse, HabitSummary, HabitsResponse, ToggleRequest,
    ToggleResponse,
};
use crate::state::AppState;
use crate::stats::{build_dashboard, build_habits, daily_rate, habit_summary};
use crate::storage::persist_habits;
use crate::store;
use crate::ui::{render_dashboard, render_index};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = day_key(today());
    let habits = state.habits.lock().await;
    let done = habits
        .iter()
        .filter(|h| h.completions.contains(&date))
        .count();
    let rate = daily_rate(&habits, &date);
    Html(render_index(&date, done, habits.len(), rate))
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let date = day_key(today());
    let habits = state.habits.lock().await;
    Html(render_dashboard(&date, habits.len()))
}

pub async fn get_habits(State(state): State<AppState>) -> Result<Json<HabitsResponse>, AppError> {
    let habits = state.habits.lock().await;
    Ok(Json(build_habits(&habits, today())))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<HabitSummary>, AppError> {
    let date = today();
    let mut habits = state.habits.lock().await;
    let Some(habit) = store::create(
        &mut habits,
        &payload.name,
        &payload.emoji,
        &payload.color,
        date,
    ) else {
        return Err(AppError::bad_request("name must not be empty"));
    };

    persist_habits(&state.data_path, &habits).await?;

    Ok(Json(habit_summary(&habit, date)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let date = match payload.date {
        Some(raw) => parse_day_key(&raw)?,
        None => day_key(today()),
    };

    let mut habits = state.habits.lock().await;
    let Some(done) = store::toggle_day(&mut habits, &id, &date) else {
        return Err(AppError::not_found("no habit with that id"));
    };

    persist_habits(&state.data_path, &habits).await?;

    Ok(Json(ToggleResponse { id, date, done }))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut habits = state.habits.lock().await;
    if !store::delete(&mut habits, &id) {
        return Err(AppError::not_found("no habit with that id"));
    }

    persist_habits(&state.data_path, &habits).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let habits = state.habits.lock().await;
    Ok(Json(build_dashboard(&habits, today())))
}

fn parse_day_key(raw: &str) -> Result<String, AppError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;
    Ok(day_key(date))
}
