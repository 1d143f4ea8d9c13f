// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api_server::{AppError, AppState};
use crate::content::view_builder::{build_detail_page, build_home_page};
use crate::content::view_models::{DetailPageData, HomePageData};
use crate::content::{resolve_catalog, resolve_detail, ResolveError};
use crate::web::components::{Footer, MobileNav, ScrollToTop};

pub const SITE_NAME: &str = "CBAA EcoTag";

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub page: HomePageData,
    pub nav: MobileNav,
    pub scroll: ScrollToTop,
    pub footer: Footer,
}

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let trees = resolve_catalog(state.store.as_ref()).await;
    tracing::debug!("Rendering home page with {} trees", trees.len());

    let template = HomeTemplate {
        title: SITE_NAME.to_string(),
        page: build_home_page(&trees),
        nav: MobileNav::new(),
        scroll: ScrollToTop::new(),
        footer: Footer::current(),
    };
    Ok(Html(template.render()?))
}

// ============================================================================
// Tree Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/tree.html")]
pub struct TreeTemplate {
    pub title: String,
    pub page: DetailPageData,
    pub scroll: ScrollToTop,
}

pub async fn tree_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let detail = match resolve_detail(state.store.as_ref(), &id).await {
        Ok(detail) => detail,
        Err(ResolveError::NotFound(missing)) => {
            tracing::info!("Tree page requested for unknown id '{}'", missing);
            return Ok(not_found_response(Some(missing)));
        }
    };

    let template = TreeTemplate {
        title: format!("{} | {}", detail.name, SITE_NAME),
        page: build_detail_page(&detail),
        scroll: ScrollToTop::new(),
    };
    Ok(Html(template.render()?).into_response())
}

// ============================================================================
// About Page
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ParticipantGroup {
    pub role: &'static str,
    pub members: &'static [&'static str],
}

pub static PURPOSE_GOALS: &[&str] = &[
    "Promote environmental literacy and awareness among the UNP community.",
    "Encourage active stewardship of campus greenery.",
    "Support the university's commitment to the United Nations Sustainable Development Goals (SDGs), specifically SDG 4 (Quality Education), SDG 11 (Sustainable Cities and Communities), SDG 13 (Climate Action), and SDG 15 (Life on Land).",
];

pub static PARTICIPANTS: &[ParticipantGroup] = &[
    ParticipantGroup { role: "Supervising Faculty Member", members: &["Mr. John Paul Robert T. Marzan"] },
    ParticipantGroup {
        role: "Project Manager & Team Members",
        members: &[
            "Jacelle P. Bangui",
            "Reah Desiree M. Nalia",
            "Alnea Nicole Riberal-Tiongson",
            "Gerlyn Mae Ponce",
            "Kristine P. Pilien",
            "Christine Mae Farala",
            "Charlie Trinidad",
            "Henryson Ivan Tabulinar",
        ],
    },
    ParticipantGroup { role: "IT Experts & Web Developers", members: &["Jericko James Q. Tano"] },
    ParticipantGroup { role: "Tree Surveyors & Environmental Volunteers", members: &["Jacelle P. Bangui", "Charlie Trinidad"] },
    ParticipantGroup { role: "Videographers & Editors", members: &["Kristine P. Pilien", "Reah Desiree Nalia"] },
];

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub title: String,
    pub purpose_goals: &'static [&'static str],
    pub participants: &'static [ParticipantGroup],
    pub footer: Footer,
}

pub async fn about_page() -> Result<Html<String>, AppError> {
    let template = AboutTemplate {
        title: format!("About | {}", SITE_NAME),
        purpose_goals: PURPOSE_GOALS,
        participants: PARTICIPANTS,
        footer: Footer::current(),
    };
    Ok(Html(template.render()?))
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub missing_id: Option<String>,
}

/// Fallback for unknown paths.
pub async fn not_found_page() -> Response {
    not_found_response(None)
}

pub fn not_found_response(missing_id: Option<String>) -> Response {
    let template = NotFoundTemplate {
        title: format!("Not Found | {}", SITE_NAME),
        missing_id,
    };
    match template.render() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render not-found page: {}", e);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
