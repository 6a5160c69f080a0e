use crate::config::{CONTACT_ID, PROFILE_ID, PROJECTS_ID};
use crate::{dom, markup};
use code_rain_core::content::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(window: &web::Window, url: &str) -> Result<String, ContentError> {
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ContentError::Transport(format!("{:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| ContentError::Transport(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(ContentError::Status(resp.status()));
    }
    let body = resp
        .text()
        .map_err(|e| ContentError::Transport(format!("{:?}", e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| ContentError::Transport(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| ContentError::Transport("response body is not text".into()))
}

/// Fetch every section, substituting the fallback for any that fails.
pub async fn load(window: &web::Window, api_base: &str) -> PageContent {
    let projects = fetch_text(window, &Section::Projects.url(api_base))
        .await
        .and_then(|body| decode_projects(&body));
    let profile = fetch_text(window, &Section::Profile.url(api_base))
        .await
        .and_then(|body| decode_profile(&body));
    let contact = fetch_text(window, &Section::Contact.url(api_base))
        .await
        .and_then(|body| decode_contact(&body));

    let page = PageContent {
        projects: or_fallback(Section::Projects, projects, fallback_projects),
        profile: or_fallback(Section::Profile, profile, fallback_profile),
        contact: or_fallback(Section::Contact, contact, fallback_contact),
    };
    log::info!(
        "[content] loaded projects={} name={:?}",
        page.projects.len(),
        page.profile.display_name()
    );
    page
}

pub fn render(document: &web::Document, page: &PageContent) {
    let sections = [
        (PROFILE_ID, markup::profile_html(&page.profile)),
        (PROJECTS_ID, markup::projects_html(&page.projects)),
        (CONTACT_ID, markup::contact_html(&page.contact)),
    ];
    for (id, html) in sections {
        if !dom::set_html(document, id, &html) {
            log::debug!("[content] no #{} element; skipping", id);
        }
    }
}
