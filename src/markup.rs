// HTML fragments for the page sections. Every interpolated value is escaped.

use code_rain_core::content::{Contact, Profile, Project};

pub const NO_PROJECTS: &str = "<p>No hay proyectos disponibles.</p>";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn profile_html(profile: &Profile) -> String {
    let mut html = String::new();
    if !profile.photo_url.trim().is_empty() {
        html.push_str(&format!(
            "<div class=\"foto-container\"><img src=\"{}\" alt=\"Foto de perfil\" class=\"foto-perfil\"></div>",
            escape(&profile.photo_url)
        ));
    }
    let name = escape(profile.display_name());
    html.push_str(&format!("<h1>{}</h1>", name));
    html.push_str(&format!("<h3>{}</h3>", escape(profile.display_title())));
    html.push_str(&format!(
        "<section class=\"sobre-mi\"><p>¡Hola! Soy <strong>{}</strong>, Desarrollador con Python.<br>\
         Me encanta crear soluciones prácticas y aprender nuevas tecnologías.<br>\
         <span><strong>Experiencia en:</strong> {}.</span></p></section>",
        name,
        escape(&profile.skills_line())
    ));
    html
}

pub fn projects_html(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }
    projects
        .iter()
        .map(|p| {
            format!(
                "<div class=\"proyecto-card\" data-id=\"{}\"><h3>{}</h3><p>{}</p>\
                 <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Ver en GitHub</a></div>",
                escape(&p.id),
                escape(&p.name),
                escape(&p.description),
                escape(&p.url)
            )
        })
        .collect()
}

/// Only the contact fields that are present get a line.
pub fn contact_html(contact: &Contact) -> String {
    let mut html = String::new();
    if !contact.email.is_empty() {
        html.push_str(&format!("<p>📧 {}</p>", escape(&contact.email)));
    }
    if !contact.phone.is_empty() {
        html.push_str(&format!("<p>📱 {}</p>", escape(&contact.phone)));
    }
    if !contact.linkedin.is_empty() {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a>",
            escape(&contact.linkedin)
        ));
    }
    html
}
