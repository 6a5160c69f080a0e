// Host-side tests for the page section markup.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use code_rain_core::content::*;
use markup::*;

#[test]
fn escape_covers_html_metacharacters() {
    assert_eq!(
        escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn empty_projects_show_placeholder() {
    assert_eq!(projects_html(&[]), NO_PROJECTS);
}

#[test]
fn projects_render_one_card_each_with_escaped_text() {
    let projects = vec![
        Project {
            id: "1".into(),
            name: "API <Deportes>".into(),
            description: "Control".into(),
            url: "https://github.com/a/b".into(),
        },
        Project {
            id: "2".into(),
            name: "Chatbot".into(),
            description: "openai & localAI".into(),
            url: "https://github.com/c/d".into(),
        },
    ];
    let html = projects_html(&projects);
    assert_eq!(html.matches("class=\"proyecto-card\"").count(), 2);
    assert!(html.contains("API &lt;Deportes&gt;"));
    assert!(html.contains("openai &amp; localAI"));
    assert!(html.contains("href=\"https://github.com/c/d\""));
    assert!(html.contains("data-id=\"2\""));
}

#[test]
fn profile_without_photo_omits_image() {
    let html = profile_html(&Profile::default());
    assert!(!html.contains("<img"));
    assert!(html.contains(DEFAULT_NAME));
    assert!(html.contains(DEFAULT_TITLE));
    assert!(html.contains(DEFAULT_SKILLS_LINE));
}

#[test]
fn fallback_profile_renders_photo_and_skills() {
    let html = profile_html(&fallback_profile());
    assert!(html.contains("<img src=\"/vite.svg\""));
    assert!(html.contains("Python, Flask, FastAPI, React."));
}

#[test]
fn contact_lists_only_present_fields() {
    let contact = Contact {
        email: "a@b.c".into(),
        phone: String::new(),
        linkedin: String::new(),
    };
    let html = contact_html(&contact);
    assert!(html.contains("a@b.c"));
    assert!(!html.contains("📱"));
    assert!(!html.contains("LinkedIn"));

    let full = contact_html(&fallback_contact());
    assert!(full.contains("📱 +34 658973241"));
    assert!(full.contains("LinkedIn"));
}
