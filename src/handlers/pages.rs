//! # Page Handlers
//!
//! Read-only pages. Markup is deliberately minimal; each page is a small
//! inline HTML document.

use crate::db::models::Account;
use axum::response::Html;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title} | Members Club</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">{submit}</button>\n\
         </form>"
    )
}

/// Minimal HTML escaping for text interpolated into pages
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// GET /
pub async fn landing() -> Html<String> {
    Html(layout(
        "Welcome",
        "<h1>Members Club</h1>\n\
         <p><a href=\"/registro\">Register</a> or <a href=\"/login\">log in</a> to see your profile.</p>",
    ))
}

/// GET /registro
pub async fn registration_form() -> Html<String> {
    let body = format!(
        "<h1>Register</h1>\n{}\n<p>Already a member? <a href=\"/login\">Log in</a></p>",
        credentials_form("/registro", "Register")
    );
    Html(layout("Register", &body))
}

/// GET /login
pub async fn login_form() -> Html<String> {
    let body = format!(
        "<h1>Log in</h1>\n{}\n<p>New here? <a href=\"/registro\">Register</a></p>",
        credentials_form("/login", "Log in")
    );
    Html(layout("Log in", &body))
}

/// Profile page for a logged-in account
pub fn profile_page(account: &Account) -> Html<String> {
    let body = format!(
        "<h1>Your profile</h1>\n\
         <p>Logged in as <strong>{}</strong>.</p>\n\
         <p>Member since {}.</p>\n\
         <form method=\"post\" action=\"/logout\"><button type=\"submit\">Log out</button></form>",
        escape(&account.email),
        account.created_at.format("%Y-%m-%d"),
    );
    Html(layout("Profile", &body))
}
