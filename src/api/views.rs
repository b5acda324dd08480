//! Minimal server-rendered pages for the admin surface.
//!
//! The pages are deliberately thin: a list table and two forms, with
//! the pending flash rendered at the top. All user-supplied values are
//! escaped before interpolation.

use axum::response::Html;
use std::fmt::Write;

use super::flash::Flash;
use crate::config::{ADMIN_USERS_CREATE_PATH, ADMIN_USERS_PATH, ROLE_ADMIN, ROLE_USER};
use crate::domain::User;

/// User listing page
pub fn users_index(users: &[User], flash: Option<&Flash>) -> Html<String> {
    let mut rows = String::new();
    for user in users {
        let _ = write!(
            rows,
            "<tr><td>{name}</td><td>{email}</td><td>{role}</td>\
             <td><a href=\"{base}/{id}/edit\">Modifier</a></td></tr>",
            name = escape(&user.name),
            email = escape(&user.email),
            role = escape(&user.role),
            base = ADMIN_USERS_PATH,
            id = user.id,
        );
    }

    let body = format!(
        "{flash}\
         <h1>Utilisateurs</h1>\
         <p><a href=\"{create}\">Nouvel utilisateur</a></p>\
         <table><thead><tr><th>Nom</th><th>Email</th><th>Rôle</th><th></th></tr></thead>\
         <tbody>{rows}</tbody></table>",
        flash = flash_block(flash),
        create = ADMIN_USERS_CREATE_PATH,
    );

    page("Utilisateurs", &body)
}

/// Empty creation form
pub fn user_create_form(flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        "{flash}\
         <h1>Nouvel utilisateur</h1>\
         <form method=\"post\" action=\"{action}\">\
         {fields}\
         <button type=\"submit\">Créer</button>\
         </form>",
        flash = flash_block(flash),
        action = ADMIN_USERS_PATH,
        fields = form_fields("", "", ""),
    );

    page("Nouvel utilisateur", &body)
}

/// Edit form pre-populated with the record
pub fn user_edit_form(user: &User, flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        "{flash}\
         <h1>Modifier l'utilisateur</h1>\
         <form method=\"post\" action=\"{base}/{id}\">\
         {fields}\
         <button type=\"submit\">Enregistrer</button>\
         </form>",
        flash = flash_block(flash),
        base = ADMIN_USERS_PATH,
        id = user.id,
        fields = form_fields(&user.name, &user.email, &user.role),
    );

    page("Modifier l'utilisateur", &body)
}

fn form_fields(name: &str, email: &str, role: &str) -> String {
    format!(
        "<label>Nom <input type=\"text\" name=\"name\" value=\"{name}\"></label>\
         <label>Email <input type=\"email\" name=\"email\" value=\"{email}\"></label>\
         <label>Mot de passe <input type=\"password\" name=\"password\"></label>\
         <label>Rôle <select name=\"role\">\
         <option value=\"{user}\"{user_sel}>{user}</option>\
         <option value=\"{admin}\"{admin_sel}>{admin}</option>\
         </select></label>",
        name = escape(name),
        email = escape(email),
        user = ROLE_USER,
        admin = ROLE_ADMIN,
        user_sel = selected(role, ROLE_USER),
        admin_sel = selected(role, ROLE_ADMIN),
    )
}

fn selected(role: &str, option: &str) -> &'static str {
    if role == option {
        " selected"
    } else {
        ""
    }
}

fn flash_block(flash: Option<&Flash>) -> String {
    match flash {
        None => String::new(),
        Some(Flash::Success { message }) => {
            format!("<p class=\"flash success\">{}</p>", escape(message))
        }
        Some(Flash::Error { message }) => {
            format!("<p class=\"flash error\">{}</p>", escape(message))
        }
        Some(Flash::FieldErrors { errors }) => {
            let mut items = String::new();
            for (field, messages) in errors.iter() {
                for message in messages {
                    let _ = write!(
                        items,
                        "<li data-field=\"{}\">{}</li>",
                        escape(field),
                        escape(message)
                    );
                }
            }
            format!("<ul class=\"flash errors\">{}</ul>", items)
        }
    }
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html lang=\"fr\"><head><meta charset=\"utf-8\">\
         <title>{}</title></head><body>{}</body></html>",
        escape(title),
        body
    ))
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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
