use std::str::FromStr;

use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::Dispatch;

use console_sdk::config::{self, LOGOUT_URL};
use console_sdk::model::page::Page;
use console_sdk::model::user::User;
use console_sdk::state::I18nState;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

#[derive(Properties, Clone, PartialEq)]
pub struct NavbarProps {
    pub user: Option<User>,
    pub lang: LanguageType,
    pub refresh: Callback<()>,
}

/// Top bar: signed-in email and roles, refresh, language switch and logout.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let i18n = utils::create_bundle(props.lang.pick(en_us::NAV, ru_ru::NAV));
    let (email, roles) = props
        .user
        .as_ref()
        .map(|user| (user.email_text(), user.roles_bracketed()))
        .unwrap_or_default();

    let on_lang = Callback::from(|event: Event| {
        let value = event.target_unchecked_into::<HtmlSelectElement>().value();
        match LanguageType::from_str(&value) {
            Ok(lang) => {
                log::debug!("switch language: {}", lang);
                Dispatch::<I18nState>::global().reduce_mut(|s| s.lang = lang);
            }
            Err(err) => log::warn!("{}", err),
        }
    });
    let on_refresh = props.refresh.reform(|_: MouseEvent| ());
    let logout = config::endpoint(LOGOUT_URL);

    html! {
        <nav class="navbar navbar-dark bg-dark px-3">
            <span class="navbar-text text-white">
                <b id="userEmail">{email}</b>
                {" "}{tr!(i18n, "with_roles")}{" "}
                <span id="userRoles">{roles}</span>
            </span>
            <div class="d-flex align-items-center gap-2">
                <button type="button" class="btn btn-outline-light btn-sm" onclick={on_refresh}>
                    {tr!(i18n, "refresh")}
                </button>
                <select class="form-select form-select-sm" onchange={on_lang}>
                    <option value={LanguageType::EnUS.to_string()} selected={props.lang == LanguageType::EnUS}>{"ENG"}</option>
                    <option value={LanguageType::RuRU.to_string()} selected={props.lang == LanguageType::RuRU}>{"РУС"}</option>
                </select>
                <form action={logout} method="post">
                    <button type="submit" class="btn btn-link nav-link text-secondary">{tr!(i18n, "logout")}</button>
                </form>
            </div>
        </nav>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SidebarProps {
    pub user: Option<User>,
    pub active: Page,
    pub lang: LanguageType,
}

/// Admin / User links. The admin link is only offered to admins.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let i18n = utils::create_bundle(props.lang.pick(en_us::NAV, ru_ru::NAV));
    let is_admin = props.user.as_ref().is_some_and(User::is_admin);
    let class = |page: Page| {
        classes!(
            "nav-link",
            (props.active == page).then_some("active")
        )
    };
    let admin = if is_admin || props.active == Page::Admin {
        html! {
            <li class="nav-item">
                <Link<Page> to={Page::Admin} classes={class(Page::Admin)}>{tr!(i18n, "admin")}</Link<Page>>
            </li>
        }
    } else {
        html!()
    };
    html! {
        <ul class="nav nav-pills flex-column">
            {admin}
            <li class="nav-item">
                <Link<Page> to={Page::Profile} classes={class(Page::Profile)}>{tr!(i18n, "user")}</Link<Page>>
            </li>
        </ul>
    }
}
